use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use matchcast::config::ModelsConfig;
use matchcast::data;
use matchcast::domain::MatchResult;
use matchcast::evaluation::Reporter;
use matchcast::file::ReadJsonFile;
use matchcast::print;

const TRAINING_SEASONS: u16 = 3;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV file of historical results
    results: Option<PathBuf>,

    /// league to train and validate on
    #[clap(short = 'l', long)]
    league: Option<String>,

    /// season to validate on; the preceding seasons are used for training
    #[clap(short = 's', long)]
    season: Option<u16>,

    /// model catalogue; the built-in catalogue is used if omitted
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.results
            .as_ref()
            .ok_or(anyhow!("results file must be specified"))?;
        self.league
            .as_ref()
            .ok_or(anyhow!("league must be specified"))?;
        self.season
            .as_ref()
            .ok_or(anyhow!("season must be specified"))?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let config = match &args.config {
        Some(path) => ModelsConfig::read_json_file(path)?,
        None => ModelsConfig::default(),
    };

    let results = data::read_results(args.results.unwrap())?;
    let league = args.league.unwrap();
    let season = args.season.unwrap();
    let first_season = season.saturating_sub(TRAINING_SEASONS);
    let in_league = |result: &MatchResult| result.fixture.league == league;
    let training = data::training(&results, season, |result| {
        result.season >= first_season && in_league(result)
    });
    let validation = data::validation(&results, season, in_league);
    info!(
        "{league}: training on {} results from {first_season}..{season}, validating on {} results",
        training.len(),
        validation.len()
    );

    let registry = config.assemble(&training)?;
    let reports = Reporter::new(format!("{league} {season}"), &validation, &registry).run()?;
    let table = print::tabulate_reports(&reports);
    info!("accuracy:\n{}", Console::default().render(&table));
    Ok(())
}
