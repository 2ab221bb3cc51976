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
use matchcast::domain::{Fixture, Scenario, Team, MATCH_MINUTES};
use matchcast::file::ReadJsonFile;
use matchcast::forecast::Forecaster;
use matchcast::print;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV file of historical results to train on
    #[clap(short = 'r', long)]
    results: Option<PathBuf>,

    /// train only on seasons before this one
    #[clap(short = 's', long)]
    season: Option<u16>,

    /// model catalogue; the built-in catalogue is used if omitted
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// list the configured models and exit
    #[clap(long)]
    list: bool,

    /// name of the model to forecast with
    #[clap(short = 'm', long)]
    model: Option<String>,

    /// home team
    home: Option<String>,

    /// away team
    away: Option<String>,

    /// league the fixture is played in
    #[clap(short = 'l', long, default_value = "")]
    league: String,

    /// minutes played so far; forecasts from kickoff if omitted
    #[clap(long)]
    minutes: Option<u8>,

    /// goals scored so far by the home team
    #[clap(long, default_value_t = 0)]
    home_goals: u16,

    /// goals scored so far by the away team
    #[clap(long, default_value_t = 0)]
    away_goals: u16,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.list {
            return Ok(());
        }
        self.results
            .as_ref()
            .ok_or(anyhow!("results file must be specified"))?;
        self.model
            .as_ref()
            .ok_or(anyhow!("model must be specified"))?;
        self.home
            .as_ref()
            .ok_or(anyhow!("home team must be specified"))?;
        self.away
            .as_ref()
            .ok_or(anyhow!("away team must be specified"))?;
        if let Some(minutes) = self.minutes {
            if minutes > MATCH_MINUTES {
                return Err(anyhow!("minutes must not exceed {MATCH_MINUTES}"));
            }
        }
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
    config.validate()?;

    if args.list {
        let registry = config.assemble(&[])?;
        let table = print::tabulate_models(&registry.list());
        println!("{}", Console::default().render(&table));
        return Ok(());
    }

    let results = data::read_results(args.results.unwrap())?;
    let training = match args.season {
        Some(season) => data::training(&results, season, |_| true),
        None => results,
    };
    info!("training on {} results", training.len());
    let forecaster = Forecaster::new(config.assemble(&training)?);

    let fixture = Fixture::new(
        Team::new(args.home.unwrap()),
        Team::new(args.away.unwrap()),
        args.league,
    );
    let model = args.model.unwrap();
    let forecast = match args.minutes {
        Some(minutes) => {
            let scenario = Scenario::new(minutes, args.home_goals, args.away_goals);
            forecaster.forecast_in_progress(&fixture, &scenario, &model)
        }
        None => forecaster.forecast(&fixture, &model),
    };
    let forecast = forecast.ok_or(anyhow!("cannot forecast {fixture} with '{model}'"))?;
    println!("{}", serde_json::to_string_pretty(&forecast)?);
    Ok(())
}
