//! Loading of historical results from a local CSV file.
//!
//! The file must carry a header row naming at least the `season`, `league`, `team1`, `team2`,
//! `score1` and `score2` columns; other columns are ignored. Rows that lack any of these fields,
//! or whose numeric fields do not parse, are skipped.

use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, trace};

use crate::domain::{Fixture, MatchResult, Team};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("missing header row")]
    MissingHeader,

    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
}

#[derive(Debug)]
struct Columns {
    season: usize,
    league: usize,
    team1: usize,
    team2: usize,
    score1: usize,
    score2: usize,
}
impl Columns {
    fn locate(header: &[&str]) -> Result<Self, DataError> {
        let find = |name: &'static str| {
            header
                .iter()
                .position(|&column| column.trim() == name)
                .ok_or(DataError::MissingColumn(name))
        };
        Ok(Self {
            season: find("season")?,
            league: find("league")?,
            team1: find("team1")?,
            team2: find("team2")?,
            score1: find("score1")?,
            score2: find("score2")?,
        })
    }

    fn parse(&self, row: &[&str]) -> Option<MatchResult> {
        let field = |index: usize| row.get(index).map(|value| value.trim());
        let home_goals = field(self.score1)?.parse().ok()?;
        let away_goals = field(self.score2)?.parse().ok()?;
        let season = field(self.season)?.parse().ok()?;
        let fixture = Fixture::new(
            Team::new(field(self.team1)?),
            Team::new(field(self.team2)?),
            field(self.league)?,
        );
        Some(MatchResult::new(fixture, home_goals, away_goals, season))
    }
}

pub fn read_results(path: impl AsRef<Path>) -> Result<Vec<MatchResult>, DataError> {
    let file = File::open(path)?;
    parse_results(BufReader::new(file))
}

pub fn parse_results(reader: impl BufRead) -> Result<Vec<MatchResult>, DataError> {
    let mut lines = reader.lines();
    let header = lines.next().ok_or(DataError::MissingHeader)??;
    let header: Vec<_> = header.split(',').collect();
    let columns = Columns::locate(&header)?;

    let mut results = vec![];
    let mut skipped = 0;
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<_> = line.split(',').collect();
        match columns.parse(&row) {
            Some(result) => results.push(result),
            None => {
                trace!("skipping row {line}");
                skipped += 1;
            }
        }
    }
    debug!("parsed {} results, skipped {skipped} rows", results.len());
    Ok(results)
}

/// Results from seasons before `season` that satisfy `filter`.
pub fn training(
    results: &[MatchResult],
    season: u16,
    filter: impl Fn(&MatchResult) -> bool,
) -> Vec<MatchResult> {
    select(results, |result| result.season < season && filter(result))
}

/// Results from exactly `season` that satisfy `filter`.
pub fn validation(
    results: &[MatchResult],
    season: u16,
    filter: impl Fn(&MatchResult) -> bool,
) -> Vec<MatchResult> {
    select(results, |result| result.season == season && filter(result))
}

fn select(results: &[MatchResult], predicate: impl Fn(&MatchResult) -> bool) -> Vec<MatchResult> {
    results
        .iter()
        .filter(|&result| predicate(result))
        .cloned()
        .collect()
}
