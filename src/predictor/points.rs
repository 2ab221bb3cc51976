//! League-table strategy: the side with more points from past results is backed.

use rustc_hash::FxHashMap;

use crate::domain::{Fixture, MatchResult, Outcome, Team};
use crate::predictor::{Prediction, Predictor};

const WIN_POINTS: u32 = 3;
const DRAW_POINTS: u32 = 1;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointsTable {
    points: FxHashMap<String, u32>,
}
impl PointsTable {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a MatchResult>) -> Self {
        let mut table = Self::default();
        for result in results {
            let fixture = &result.fixture;
            match result.outcome {
                Outcome::Home => table.award(&fixture.home_team, WIN_POINTS),
                Outcome::Away => table.award(&fixture.away_team, WIN_POINTS),
                Outcome::Draw => {
                    table.award(&fixture.home_team, DRAW_POINTS);
                    table.award(&fixture.away_team, DRAW_POINTS);
                }
            }
        }
        table
    }

    pub fn points_for(&self, team: &Team) -> u32 {
        self.points.get(&team.name).copied().unwrap_or(0)
    }

    fn award(&mut self, team: &Team, points: u32) {
        *self.points.entry(team.name.clone()).or_default() += points;
    }
}

#[derive(Debug)]
pub struct PointsPredictor {
    table: PointsTable,
}
impl PointsPredictor {
    pub fn new(table: PointsTable) -> Self {
        Self { table }
    }

    pub fn train<'a>(results: impl IntoIterator<Item = &'a MatchResult>) -> Self {
        Self::new(PointsTable::from_results(results))
    }
}

impl Predictor for PointsPredictor {
    fn predict(&self, fixture: &Fixture) -> Prediction {
        let home_points = self.table.points_for(&fixture.home_team);
        let away_points = self.table.points_for(&fixture.away_team);
        let outcome = match home_points.cmp(&away_points) {
            std::cmp::Ordering::Greater => Outcome::Home,
            std::cmp::Ordering::Less => Outcome::Away,
            std::cmp::Ordering::Equal => Outcome::Draw,
        };
        Prediction::new(outcome)
    }
}
