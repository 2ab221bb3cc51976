//! Testing helpers.

use crate::domain::{Fixture, MatchResult, Team};

pub const TEST_LEAGUE: &str = "Test League";
pub const TEST_SEASON: u16 = 2022;

pub fn fixture(home: &str, away: &str) -> Fixture {
    Fixture::new(Team::new(home), Team::new(away), TEST_LEAGUE)
}

pub fn result(home: &str, away: &str, home_goals: u16, away_goals: u16) -> MatchResult {
    MatchResult::new(fixture(home, away), home_goals, away_goals, TEST_SEASON)
}

/// "Team A" scores 4 across two matches without conceding; "Team B" is its mirror image.
pub fn lopsided_results() -> Vec<MatchResult> {
    vec![
        result("Team A", "Team B", 2, 0),
        result("Team B", "Team A", 0, 2),
    ]
}
