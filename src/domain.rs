//! Core value types: teams, fixtures, in-play scenarios, outcomes and historical results.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

/// Length of regulation time, in minutes.
pub const MATCH_MINUTES: u8 = 90;

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
}
impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home_team: Team,
    pub away_team: Team,
    pub league: String,
}
impl Fixture {
    pub fn new(home_team: Team, away_team: Team, league: impl Into<String>) -> Self {
        Self {
            home_team,
            away_team,
            league: league.into(),
        }
    }

    /// A fixture pitting a team against itself cannot be forecast.
    pub fn is_valid(&self) -> bool {
        self.home_team.name != self.away_team.name
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v {} ({})", self.home_team, self.away_team, self.league)
    }
}

/// Progress of a fixture: minutes played and goals scored by each side so far.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub minutes_elapsed: u8,
    pub home_goals: u16,
    pub away_goals: u16,
}
impl Scenario {
    pub fn new(minutes_elapsed: u8, home_goals: u16, away_goals: u16) -> Self {
        Self {
            minutes_elapsed,
            home_goals,
            away_goals,
        }
    }

    pub fn kickoff() -> Self {
        Self::default()
    }

    /// Minutes left to play, saturating at zero for scenarios past full time.
    pub fn remaining_minutes(&self) -> u8 {
        MATCH_MINUTES.saturating_sub(self.minutes_elapsed)
    }
}

#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, EnumCount, EnumIter, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Home,
    Away,
    Draw,
}
impl Outcome {
    pub fn from_score<G: Ord>(home_goals: G, away_goals: G) -> Self {
        match home_goals.cmp(&away_goals) {
            Ordering::Greater => Outcome::Home,
            Ordering::Less => Outcome::Away,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// A completed historical fixture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture: Fixture,
    pub outcome: Outcome,
    pub home_goals: u16,
    pub away_goals: u16,
    pub season: u16,
}
impl MatchResult {
    pub fn new(fixture: Fixture, home_goals: u16, away_goals: u16, season: u16) -> Self {
        Self {
            fixture,
            outcome: Outcome::from_score(home_goals, away_goals),
            home_goals,
            away_goals,
            season,
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.home_goals as u32 + self.away_goals as u32
    }
}
