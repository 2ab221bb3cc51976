//! Per-team offensive and defensive rates derived from historical results.
//!
//! Rates are accumulated in a [ScoringRatesBuilder] and then frozen into an immutable
//! [ScoringRates], which may be shared freely across threads.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::domain::{MatchResult, Team, MATCH_MINUTES};

/// Scoring rate assumed for a team with no recorded matches: one goal per match.
pub const DEFAULT_GOALS_PER_MINUTE: f64 = 1.0 / MATCH_MINUTES as f64;

/// Defensive factor of a team with no recorded matches: exactly the league average.
pub const NEUTRAL_DEFENSIVE_FACTOR: f64 = 1.0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamScoring {
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub matches: u32,
}
impl TeamScoring {
    pub fn goals_scored_per_minute(&self) -> f64 {
        if self.matches == 0 {
            return DEFAULT_GOALS_PER_MINUTE;
        }
        self.goals_scored as f64 / (MATCH_MINUTES as f64 * self.matches as f64)
    }

    pub fn goals_conceded_per_match(&self) -> f64 {
        if self.matches == 0 {
            return 1.0;
        }
        self.goals_conceded as f64 / self.matches as f64
    }

    fn record(&mut self, scored: u16, conceded: u16) {
        self.goals_scored += scored as u32;
        self.goals_conceded += conceded as u32;
        self.matches += 1;
    }

    fn absorb(&mut self, other: &TeamScoring) {
        self.goals_scored += other.goals_scored;
        self.goals_conceded += other.goals_conceded;
        self.matches += other.matches;
    }
}

/// Mutable accumulator for [ScoringRates]. Folding is pure accumulation, so results may be
/// added in any order, or split across several builders and [merged](Self::merge) later.
#[derive(Debug, Default)]
pub struct ScoringRatesBuilder {
    teams: FxHashMap<String, TeamScoring>,
    total_goals: u64,
    total_matches: u64,
}
impl ScoringRatesBuilder {
    pub fn add(&mut self, result: &MatchResult) -> &mut Self {
        let fixture = &result.fixture;
        self.teams
            .entry(fixture.home_team.name.clone())
            .or_default()
            .record(result.home_goals, result.away_goals);
        self.teams
            .entry(fixture.away_team.name.clone())
            .or_default()
            .record(result.away_goals, result.home_goals);
        self.total_goals += result.total_goals() as u64;
        self.total_matches += 1;
        self
    }

    pub fn merge(mut self, other: ScoringRatesBuilder) -> Self {
        for (name, scoring) in other.teams {
            self.teams.entry(name).or_default().absorb(&scoring);
        }
        self.total_goals += other.total_goals;
        self.total_matches += other.total_matches;
        self
    }

    pub fn build(self) -> ScoringRates {
        debug!(
            "built scoring rates for {} teams from {} matches ({} goals)",
            self.teams.len(),
            self.total_matches,
            self.total_goals
        );
        ScoringRates {
            teams: self.teams,
            total_goals: self.total_goals,
            total_matches: self.total_matches,
        }
    }
}

impl<'a> Extend<&'a MatchResult> for ScoringRatesBuilder {
    fn extend<T: IntoIterator<Item = &'a MatchResult>>(&mut self, results: T) {
        for result in results {
            self.add(result);
        }
    }
}

/// Frozen scoring model. Unknown teams resolve to [DEFAULT_GOALS_PER_MINUTE] and
/// [NEUTRAL_DEFENSIVE_FACTOR] rather than failing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoringRates {
    teams: FxHashMap<String, TeamScoring>,
    total_goals: u64,
    total_matches: u64,
}
impl ScoringRates {
    pub fn builder() -> ScoringRatesBuilder {
        ScoringRatesBuilder::default()
    }

    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a MatchResult>) -> Self {
        let mut builder = Self::builder();
        builder.extend(results);
        builder.build()
    }

    pub fn team(&self, team: &Team) -> Option<&TeamScoring> {
        self.teams.get(&team.name)
    }

    pub fn teams(&self) -> usize {
        self.teams.len()
    }

    pub fn total_goals(&self) -> u64 {
        self.total_goals
    }

    pub fn total_matches(&self) -> u64 {
        self.total_matches
    }

    pub fn goals_scored_per_minute(&self, team: &Team) -> f64 {
        self.team(team)
            .map(TeamScoring::goals_scored_per_minute)
            .unwrap_or(DEFAULT_GOALS_PER_MINUTE)
    }

    /// Average goals conceded per match by one side, across the whole league.
    pub fn league_goals_conceded_per_match(&self) -> f64 {
        if self.total_matches == 0 {
            return 0.0;
        }
        self.total_goals as f64 / self.total_matches as f64 / 2.0
    }

    /// Goals conceded per match relative to the league average: above 1 is a weaker defence,
    /// below 1 a stronger one.
    pub fn defensive_factor(&self, team: &Team) -> f64 {
        let Some(scoring) = self.team(team) else {
            return NEUTRAL_DEFENSIVE_FACTOR;
        };
        let baseline = self.league_goals_conceded_per_match();
        if baseline == 0.0 {
            // goalless league
            return NEUTRAL_DEFENSIVE_FACTOR;
        }
        scoring.goals_conceded_per_match() / baseline
    }
}

impl<'a> FromIterator<&'a MatchResult> for ScoringRates {
    fn from_iter<T: IntoIterator<Item = &'a MatchResult>>(results: T) -> Self {
        Self::from_results(results)
    }
}

#[cfg(test)]
mod tests;
