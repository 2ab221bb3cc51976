//! Team listing derived from known fixtures.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::Fixture;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamWithLeagues {
    pub name: String,
    pub leagues: Vec<String>,
}

/// Every team appearing on either side of `fixtures`, ordered by name, with the leagues it was
/// seen in.
pub fn all<'a>(fixtures: impl IntoIterator<Item = &'a Fixture>) -> Vec<TeamWithLeagues> {
    let mut teams: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for fixture in fixtures {
        for team in [&fixture.home_team, &fixture.away_team] {
            teams
                .entry(team.name.as_str())
                .or_default()
                .insert(fixture.league.as_str());
        }
    }
    teams
        .into_iter()
        .map(|(name, leagues)| TeamWithLeagues {
            name: name.into(),
            leagues: leagues.into_iter().map(Into::into).collect(),
        })
        .collect()
}
