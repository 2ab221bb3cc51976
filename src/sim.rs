//! A single stochastic trial of the remaining minutes of a fixture.
//!
//! Each remaining minute contributes two independent Bernoulli draws, one per side; a side scores
//! in that minute if its draw does not exceed its effective per-minute goal rate. At most one goal
//! per side per minute is therefore possible.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use tinyrand::Rand;

use crate::domain::{Fixture, Outcome, Scenario};
use crate::scoring::ScoringRates;

/// Effective per-minute goal rates of both sides.
#[derive(Clone, Debug, PartialEq)]
pub struct GoalRates {
    pub home: f64,
    pub away: f64,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Simulator {
    /// Each side attacks at its own historical scoring rate.
    Offense,

    /// Each side's scoring rate is scaled by the opponent's defensive factor.
    OffenseAndDefense,
}
impl Simulator {
    pub fn goal_rates(&self, rates: &ScoringRates, fixture: &Fixture) -> GoalRates {
        let home = rates.goals_scored_per_minute(&fixture.home_team);
        let away = rates.goals_scored_per_minute(&fixture.away_team);
        match self {
            Simulator::Offense => GoalRates { home, away },
            Simulator::OffenseAndDefense => GoalRates {
                home: home * rates.defensive_factor(&fixture.away_team),
                away: away * rates.defensive_factor(&fixture.home_team),
            },
        }
    }

    pub fn run_once(
        &self,
        rates: &ScoringRates,
        fixture: &Fixture,
        scenario: &Scenario,
        rand: &mut impl Rand,
    ) -> Outcome {
        simulate(&self.goal_rates(rates, fixture), scenario, rand)
    }
}

/// Plays out the minutes remaining in `scenario`, starting from its current score.
pub fn simulate(goal_rates: &GoalRates, scenario: &Scenario, rand: &mut impl Rand) -> Outcome {
    let (mut home_goals, mut away_goals) =
        (u32::from(scenario.home_goals), u32::from(scenario.away_goals));
    for _ in 0..scenario.remaining_minutes() {
        if random_f64(rand) <= goal_rates.home {
            home_goals += 1;
        }
        if random_f64(rand) <= goal_rates.away {
            away_goals += 1;
        }
    }
    Outcome::from_score(home_goals, away_goals)
}

/// Uniform draw in [0, 1) from the top 53 bits of the next random word.
#[inline]
pub fn random_f64(rand: &mut impl Rand) -> f64 {
    const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
    (rand.next_u64() >> 11) as f64 * SCALE
}
