//! Monte Carlo aggregation of repeated [simulation](crate::sim) trials into a [Prediction].

use std::sync::Arc;

use tinyrand::{Rand, Seeded, StdRand};
use tinyrand_std::ClockSeed;
use tracing::trace;

use crate::domain::{Fixture, MatchResult, Outcome, Scenario};
use crate::predictor::{InProgressPredictor, Prediction, Predictor};
use crate::scoring::ScoringRates;
use crate::sim;
use crate::sim::Simulator;

/// Number of trials yielding each outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub home: u64,
    pub away: u64,
    pub draw: u64,
}
impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Home => self.home += 1,
            Outcome::Away => self.away += 1,
            Outcome::Draw => self.draw += 1,
        }
    }

    pub fn trials(&self) -> u64 {
        self.home + self.away + self.draw
    }

    /// Selects the most frequent outcome. Home must strictly beat both alternatives; failing
    /// that, away must strictly beat draw; otherwise draw is returned. A home/draw tie above
    /// away therefore resolves to draw, and a home/away tie above draw resolves to away.
    pub fn verdict(&self) -> Prediction {
        let trials = self.trials() as f64;
        debug_assert!(trials > 0.0, "no trials recorded");
        if self.home > self.away && self.home > self.draw {
            Prediction::with_confidence(Outcome::Home, self.home as f64 / trials)
        } else if self.away > self.draw {
            Prediction::with_confidence(Outcome::Away, self.away as f64 / trials)
        } else {
            Prediction::with_confidence(Outcome::Draw, self.draw as f64 / trials)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
    /// A fresh generator, seeded from the system clock, for every prediction.
    Clock,

    /// A fresh generator with the same seed for every prediction.
    Fixed(u64),
}

#[derive(Debug)]
pub struct MonteCarloPredictor {
    simulator: Simulator,
    rates: Arc<ScoringRates>,
    trials: u64,
    seeding: Seeding,
}
impl MonteCarloPredictor {
    pub fn new(simulator: Simulator, rates: Arc<ScoringRates>, trials: u64) -> Self {
        assert!(trials > 0, "at least one trial is required");
        Self {
            simulator,
            rates,
            trials,
            seeding: Seeding::Clock,
        }
    }

    pub fn train<'a>(
        simulator: Simulator,
        results: impl IntoIterator<Item = &'a MatchResult>,
        trials: u64,
    ) -> Self {
        Self::new(simulator, Arc::new(ScoringRates::from_results(results)), trials)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeding = Seeding::Fixed(seed);
        self
    }

    pub fn simulator(&self) -> Simulator {
        self.simulator
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn seeding(&self) -> Seeding {
        self.seeding
    }

    /// Runs every trial of `fixture` from `scenario` and counts the outcomes.
    pub fn tally(&self, fixture: &Fixture, scenario: &Scenario) -> Tally {
        let goal_rates = self.simulator.goal_rates(&self.rates, fixture);
        let mut rand = self.rand();
        let mut tally = Tally::default();
        for _ in 0..self.trials {
            tally.record(sim::simulate(&goal_rates, scenario, &mut rand));
        }
        trace!("{fixture} from {scenario:?} with {goal_rates:?}: {tally:?}");
        tally
    }

    fn rand(&self) -> StdRand {
        let seed = match self.seeding {
            Seeding::Clock => ClockSeed::default().next_u64(),
            Seeding::Fixed(seed) => seed,
        };
        StdRand::seed(seed)
    }
}

impl Predictor for MonteCarloPredictor {
    fn predict(&self, fixture: &Fixture) -> Prediction {
        self.predict_in_progress(fixture, &Scenario::kickoff())
    }

    fn as_in_progress(&self) -> Option<&dyn InProgressPredictor> {
        Some(self)
    }
}

impl InProgressPredictor for MonteCarloPredictor {
    fn predict_in_progress(&self, fixture: &Fixture, scenario: &Scenario) -> Prediction {
        self.tally(fixture, scenario).verdict()
    }
}
