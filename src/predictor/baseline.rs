//! Trivial strategies that ignore history altogether.

use crate::domain::{Fixture, Outcome};
use crate::predictor::{Prediction, Predictor};

/// Always backs the home side.
#[derive(Debug, Default)]
pub struct HomePredictor;

impl Predictor for HomePredictor {
    fn predict(&self, _: &Fixture) -> Prediction {
        Prediction::new(Outcome::Home)
    }
}

/// Backs whichever side sorts first by name; never predicts a draw.
#[derive(Debug, Default)]
pub struct AlphabetPredictor;

impl Predictor for AlphabetPredictor {
    fn predict(&self, fixture: &Fixture) -> Prediction {
        let outcome = if fixture.home_team.name < fixture.away_team.name {
            Outcome::Home
        } else {
            Outcome::Away
        };
        Prediction::new(outcome)
    }
}
