//! The capability interface shared by all forecasting strategies.
//!
//! Every strategy implements [Predictor]. Strategies that can also forecast a match already in
//! progress implement [InProgressPredictor] and advertise it through
//! [Predictor::as_in_progress].

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::domain::{Fixture, Outcome, Scenario};

pub mod baseline;
pub mod points;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub outcome: Outcome,
    pub confidence: Option<f64>,
}
impl Prediction {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            confidence: None,
        }
    }

    pub fn with_confidence(outcome: Outcome, confidence: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&confidence), "invalid confidence {confidence}");
        Self {
            outcome,
            confidence: Some(confidence),
        }
    }
}

pub trait Predictor: Debug + Send + Sync {
    fn predict(&self, fixture: &Fixture) -> Prediction;

    /// The in-progress view of this strategy, if it has one.
    fn as_in_progress(&self) -> Option<&dyn InProgressPredictor> {
        None
    }

    fn supports_in_progress(&self) -> bool {
        self.as_in_progress().is_some()
    }
}

pub trait InProgressPredictor: Predictor {
    fn predict_in_progress(&self, fixture: &Fixture, scenario: &Scenario) -> Prediction;
}
