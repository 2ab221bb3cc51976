//! Validation and dispatch of forecast requests to a named strategy.
//!
//! Invalid fixtures, unknown models and models lacking the in-progress capability all collapse to
//! [None]; callers needing to tell these apart must check before calling.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Fixture, Outcome, Scenario};
use crate::predictor::Prediction;
use crate::registry::PredictorRegistry;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub fixture: Fixture,
    pub model_name: String,
    pub outcome: Outcome,
    pub confidence: Option<f64>,
}
impl Forecast {
    fn new(fixture: &Fixture, model_name: &str, prediction: Prediction) -> Self {
        Self {
            fixture: fixture.clone(),
            model_name: model_name.into(),
            outcome: prediction.outcome,
            confidence: prediction.confidence,
        }
    }
}

#[derive(Debug)]
pub struct Forecaster {
    registry: PredictorRegistry,
}
impl Forecaster {
    pub fn new(registry: PredictorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PredictorRegistry {
        &self.registry
    }

    pub fn forecast(&self, fixture: &Fixture, model_name: &str) -> Option<Forecast> {
        if !fixture.is_valid() {
            debug!("rejecting invalid fixture {fixture}");
            return None;
        }
        let Some(predictor) = self.registry.predictor(model_name) else {
            debug!("no model named '{model_name}'");
            return None;
        };
        let prediction = predictor.predict(fixture);
        Some(Forecast::new(fixture, model_name, prediction))
    }

    pub fn forecast_in_progress(
        &self,
        fixture: &Fixture,
        scenario: &Scenario,
        model_name: &str,
    ) -> Option<Forecast> {
        if !fixture.is_valid() {
            debug!("rejecting invalid fixture {fixture}");
            return None;
        }
        let Some(predictor) = self.registry.in_progress_predictor(model_name) else {
            debug!("no in-progress model named '{model_name}'");
            return None;
        };
        let prediction = predictor.predict_in_progress(fixture, scenario);
        Some(Forecast::new(fixture, model_name, prediction))
    }
}

impl From<PredictorRegistry> for Forecaster {
    fn from(registry: PredictorRegistry) -> Self {
        Self::new(registry)
    }
}
