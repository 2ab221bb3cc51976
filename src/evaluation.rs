//! Accuracy of predictors against held-out results.

use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::MatchResult;
use crate::predictor::Predictor;
use crate::registry::PredictorRegistry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("no validation data")]
    NoValidationData,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accuracy {
    /// Fraction of results whose outcome was predicted correctly.
    pub accuracy: f64,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct Evaluator<'a> {
    predictor: &'a dyn Predictor,
}
impl<'a> Evaluator<'a> {
    pub fn new(predictor: &'a dyn Predictor) -> Self {
        Self { predictor }
    }

    pub fn measure_accuracy(&self, validation: &[MatchResult]) -> Result<Accuracy, EvaluationError> {
        if validation.is_empty() {
            return Err(EvaluationError::NoValidationData);
        }
        let start_time = Instant::now();
        let correct = validation
            .iter()
            .filter(|result| self.predictor.predict(&result.fixture).outcome == result.outcome)
            .count();
        let elapsed = start_time.elapsed();
        Ok(Accuracy {
            accuracy: correct as f64 / validation.len() as f64,
            elapsed,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictionReport {
    pub label: String,
    pub accuracy: f64,
    pub elapsed: Duration,
}

/// Evaluates every registered model against a common validation set.
#[derive(Debug)]
pub struct Reporter<'a> {
    pub title: String,
    pub validation: &'a [MatchResult],
    pub registry: &'a PredictorRegistry,
}
impl<'a> Reporter<'a> {
    pub fn new(
        title: impl Into<String>,
        validation: &'a [MatchResult],
        registry: &'a PredictorRegistry,
    ) -> Self {
        Self {
            title: title.into(),
            validation,
            registry,
        }
    }

    pub fn run(&self) -> Result<Vec<PredictionReport>, EvaluationError> {
        info!(
            "{}: evaluating {} models on {} results",
            self.title,
            self.registry.len(),
            self.validation.len()
        );
        self.registry
            .models()
            .iter()
            .map(|model| {
                let accuracy = Evaluator::new(model.predictor.as_ref()).measure_accuracy(self.validation)?;
                debug!("{}: {accuracy:?}", model.name);
                Ok(PredictionReport {
                    label: model.name.clone(),
                    accuracy: accuracy.accuracy,
                    elapsed: accuracy.elapsed,
                })
            })
            .collect()
    }
}
