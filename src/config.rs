//! The model catalogue: which strategies to register, under which names.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::MatchResult;
use crate::mc::MonteCarloPredictor;
use crate::predictor::baseline::{AlphabetPredictor, HomePredictor};
use crate::predictor::points::{PointsPredictor, PointsTable};
use crate::registry::{Model, PredictorRegistry};
use crate::scoring::ScoringRates;
use crate::sim::Simulator;

pub const FAST_TRIALS: u64 = 1_000;
pub const FULL_TRIALS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    Home,
    Alphabet,
    Points,
    Simulation { simulator: Simulator, trials: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    pub strategy: Strategy,
}
impl ModelConfig {
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    pub fn simulation(name: impl Into<String>, simulator: Simulator, trials: u64) -> Self {
        Self::new(name, Strategy::Simulation { simulator, trials })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if let Strategy::Simulation { trials: 0, .. } = self.strategy {
            return Err(ConfigError::NoTrials(self.name.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no models configured")]
    NoModels,

    #[error("model name must not be blank")]
    EmptyName,

    #[error("model '{0}' must run at least one trial")]
    NoTrials(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelsConfig {
    pub models: Vec<ModelConfig>,

    /// Fixes the seeds of the simulators, for reproducible runs. See [ModelsConfig::model_seed].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}
impl ModelsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.models.is_empty() {
            return Err(ConfigError::NoModels);
        }
        for model in &self.models {
            model.validate()?;
        }
        Ok(())
    }

    /// Seed of the model at `index`, offset from the configured seed so that no two models
    /// replay the same draws.
    pub fn model_seed(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index as u64))
    }

    /// Trains every configured strategy on `results` and registers it. The scoring model and
    /// points table are each built at most once and shared by the strategies that need them.
    pub fn assemble(&self, results: &[MatchResult]) -> Result<PredictorRegistry, ConfigError> {
        self.validate()?;
        let mut rates: Option<Arc<ScoringRates>> = None;
        let mut table: Option<PointsTable> = None;
        let mut models = Vec::with_capacity(self.models.len());
        for (index, config) in self.models.iter().enumerate() {
            let model = match &config.strategy {
                Strategy::Home => Model::new(&config.name, HomePredictor),
                Strategy::Alphabet => Model::new(&config.name, AlphabetPredictor),
                Strategy::Points => {
                    let table = table.get_or_insert_with(|| PointsTable::from_results(results));
                    Model::new(&config.name, PointsPredictor::new(table.clone()))
                }
                Strategy::Simulation { simulator, trials } => {
                    let rates = rates
                        .get_or_insert_with(|| Arc::new(ScoringRates::from_results(results)))
                        .clone();
                    let predictor = MonteCarloPredictor::new(*simulator, rates, *trials);
                    let predictor = match self.model_seed(index) {
                        Some(seed) => predictor.with_seed(seed),
                        None => predictor,
                    };
                    Model::new(&config.name, predictor)
                }
            };
            models.push(model);
        }
        debug!("assembled {} models from {} results", models.len(), results.len());
        Ok(PredictorRegistry::new(models))
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            models: vec![
                ModelConfig::new("Home", Strategy::Home),
                ModelConfig::new("Points", Strategy::Points),
                ModelConfig::simulation("Offense simulator (fast)", Simulator::Offense, FAST_TRIALS),
                ModelConfig::simulation("Offense simulator", Simulator::Offense, FULL_TRIALS),
                ModelConfig::simulation("Full simulator (fast)", Simulator::OffenseAndDefense, FAST_TRIALS),
                ModelConfig::simulation("Full simulator", Simulator::OffenseAndDefense, FULL_TRIALS),
                ModelConfig::new("Alphabet", Strategy::Alphabet),
            ],
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests;
