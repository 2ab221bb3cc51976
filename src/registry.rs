//! A name-keyed catalogue of interchangeable [Predictor] strategies.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::predictor::{InProgressPredictor, Predictor};

/// A named strategy.
#[derive(Clone, Debug)]
pub struct Model {
    pub name: String,
    pub predictor: Arc<dyn Predictor>,
}
impl Model {
    pub fn new(name: impl Into<String>, predictor: impl Predictor + 'static) -> Self {
        Self {
            name: name.into(),
            predictor: Arc::new(predictor),
        }
    }

    pub fn supports_in_progress(&self) -> bool {
        self.predictor.supports_in_progress()
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            name: self.name.clone(),
            predicts_in_progress: self.supports_in_progress(),
        }
    }
}

/// Capability listing entry, suitable for handing to a transport layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub predicts_in_progress: bool,
}

/// Models in registration order. Re-registering a name replaces the earlier model in its
/// original position.
#[derive(Debug, Default)]
pub struct PredictorRegistry {
    models: Vec<Model>,
    index: FxHashMap<String, usize>,
}
impl PredictorRegistry {
    pub fn new(models: impl IntoIterator<Item = Model>) -> Self {
        let mut registry = Self::default();
        for model in models {
            registry.register(model);
        }
        registry
    }

    /// Registers one more model, replacing any existing model of the same name.
    pub fn with_model(mut self, model: Model) -> Self {
        self.register(model);
        self
    }

    fn register(&mut self, model: Model) {
        match self.index.get(&model.name) {
            Some(&existing) => {
                debug!("replacing model '{}'", model.name);
                self.models[existing] = model;
            }
            None => {
                debug!(
                    "registering model '{}' (in-progress: {})",
                    model.name,
                    model.supports_in_progress()
                );
                self.index.insert(model.name.clone(), self.models.len());
                self.models.push(model);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Model> {
        self.index.get(name).map(|&index| &self.models[index])
    }

    pub fn predictor(&self, name: &str) -> Option<&dyn Predictor> {
        self.get(name).map(|model| model.predictor.as_ref())
    }

    pub fn in_progress_predictor(&self, name: &str) -> Option<&dyn InProgressPredictor> {
        self.predictor(name)
            .and_then(|predictor| predictor.as_in_progress())
    }

    /// Whether the named model exists and supports in-progress forecasting.
    pub fn supports_in_progress(&self, name: &str) -> bool {
        self.get(name)
            .map(Model::supports_in_progress)
            .unwrap_or(false)
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn list(&self) -> Vec<ModelInfo> {
        self.models.iter().map(Model::info).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<Model> for PredictorRegistry {
    fn from_iter<T: IntoIterator<Item = Model>>(models: T) -> Self {
        Self::new(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Outcome;
    use crate::mc::MonteCarloPredictor;
    use crate::predictor::baseline::{AlphabetPredictor, HomePredictor};
    use crate::sim::Simulator;
    use crate::testing::{fixture, lopsided_results};

    fn registry() -> PredictorRegistry {
        PredictorRegistry::new([
            Model::new("Home", HomePredictor),
            Model::new(
                "Full simulator",
                MonteCarloPredictor::train(Simulator::OffenseAndDefense, &lopsided_results(), 100),
            ),
            Model::new("Alphabet", AlphabetPredictor),
        ])
    }

    #[test]
    fn lookup_by_exact_name() {
        let registry = registry();
        assert_eq!(3, registry.len());
        assert!(!registry.is_empty());
        assert_eq!("Home", registry.get("Home").unwrap().name);
        assert!(registry.get("home").is_none());
        assert!(registry.predictor("does-not-exist").is_none());
    }

    #[test]
    fn in_progress_capability() {
        let registry = registry();
        assert!(registry.supports_in_progress("Full simulator"));
        assert!(!registry.supports_in_progress("Home"));
        assert!(!registry.supports_in_progress("does-not-exist"));
        assert!(registry.in_progress_predictor("Full simulator").is_some());
        assert!(registry.in_progress_predictor("Alphabet").is_none());
    }

    #[test]
    fn list_in_registration_order() {
        assert_eq!(
            vec![
                ModelInfo {
                    name: "Home".into(),
                    predicts_in_progress: false
                },
                ModelInfo {
                    name: "Full simulator".into(),
                    predicts_in_progress: true
                },
                ModelInfo {
                    name: "Alphabet".into(),
                    predicts_in_progress: false
                },
            ],
            registry().list()
        );
    }

    #[test]
    fn last_registration_wins() {
        let registry = PredictorRegistry::new([
            Model::new("Pick", HomePredictor),
            Model::new("Other", HomePredictor),
            Model::new("Pick", AlphabetPredictor),
        ]);
        let listing = registry.list();
        assert_eq!(2, listing.len());
        assert_eq!(1, listing.iter().filter(|info| info.name == "Pick").count());
        assert_eq!("Pick", listing[0].name);

        // Alphabet backs the away side here, whereas Home never would
        let prediction = registry.predictor("Pick").unwrap().predict(&fixture("Zulu", "Alpha"));
        assert_eq!(Outcome::Away, prediction.outcome);
    }

    #[test]
    fn with_model_appends_or_replaces() {
        let registry = registry()
            .with_model(Model::new("Extra", HomePredictor))
            .with_model(Model::new("Home", AlphabetPredictor));
        let names: Vec<_> = registry.list().into_iter().map(|info| info.name).collect();
        assert_eq!(vec!["Home", "Full simulator", "Alphabet", "Extra"], names);
        let prediction = registry.predictor("Home").unwrap().predict(&fixture("Zulu", "Alpha"));
        assert_eq!(Outcome::Away, prediction.outcome);
    }

    #[test]
    fn collect_models() {
        let registry: PredictorRegistry = [Model::new("Home", HomePredictor)].into_iter().collect();
        assert_eq!(1, registry.len());
    }
}
