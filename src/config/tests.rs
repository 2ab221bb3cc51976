use std::path::PathBuf;

use super::*;
use crate::domain::{Outcome, Scenario};
use crate::file::ReadJsonFile;
use crate::forecast::Forecaster;
use crate::testing::{fixture, lopsided_results};

fn shipped_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/models.json")
}

#[test]
fn shipped_config_matches_default() {
    let config = ModelsConfig::read_json_file(shipped_config_path()).unwrap();
    assert_eq!(ModelsConfig::default(), config);
}

#[test]
fn default_is_valid() {
    assert_eq!(Ok(()), ModelsConfig::default().validate());
}

#[test]
fn rejects_empty_catalogue() {
    let config = ModelsConfig {
        models: vec![],
        seed: None,
    };
    assert_eq!(Err(ConfigError::NoModels), config.validate());
    assert_eq!(
        ConfigError::NoModels,
        config.assemble(&lopsided_results()).unwrap_err()
    );
}

#[test]
fn rejects_blank_name() {
    let config = ModelsConfig {
        models: vec![ModelConfig::new("  ", Strategy::Home)],
        seed: None,
    };
    assert_eq!(Err(ConfigError::EmptyName), config.validate());
}

#[test]
fn rejects_zero_trials() {
    let config = ModelsConfig {
        models: vec![ModelConfig::simulation("Idle", Simulator::Offense, 0)],
        seed: None,
    };
    let err = config.validate().unwrap_err();
    assert_eq!(ConfigError::NoTrials("Idle".into()), err);
    assert_eq!("model 'Idle' must run at least one trial", err.to_string());
}

#[test]
fn strategy_json_form() {
    let strategy: Strategy = serde_json::from_str(
        r#"{"kind": "simulation", "simulator": "offense_and_defense", "trials": 50}"#,
    )
    .unwrap();
    assert_eq!(
        Strategy::Simulation {
            simulator: Simulator::OffenseAndDefense,
            trials: 50
        },
        strategy
    );
    assert_eq!(
        r#"{"kind":"points"}"#,
        serde_json::to_string(&Strategy::Points).unwrap()
    );
}

#[test]
fn assemble_default_catalogue() {
    let registry = ModelsConfig::default().assemble(&lopsided_results()).unwrap();
    let listing: Vec<_> = registry
        .list()
        .into_iter()
        .map(|info| (info.name, info.predicts_in_progress))
        .collect();
    assert_eq!(
        vec![
            ("Home".to_string(), false),
            ("Points".to_string(), false),
            ("Offense simulator (fast)".to_string(), true),
            ("Offense simulator".to_string(), true),
            ("Full simulator (fast)".to_string(), true),
            ("Full simulator".to_string(), true),
            ("Alphabet".to_string(), false),
        ],
        listing
    );
}

#[test]
fn seeded_catalogue_is_reproducible() {
    let config = ModelsConfig {
        seed: Some(11),
        ..ModelsConfig::default()
    };
    let results = lopsided_results();
    let first = Forecaster::new(config.assemble(&results).unwrap());
    let second = Forecaster::new(config.assemble(&results).unwrap());
    let fixture = fixture("Team B", "Newcomers");
    for model in first.registry().list() {
        assert_eq!(
            first.forecast_in_progress(&fixture, &Scenario::new(20, 0, 0), &model.name),
            second.forecast_in_progress(&fixture, &Scenario::new(20, 0, 0), &model.name)
        );
    }
}

#[test]
fn model_seeds_are_distinct_per_model() {
    let config = ModelsConfig {
        seed: Some(u64::MAX - 1),
        ..ModelsConfig::default()
    };
    let seeds: Vec<_> = (0..config.models.len())
        .map(|index| config.model_seed(index).unwrap())
        .collect();
    let mut distinct = seeds.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(seeds.len(), distinct.len());
    assert_eq!(Some(u64::MAX - 1), config.model_seed(0));
    assert_eq!(Some(0), config.model_seed(2));

    assert_eq!(None, ModelsConfig::default().model_seed(3));
}

#[test]
fn end_to_end_full_simulator() {
    let forecaster = Forecaster::new(ModelsConfig::default().assemble(&lopsided_results()).unwrap());
    let forecast = forecaster
        .forecast(&fixture("Team A", "Team B"), "Full simulator")
        .unwrap();
    assert_eq!(Outcome::Home, forecast.outcome);
    assert!(forecast.confidence.unwrap() > 0.9, "{forecast:?}");
}
