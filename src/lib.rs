//! Forecasts football match outcomes from historical results.
//!
//! Per-team scoring rates are learned from past results and fed to a minute-by-minute
//! [simulation](sim), which is repeated many times by a [Monte Carlo predictor](mc) to arrive
//! at the most likely outcome of a fixture, either from kickoff or from a match already in
//! progress. Simple baselines sit alongside the simulators in a [registry] of named models,
//! and the [forecast] module answers queries against it.

pub mod config;
pub mod data;
pub mod domain;
pub mod evaluation;
pub mod file;
pub mod forecast;
pub mod mc;
pub mod predictor;
pub mod print;
pub mod registry;
pub mod scoring;
pub mod sim;
pub mod teams;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
