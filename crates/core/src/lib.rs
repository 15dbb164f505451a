//! Trace-driven conditional branch prediction library.
//!
//! This crate implements the prediction core of a branch predictor simulator with the following:
//! 1. **Predictors:** Static (always taken), gshare, tournament and perceptron direction predictors.
//! 2. **Facade:** A configuration-driven [`Predictor`] that dispatches `predict`/`train` to one variant.
//! 3. **Configuration:** Serde-backed [`PredictorConfig`] with defaults and table-size validation.
//! 4. **Driver:** Trace parsing, replay, and misprediction statistics.

/// Common types (branch outcome, errors, constants).
pub mod common;
/// Predictor configuration (defaults, predictor kinds, validation).
pub mod config;
/// Branch prediction unit (counters, history registers, predictors, facade).
pub mod bru;
/// Replay driver feeding trace records through a predictor.
pub mod sim;
/// Misprediction statistics collection and reporting.
pub mod stats;
/// Branch trace records and readers.
pub mod trace;

/// Branch outcome returned by every predictor.
pub use crate::common::Outcome;
/// Errors reported by configuration and trace loading.
pub use crate::common::error::{ConfigError, Error, TraceError};
/// Root configuration type; use `PredictorConfig::default()` or deserialize from JSON.
pub use crate::config::{PredictorConfig, PredictorKind};
/// Predictor interface and the configuration-driven facade.
pub use crate::bru::{BranchPredictor, Predictor};
/// Accumulated prediction statistics.
pub use crate::stats::PredictionStats;
/// A single `(pc, outcome)` trace record.
pub use crate::trace::TraceRecord;
