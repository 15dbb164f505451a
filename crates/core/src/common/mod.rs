//! Common utilities and types used throughout the branch predictor simulator.
//!
//! This module provides the small building blocks shared by the predictors and
//! the replay driver. It includes:
//! 1. **Outcome:** The taken / not-taken direction type.
//! 2. **Constants:** Table width limits and perceptron training constants.
//! 3. **Error Handling:** Configuration, trace, and top-level error types.

/// Table width limits and perceptron threshold constants.
pub mod constants;

/// Error types for configuration and trace loading.
pub mod error;

/// Branch outcome type.
pub mod outcome;

pub use constants::{MAX_TABLE_BITS, MAX_WEIGHT_BITS};
pub use error::{ConfigError, Error, TraceError};
pub use outcome::Outcome;
