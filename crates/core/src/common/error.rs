//! Error definitions.
//!
//! Prediction and training never fail: indices are masked and counters are
//! clamped. Errors only arise while building a predictor from configuration or
//! while reading a branch trace. This module provides:
//! 1. **Configuration Errors:** Table widths that would yield unusable tables.
//! 2. **Trace Errors:** I/O failures and malformed trace lines.
//! 3. **Top-level Error:** A single type for front ends that do both.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating or loading a [`PredictorConfig`](crate::PredictorConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A table width would produce a table with no valid positive size.
    #[error("{field} = {bits} exceeds the maximum table width of {max} bits")]
    TableTooLarge {
        /// Name of the offending configuration field.
        field: &'static str,
        /// Requested width in bits.
        bits: u32,
        /// Largest accepted width in bits.
        max: u32,
    },

    /// The perceptron predictor was selected without a weight width.
    #[error("weight_bits is required for the Perceptron predictor")]
    MissingWeightBits,

    /// The perceptron weight width is outside `1..=31`.
    #[error("weight_bits = {0} is out of range (expected 1..=31)")]
    InvalidWeightBits(u32),

    /// The configuration document could not be parsed.
    #[error("failed to parse predictor configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration file '{}': {source}", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading branch trace records.
#[derive(Error, Debug)]
pub enum TraceError {
    /// The trace source could not be read.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not contain exactly a PC and an outcome.
    #[error("line {line}: expected '<pc> <outcome>', found '{content}'")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Offending line contents.
        content: String,
    },

    /// The PC field is not a valid 32-bit hexadecimal address.
    #[error("line {line}: invalid branch address: {source}")]
    InvalidPc {
        /// 1-based line number.
        line: usize,
        /// Parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The outcome field is neither `0` nor `1`.
    #[error("line {line}: invalid outcome '{value}' (expected 0 or 1)")]
    InvalidOutcome {
        /// 1-based line number.
        line: usize,
        /// Offending outcome text.
        value: String,
    },
}

/// Top-level error type for the simulator front end.
#[derive(Error, Debug)]
pub enum Error {
    /// Predictor configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Trace loading failed.
    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Type alias for results carrying the top-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
