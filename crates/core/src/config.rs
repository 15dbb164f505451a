//! Configuration system for the branch predictor.
//!
//! This module defines the options used to build a predictor. It provides:
//! 1. **Defaults:** Baseline table widths for each predictor.
//! 2. **Kinds:** The predictor variant to instantiate.
//! 3. **Validation:** Rejection of widths that would produce unusable tables.
//!
//! Configuration is supplied as JSON (`PredictorConfig::from_json` / `from_file`)
//! or built directly with the per-variant constructors.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{MAX_TABLE_BITS, MAX_WEIGHT_BITS};
use crate::common::error::ConfigError;

/// Default configuration constants for the predictor.
///
/// These values apply when a field is not present in the configuration document.
mod defaults {
    /// Default global history width (16K-entry global tables).
    pub const GHISTORY_BITS: u32 = 14;

    /// Default local history width (1K-entry local counter table).
    pub const LHISTORY_BITS: u32 = 10;

    /// Default PC index width (1K local history registers / weight vectors).
    pub const PC_INDEX_BITS: u32 = 10;
}

/// Branch prediction algorithm types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PredictorKind {
    /// Static predictor (always predict taken).
    #[default]
    Static,
    /// Global history XOR PC indexed counter table.
    #[serde(alias = "GShare")]
    Gshare,
    /// Global and local predictors arbitrated by a choice table.
    Tournament,
    /// Perceptron predictor over global history.
    #[serde(alias = "Custom")]
    Perceptron,
}

impl PredictorKind {
    /// Returns the display name of the predictor.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::Gshare => "Gshare",
            Self::Tournament => "Tournament",
            Self::Perceptron => "Perceptron",
        }
    }
}

/// Predictor configuration.
///
/// Only the fields used by the selected [`PredictorKind`] are validated or
/// allocated; the rest are ignored.
///
/// # Examples
///
/// ```
/// use bpsim_core::config::{PredictorConfig, PredictorKind};
///
/// let config = PredictorConfig::from_json(r#"{
///     "predictor": "Tournament",
///     "ghistory_bits": 9,
///     "lhistory_bits": 10,
///     "pc_index_bits": 10
/// }"#).unwrap();
/// assert_eq!(config.predictor, PredictorKind::Tournament);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictorConfig {
    /// Predictor variant
    #[serde(default)]
    pub predictor: PredictorKind,

    /// Global history register width
    #[serde(default = "PredictorConfig::default_ghistory_bits")]
    pub ghistory_bits: u32,

    /// Local history register width (tournament)
    #[serde(default = "PredictorConfig::default_lhistory_bits")]
    pub lhistory_bits: u32,

    /// Number of PC bits selecting a local history register or weight vector
    #[serde(default = "PredictorConfig::default_pc_index_bits")]
    pub pc_index_bits: u32,

    /// Perceptron weight width in bits (perceptron only)
    #[serde(default)]
    pub weight_bits: Option<u32>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            predictor: PredictorKind::default(),
            ghistory_bits: defaults::GHISTORY_BITS,
            lhistory_bits: defaults::LHISTORY_BITS,
            pc_index_bits: defaults::PC_INDEX_BITS,
            weight_bits: None,
        }
    }
}

impl PredictorConfig {
    /// Returns the default global history width.
    fn default_ghistory_bits() -> u32 {
        defaults::GHISTORY_BITS
    }

    /// Returns the default local history width.
    fn default_lhistory_bits() -> u32 {
        defaults::LHISTORY_BITS
    }

    /// Returns the default PC index width.
    fn default_pc_index_bits() -> u32 {
        defaults::PC_INDEX_BITS
    }

    /// Configuration for the always-taken baseline.
    pub fn static_taken() -> Self {
        Self::default()
    }

    /// Configuration for a gshare predictor with `ghistory_bits` of history.
    pub fn gshare(ghistory_bits: u32) -> Self {
        Self {
            predictor: PredictorKind::Gshare,
            ghistory_bits,
            ..Self::default()
        }
    }

    /// Configuration for a tournament predictor.
    pub fn tournament(ghistory_bits: u32, lhistory_bits: u32, pc_index_bits: u32) -> Self {
        Self {
            predictor: PredictorKind::Tournament,
            ghistory_bits,
            lhistory_bits,
            pc_index_bits,
            weight_bits: None,
        }
    }

    /// Configuration for a perceptron predictor.
    pub fn perceptron(ghistory_bits: u32, pc_index_bits: u32, weight_bits: u32) -> Self {
        Self {
            predictor: PredictorKind::Perceptron,
            ghistory_bits,
            pc_index_bits,
            weight_bits: Some(weight_bits),
            ..Self::default()
        }
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`PredictorConfig::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks that every table the selected predictor allocates has a valid size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TableTooLarge`] for an index width above
    /// [`MAX_TABLE_BITS`], and [`ConfigError::MissingWeightBits`] or
    /// [`ConfigError::InvalidWeightBits`] for a perceptron without a usable
    /// weight width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_for(self.predictor)
    }

    /// Validates the fields `kind` would allocate, regardless of `self.predictor`.
    ///
    /// # Errors
    ///
    /// Same as [`PredictorConfig::validate`].
    pub fn validate_for(&self, kind: PredictorKind) -> Result<(), ConfigError> {
        match kind {
            PredictorKind::Static => Ok(()),
            PredictorKind::Gshare => check_table_bits("ghistory_bits", self.ghistory_bits),
            PredictorKind::Tournament => {
                check_table_bits("ghistory_bits", self.ghistory_bits)?;
                check_table_bits("lhistory_bits", self.lhistory_bits)?;
                check_table_bits("pc_index_bits", self.pc_index_bits)
            }
            PredictorKind::Perceptron => {
                check_table_bits("ghistory_bits", self.ghistory_bits)?;
                check_table_bits("pc_index_bits", self.pc_index_bits)?;
                self.perceptron_weight_bits().map(|_| ())
            }
        }
    }

    /// Returns the validated perceptron weight width.
    pub(crate) fn perceptron_weight_bits(&self) -> Result<u32, ConfigError> {
        match self.weight_bits {
            None => Err(ConfigError::MissingWeightBits),
            Some(bits) if (1..=MAX_WEIGHT_BITS).contains(&bits) => Ok(bits),
            Some(bits) => Err(ConfigError::InvalidWeightBits(bits)),
        }
    }
}

/// Rejects table widths whose `1 << bits` size is not a positive table length.
fn check_table_bits(field: &'static str, bits: u32) -> Result<(), ConfigError> {
    if bits > MAX_TABLE_BITS {
        return Err(ConfigError::TableTooLarge {
            field,
            bits,
            max: MAX_TABLE_BITS,
        });
    }
    Ok(())
}
