//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the direction predictors (static, gshare, tournament
//! and perceptron), the building blocks they share (saturating counters,
//! counter tables, history registers), and the [`Predictor`] facade that
//! selects one of them from configuration.

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait.
pub mod branch_predictor;

/// Two-bit saturating counter.
pub mod counter;

/// Global history branch predictor (gshare algorithm).
pub mod gshare;

/// Fixed-width branch history shift register.
pub mod history;

/// Perceptron-based branch predictor.
pub mod perceptron;

/// Pattern history table of saturating counters.
pub mod pht;

/// Static branch predictor (always taken).
pub mod static_bp;

/// Tournament branch predictor (combines local and global predictors).
pub mod tournament;

use tracing::debug;

use self::{
    gshare::GsharePredictor, perceptron::PerceptronPredictor, static_bp::StaticPredictor,
    tournament::TournamentPredictor,
};
use crate::common::Outcome;
use crate::common::error::ConfigError;
use crate::config::{PredictorConfig, PredictorKind};

/// Enum wrapper for static dispatch of Branch Predictors.
///
/// Holds exactly one predictor, chosen when it is configured.
#[derive(Clone, Debug)]
pub enum Predictor {
    /// Always-taken baseline.
    Static(StaticPredictor),
    /// Gshare predictor.
    Gshare(GsharePredictor),
    /// Tournament predictor.
    Tournament(TournamentPredictor),
    /// Perceptron predictor.
    Perceptron(PerceptronPredictor),
}

impl Predictor {
    /// Creates the predictor selected by `config.predictor`.
    ///
    /// Only the selected predictor's tables are allocated, all zeroed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the widths used by the selected
    /// predictor would not produce valid tables.
    pub fn configure(config: &PredictorConfig) -> Result<Self, ConfigError> {
        let predictor = match config.predictor {
            PredictorKind::Static => Self::Static(StaticPredictor::new()),
            PredictorKind::Gshare => Self::Gshare(GsharePredictor::new(config)?),
            PredictorKind::Tournament => Self::Tournament(TournamentPredictor::new(config)?),
            PredictorKind::Perceptron => Self::Perceptron(PerceptronPredictor::new(config)?),
        };

        debug!(
            predictor = predictor.name(),
            ghistory_bits = config.ghistory_bits,
            lhistory_bits = config.lhistory_bits,
            pc_index_bits = config.pc_index_bits,
            weight_bits = ?config.weight_bits,
            "configured branch predictor"
        );
        Ok(predictor)
    }

    /// Returns the kind of the active predictor.
    pub const fn kind(&self) -> PredictorKind {
        match self {
            Self::Static(_) => PredictorKind::Static,
            Self::Gshare(_) => PredictorKind::Gshare,
            Self::Tournament(_) => PredictorKind::Tournament,
            Self::Perceptron(_) => PredictorKind::Perceptron,
        }
    }

    /// Moves the predictor behind a trait object.
    pub fn boxed(self) -> Box<dyn BranchPredictor> {
        Box::new(self)
    }
}

impl BranchPredictor for Predictor {
    fn name(&self) -> &'static str {
        match self {
            Self::Static(bp) => bp.name(),
            Self::Gshare(bp) => bp.name(),
            Self::Tournament(bp) => bp.name(),
            Self::Perceptron(bp) => bp.name(),
        }
    }

    #[inline]
    fn predict(&self, pc: u32) -> Outcome {
        match self {
            Self::Static(bp) => bp.predict(pc),
            Self::Gshare(bp) => bp.predict(pc),
            Self::Tournament(bp) => bp.predict(pc),
            Self::Perceptron(bp) => bp.predict(pc),
        }
    }

    #[inline]
    fn train(&mut self, pc: u32, outcome: bool) {
        match self {
            Self::Static(bp) => bp.train(pc, outcome),
            Self::Gshare(bp) => bp.train(pc, outcome),
            Self::Tournament(bp) => bp.train(pc, outcome),
            Self::Perceptron(bp) => bp.train(pc, outcome),
        }
    }
}
