//! GShare Branch Predictor.
//!
//! GShare correlates global branch history with the program counter using an XOR
//! hash. This allows the predictor to distinguish the same branch instruction
//! in different execution contexts.
//!
//! # Performance
//!
//! - **Time Complexity:** `predict()` and `train()` are O(1)
//! - **Space Complexity:** O(2^N) 2-bit counters, N = `ghistory_bits`
//! - **Best Case:** Correlated branches where outcome depends on recent history
//! - **Worst Case:** Uncorrelated branches aliasing onto the same counters

use super::{BranchPredictor, history::HistoryRegister, pht::CounterTable};
use crate::common::Outcome;
use crate::common::error::ConfigError;
use crate::config::{PredictorConfig, PredictorKind};

/// GShare Predictor structure.
#[derive(Clone, Debug)]
pub struct GsharePredictor {
    /// Global History Register storing recent branch outcomes.
    ghr: HistoryRegister,
    /// Pattern History Table containing 2-bit saturating counters.
    pht: CounterTable,
}

impl GsharePredictor {
    /// Creates a new GShare Predictor sized from `config.ghistory_bits`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TableTooLarge`] when the history width is too wide.
    pub fn new(config: &PredictorConfig) -> Result<Self, ConfigError> {
        config.validate_for(PredictorKind::Gshare)?;
        Ok(Self::with_history_bits(config.ghistory_bits))
    }

    fn with_history_bits(ghistory_bits: u32) -> Self {
        Self {
            ghr: HistoryRegister::new(ghistory_bits),
            pht: CounterTable::new(ghistory_bits),
        }
    }

    /// Calculates the index into the Pattern History Table.
    ///
    /// `(pc ^ ghistory) & mask`, always taken from the current (pre-update) history.
    #[inline]
    pub fn index(&self, pc: u32) -> usize {
        self.pht.index((pc ^ self.ghr.value()) as usize)
    }

    /// Returns the global history register.
    pub const fn history(&self) -> &HistoryRegister {
        &self.ghr
    }

    /// Returns the pattern history table.
    pub const fn table(&self) -> &CounterTable {
        &self.pht
    }
}

impl BranchPredictor for GsharePredictor {
    fn name(&self) -> &'static str {
        "Gshare"
    }

    /// Predicts taken if the 2-bit counter at the hashed index is 2 or 3.
    fn predict(&self, pc: u32) -> Outcome {
        self.pht.predict(self.index(pc))
    }

    /// Updates the counter at the hashed index, then shifts the outcome into
    /// the Global History Register.
    fn train(&mut self, pc: u32, outcome: bool) {
        let idx = self.index(pc);
        self.pht.update(idx, outcome);
        self.ghr.push(outcome);
    }
}
