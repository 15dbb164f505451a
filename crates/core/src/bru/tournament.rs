//! Tournament Branch Predictor.
//!
//! A hybrid predictor that employs a meta-predictor (Choice PHT) to select
//! between a Global predictor and a Local (per-address history) predictor.
//! This allows the predictor to adapt to different types of branch behaviors.
//!
//! All three global-side tables are indexed directly by the global history
//! register; the PC only selects a local history register.

use super::{BranchPredictor, history::HistoryRegister, pht::CounterTable};
use crate::common::Outcome;
use crate::common::error::ConfigError;
use crate::config::{PredictorConfig, PredictorKind};

/// Tournament Predictor structure.
#[derive(Clone, Debug)]
pub struct TournamentPredictor {
    /// Global History Register, shared by the global and choice tables.
    ghr: HistoryRegister,

    /// Global Pattern History Table (2-bit counters), indexed by the GHR.
    global_pht: CounterTable,

    /// Local History Table storing one history register per PC bucket.
    local_history_table: Box<[HistoryRegister]>,
    /// Mask selecting a Local History Table entry from the PC.
    pc_mask: usize,

    /// Local Pattern History Table indexed by local history patterns.
    local_pht: CounterTable,

    /// Choice Prediction Table (2-bit counters), indexed by the GHR.
    /// Selects between Global (0,1) and Local (2,3) predictors.
    choice_pht: CounterTable,
}

impl TournamentPredictor {
    /// Creates a new Tournament Predictor based on the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TableTooLarge`] when any of the three widths is too wide.
    pub fn new(config: &PredictorConfig) -> Result<Self, ConfigError> {
        config.validate_for(PredictorKind::Tournament)?;
        let local_hist_size = 1usize << config.pc_index_bits;

        Ok(Self {
            ghr: HistoryRegister::new(config.ghistory_bits),
            global_pht: CounterTable::new(config.ghistory_bits),

            local_history_table: vec![HistoryRegister::new(config.lhistory_bits); local_hist_size]
                .into_boxed_slice(),
            pc_mask: local_hist_size - 1,

            local_pht: CounterTable::new(config.lhistory_bits),

            choice_pht: CounterTable::new(config.ghistory_bits),
        })
    }

    #[inline]
    const fn ghistory(&self) -> usize {
        self.ghr.value() as usize
    }

    #[inline]
    const fn local_slot(&self, pc: u32) -> usize {
        pc as usize & self.pc_mask
    }

    /// Retrieves the prediction from the Global component.
    pub fn global_prediction(&self) -> Outcome {
        self.global_pht.predict(self.ghistory())
    }

    /// Retrieves the prediction from the Local component.
    pub fn local_prediction(&self, pc: u32) -> Outcome {
        let pattern = self.local_history_table[self.local_slot(pc)].value();
        self.local_pht.predict(pattern as usize)
    }

    /// Returns the global history register.
    pub const fn history(&self) -> &HistoryRegister {
        &self.ghr
    }

    /// Returns the local history register selected by `pc`.
    pub fn local_history(&self, pc: u32) -> &HistoryRegister {
        &self.local_history_table[self.local_slot(pc)]
    }

    /// Returns the global pattern history table.
    pub const fn global_table(&self) -> &CounterTable {
        &self.global_pht
    }

    /// Returns the local pattern history table.
    pub const fn local_table(&self) -> &CounterTable {
        &self.local_pht
    }

    /// Returns the choice table.
    pub const fn choice_table(&self) -> &CounterTable {
        &self.choice_pht
    }
}

impl BranchPredictor for TournamentPredictor {
    fn name(&self) -> &'static str {
        "Tournament"
    }

    /// Uses the Choice PHT entry for the current global history to pick the
    /// Global (counter < 2) or Local (counter >= 2) prediction.
    fn predict(&self, pc: u32) -> Outcome {
        if self.choice_pht.get(self.ghistory()).is_taken() {
            self.local_prediction(pc)
        } else {
            self.global_prediction()
        }
    }

    /// Updates the predictor with the actual branch outcome.
    ///
    /// Both component predictions are captured before any table changes. The
    /// global and local tables are trained, the local history advances, the
    /// Choice PHT moves towards whichever component alone was right, and the
    /// global history advances last.
    fn train(&mut self, pc: u32, outcome: bool) {
        let ghistory = self.ghistory();
        let global_correct = self.global_prediction() == outcome;
        let local_correct = self.local_prediction(pc) == outcome;

        self.global_pht.update(ghistory, outcome);

        let slot = self.local_slot(pc);
        let local_history = &mut self.local_history_table[slot];
        self.local_pht.update(local_history.value() as usize, outcome);
        local_history.push(outcome);

        let choice = self.choice_pht.get_mut(ghistory);
        match (global_correct, local_correct) {
            (true, false) => choice.decrement(),
            (false, true) => choice.increment(),
            _ => {}
        }

        self.ghr.push(outcome);
    }
}
