//! Perceptron Branch Predictor.
//!
//! Uses a single-layer perceptron to predict branch direction. Instead of
//! saturating counters, it keeps a table of weight vectors selected by the PC.
//! The prediction is the sign of the bias plus the dot product of the weights
//! with the global history, where each history bit counts as +1 (taken) or -1
//! (not taken).
//!
//! See "Dynamic Branch Prediction with Perceptrons" (Jiménez and Lin, 2001).

use tracing::trace;

use super::{BranchPredictor, history::HistoryRegister};
use crate::common::Outcome;
use crate::common::constants::{THETA_BIAS, THETA_COEFF};
use crate::common::error::ConfigError;
use crate::config::{PredictorConfig, PredictorKind};

/// Perceptron Predictor structure.
#[derive(Clone, Debug)]
pub struct PerceptronPredictor {
    /// Global History Register.
    ghr: HistoryRegister,
    /// Table of weights (flattened). Each row holds one weight per history
    /// bit followed by the bias weight.
    table: Box<[i32]>,
    /// Length of the history vector.
    history_length: usize,
    /// Mask for selecting a row from the PC.
    table_mask: usize,
    /// Size of a single row in the table (history length + bias).
    row_size: usize,
    /// Training threshold (theta).
    threshold: i64,
    /// Largest weight value.
    weight_max: i32,
    /// Smallest weight value.
    weight_min: i32,
}

impl PerceptronPredictor {
    /// Creates a new Perceptron Predictor based on configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a table width is too wide or
    /// `weight_bits` is missing or out of range.
    pub fn new(config: &PredictorConfig) -> Result<Self, ConfigError> {
        config.validate_for(PredictorKind::Perceptron)?;
        let weight_bits = config.perceptron_weight_bits()?;

        let table_entries = 1usize << config.pc_index_bits;
        let hist_len = config.ghistory_bits as usize;
        let row_size = hist_len + 1;
        let weight_max = (1i32 << (weight_bits - 1)) - 1;

        Ok(Self {
            ghr: HistoryRegister::new(config.ghistory_bits),
            table: vec![0; table_entries * row_size].into_boxed_slice(),
            history_length: hist_len,
            table_mask: table_entries - 1,
            row_size,
            threshold: threshold(config.ghistory_bits),
            weight_max,
            weight_min: -weight_max - 1,
        })
    }

    /// Selects the weight row for `pc`.
    #[inline]
    pub const fn index(&self, pc: u32) -> usize {
        pc as usize & self.table_mask
    }

    /// Returns the weight row for `pc`: history weights, then the bias.
    pub fn weights(&self, pc: u32) -> &[i32] {
        let base = self.index(pc) * self.row_size;
        &self.table[base..base + self.row_size]
    }

    /// Returns every weight in the table.
    pub fn all_weights(&self) -> &[i32] {
        &self.table
    }

    /// Returns the training threshold.
    pub const fn theta(&self) -> i64 {
        self.threshold
    }

    /// Returns the inclusive weight range `(weight_min, weight_max)`.
    pub const fn weight_bounds(&self) -> (i32, i32) {
        (self.weight_min, self.weight_max)
    }

    /// Returns the global history register.
    pub const fn history(&self) -> &HistoryRegister {
        &self.ghr
    }

    /// Computes the perceptron output for `pc` against the current history.
    pub fn output(&self, pc: u32) -> i64 {
        let row = self.weights(pc);
        let (history_weights, bias) = row.split_at(self.history_length);
        history_weights
            .iter()
            .enumerate()
            .fold(i64::from(bias[0]), |y, (i, &w)| {
                if self.ghr.bit(i as u32) {
                    y + i64::from(w)
                } else {
                    y - i64::from(w)
                }
            })
    }

    #[inline]
    fn clamp_weight(&self, w: i32, delta: i32) -> i32 {
        w.saturating_add(delta).clamp(self.weight_min, self.weight_max)
    }
}

/// Training threshold `round(1.93 * history_length + 14)`.
pub fn threshold(history_length: u32) -> i64 {
    THETA_COEFF
        .mul_add(f64::from(history_length), THETA_BIAS)
        .round() as i64
}

impl BranchPredictor for PerceptronPredictor {
    fn name(&self) -> &'static str {
        "Perceptron"
    }

    /// Predicts taken if the perceptron output is non-negative.
    fn predict(&self, pc: u32) -> Outcome {
        Outcome::from(self.output(pc) >= 0)
    }

    /// Trains the weights on a misprediction or when the output magnitude is
    /// within the threshold, then shifts the outcome into the history.
    fn train(&mut self, pc: u32, outcome: bool) {
        let y = self.output(pc);

        if (y >= 0) != outcome || y.abs() <= self.threshold {
            trace!(pc, y, outcome, "perceptron weight update");
            let base = self.index(pc) * self.row_size;
            let bias_idx = base + self.history_length;
            let t = if outcome { 1 } else { -1 };

            self.table[bias_idx] = self.clamp_weight(self.table[bias_idx], t);

            for i in 0..self.history_length {
                let agrees = self.ghr.bit(i as u32) == outcome;
                let w_idx = base + i;
                self.table[w_idx] = self.clamp_weight(self.table[w_idx], if agrees { 1 } else { -1 });
            }
        }

        self.ghr.push(outcome);
    }
}
