//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that all direction
//! predictors implement. A driver calls [`BranchPredictor::predict`] for a
//! branch, resolves it, then calls [`BranchPredictor::train`] with the real
//! outcome before moving to the next branch.

use crate::common::Outcome;

/// Trait for conditional branch direction predictors.
pub trait BranchPredictor {
    /// Returns the display name of the predictor.
    fn name(&self) -> &'static str;

    /// Predicts the direction of the conditional branch at `pc`.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction
    fn predict(&self, pc: u32) -> Outcome;

    /// Trains the predictor with the resolved outcome of the branch at `pc`.
    ///
    /// Must follow the `predict` call for the same branch occurrence; the
    /// ordering is not checked.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction
    /// * `outcome` - Whether the branch was actually taken
    fn train(&mut self, pc: u32, outcome: bool);
}

impl<P: BranchPredictor + ?Sized> BranchPredictor for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn predict(&self, pc: u32) -> Outcome {
        (**self).predict(pc)
    }

    fn train(&mut self, pc: u32, outcome: bool) {
        (**self).train(pc, outcome);
    }
}
