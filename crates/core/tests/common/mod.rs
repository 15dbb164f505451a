//! Common test helpers.

use bpsim_core::bru::gshare::GsharePredictor;
use bpsim_core::bru::perceptron::PerceptronPredictor;
use bpsim_core::bru::tournament::TournamentPredictor;
use bpsim_core::{BranchPredictor, PredictorConfig};


/// Builds a gshare predictor with `ghistory_bits` of history.
pub fn gshare(ghistory_bits: u32) -> GsharePredictor {
    GsharePredictor::new(&PredictorConfig::gshare(ghistory_bits)).unwrap()
}

/// Builds a tournament predictor.
pub fn tournament(ghistory_bits: u32, lhistory_bits: u32, pc_index_bits: u32) -> TournamentPredictor {
    TournamentPredictor::new(&PredictorConfig::tournament(
        ghistory_bits,
        lhistory_bits,
        pc_index_bits,
    ))
    .unwrap()
}

/// Builds a perceptron predictor.
pub fn perceptron(ghistory_bits: u32, pc_index_bits: u32, weight_bits: u32) -> PerceptronPredictor {
    PerceptronPredictor::new(&PredictorConfig::perceptron(
        ghistory_bits,
        pc_index_bits,
        weight_bits,
    ))
    .unwrap()
}

/// Trains `bp` with `n` copies of the same branch outcome.
pub fn train_n<P: BranchPredictor + ?Sized>(bp: &mut P, pc: u32, taken: bool, n: usize) {
    for _ in 0..n {
        bp.train(pc, taken);
    }
}
