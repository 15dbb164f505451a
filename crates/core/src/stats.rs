//! Prediction statistics collection and reporting.
//!
//! Tracks how many conditional branches were predicted and how many of those
//! predictions were wrong.

use std::fmt;

use crate::common::Outcome;

/// Prediction statistics for one replayed trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PredictionStats {
    /// Number of conditional branches predicted.
    pub branches: u64,
    /// Number of predictions that disagreed with the resolved outcome.
    pub incorrect: u64,
}

impl PredictionStats {
    /// Creates empty statistics.
    pub const fn new() -> Self {
        Self {
            branches: 0,
            incorrect: 0,
        }
    }

    /// Records one prediction against the resolved outcome.
    ///
    /// Returns `true` if the prediction was correct.
    pub fn record(&mut self, predicted: Outcome, actual: bool) -> bool {
        self.branches += 1;
        let hit = predicted == actual;
        if !hit {
            self.incorrect += 1;
        }
        hit
    }

    /// Number of correct predictions.
    pub const fn correct(&self) -> u64 {
        self.branches - self.incorrect
    }

    /// Misprediction rate in percent, `0.0` when nothing was recorded.
    pub fn misprediction_rate(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            100.0 * self.incorrect as f64 / self.branches as f64
        }
    }

    /// Prediction accuracy in percent, `0.0` when nothing was recorded.
    pub fn accuracy(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            100.0 - self.misprediction_rate()
        }
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for PredictionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branches:        {:10}", self.branches)?;
        writeln!(f, "Incorrect:       {:10}", self.incorrect)?;
        write!(f, "Misprediction Rate: {:7.3}", self.misprediction_rate())
    }
}
