//! Simulator-wide constants.

/// Largest accepted table index width in bits.
///
/// Table sizes are `1 << bits` entries; past 30 bits the size no longer fits
/// a positive 32-bit table length.
pub const MAX_TABLE_BITS: u32 = 30;

/// Largest accepted perceptron weight width in bits.
///
/// Weights are stored as `i32`, so `2^(bits - 1) - 1` must stay representable.
pub const MAX_WEIGHT_BITS: u32 = 31;

/// Coefficient of the perceptron training threshold (`theta`).
pub const THETA_COEFF: f64 = 1.93;

/// Constant term of the perceptron training threshold (`theta`).
pub const THETA_BIAS: f64 = 14.0;

/// Counter value at and above which a 2-bit counter predicts taken.
pub const COUNTER_TAKEN_THRESHOLD: u8 = 2;

/// Maximum value of a 2-bit saturating counter.
pub const COUNTER_MAX: u8 = 3;
