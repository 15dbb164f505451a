//! Two-bit saturating counter.
//!
//! States 0 and 1 lean not-taken, 2 and 3 lean taken. Increments and
//! decrements stop at the ends of the range instead of wrapping.

use crate::common::Outcome;
use crate::common::constants::{COUNTER_MAX, COUNTER_TAKEN_THRESHOLD};

/// A 2-bit saturating counter in the range `0..=3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SaturatingCounter(u8);

impl SaturatingCounter {
    /// Largest counter value (strongly taken).
    pub const MAX: u8 = COUNTER_MAX;

    /// Creates a counter in the strongly not-taken state.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a counter holding `value`, clamped to `0..=3`.
    pub fn from_value(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Returns the raw counter value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` when the counter leans taken (value >= 2).
    #[inline]
    pub const fn is_taken(self) -> bool {
        self.0 >= COUNTER_TAKEN_THRESHOLD
    }

    /// Returns the predicted direction.
    #[inline]
    pub const fn predict(self) -> Outcome {
        if self.is_taken() {
            Outcome::Taken
        } else {
            Outcome::NotTaken
        }
    }

    /// Moves one step towards taken, saturating at 3.
    #[inline]
    pub fn increment(&mut self) {
        if self.0 < Self::MAX {
            self.0 += 1;
        }
    }

    /// Moves one step towards not-taken, saturating at 0.
    #[inline]
    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Trains the counter towards the resolved outcome.
    #[inline]
    pub fn update(&mut self, taken: bool) {
        if taken {
            self.increment();
        } else {
            self.decrement();
        }
    }
}
