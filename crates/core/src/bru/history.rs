//! Branch history shift register.

use std::fmt;

/// A fixed-width shift register of recent branch outcomes.
///
/// Bit 0 holds the most recent outcome. The value never has bits set at or
/// above `width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRegister {
    value: u32,
    width: u32,
    mask: u32,
}

// Printed most-recent-last: the leftmost character is the oldest tracked bit.
impl fmt::Display for HistoryRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        write!(f, "{:0width$b}", self.value, width = self.width as usize)
    }
}

impl HistoryRegister {
    /// Creates a zeroed register `width` bits wide.
    ///
    /// Widths of 32 and above keep all 32 bits.
    pub const fn new(width: u32) -> Self {
        let mask = if width >= u32::BITS {
            u32::MAX
        } else {
            (1 << width) - 1
        };
        Self {
            value: 0,
            width,
            mask,
        }
    }

    /// Returns the register contents.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns the register width in bits.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns `2^width - 1`.
    #[inline]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Returns history bit `i` (0 is the most recent outcome).
    #[inline]
    pub const fn bit(&self, i: u32) -> bool {
        i < u32::BITS && (self.value >> i) & 1 != 0
    }

    /// Shifts `taken` in as the newest bit, dropping the oldest.
    #[inline]
    pub fn push(&mut self, taken: bool) {
        self.value = ((self.value << 1) | u32::from(taken)) & self.mask;
    }

    /// Clears every bit.
    pub fn clear(&mut self) {
        self.value = 0;
    }
}
