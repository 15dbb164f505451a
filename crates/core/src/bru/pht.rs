//! Pattern history table of saturating counters.

use super::counter::SaturatingCounter;
use crate::common::Outcome;

/// A fixed-size table of `2^bits` [`SaturatingCounter`]s.
///
/// Every access masks the key to the table width, so no key can index out
/// of range.
#[derive(Clone, Debug)]
pub struct CounterTable {
    entries: Box<[SaturatingCounter]>,
    mask: usize,
}

impl CounterTable {
    /// Allocates a zeroed table with `2^index_bits` entries.
    pub fn new(index_bits: u32) -> Self {
        let size = 1usize << index_bits;
        Self {
            entries: vec![SaturatingCounter::new(); size].into_boxed_slice(),
            mask: size - 1,
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Tables always hold at least one entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the index mask (`len - 1`).
    #[inline]
    pub const fn mask(&self) -> usize {
        self.mask
    }

    /// Masks an arbitrary key into a valid table index.
    #[inline]
    pub const fn index(&self, key: usize) -> usize {
        key & self.mask
    }

    /// Returns the counter selected by `key`.
    #[inline]
    pub fn get(&self, key: usize) -> SaturatingCounter {
        self.entries[self.index(key)]
    }

    /// Returns a mutable reference to the counter selected by `key`.
    #[inline]
    pub fn get_mut(&mut self, key: usize) -> &mut SaturatingCounter {
        let index = self.index(key);
        &mut self.entries[index]
    }

    /// Returns the prediction of the counter selected by `key`.
    #[inline]
    pub fn predict(&self, key: usize) -> Outcome {
        self.get(key).predict()
    }

    /// Trains the counter selected by `key` towards `taken`.
    #[inline]
    pub fn update(&mut self, key: usize, taken: bool) {
        self.get_mut(key).update(taken);
    }

    /// Returns every counter in index order.
    pub fn counters(&self) -> &[SaturatingCounter] {
        &self.entries
    }
}
