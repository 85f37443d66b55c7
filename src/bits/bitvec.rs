//! Append-only packed bit vector.

use serde::{Deserialize, Serialize};

use super::WORD_BITS;

/// A growable bit sequence packed into `u64` words, LSB-first.
///
/// Bit `i` lives in `words[i / 64]` at shift `i % 64`. Out-of-range reads
/// return `None` rather than panicking; the k²-tree query path treats an
/// out-of-range position the same as an unset bit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
}

impl BitVec {
    /// Empty bit vector.
    pub fn new() -> Self {
        Self { words: Vec::new(), len: 0 }
    }

    /// Empty bit vector with room for `bits` before reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(bits.div_ceil(WORD_BITS)),
            len: 0,
        }
    }

    /// Number of bits stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no bits have been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append one bit.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        let shift = self.len % WORD_BITS;
        if shift == 0 {
            self.words.push(0);
        }
        if bit {
            let last = self.words.len() - 1;
            self.words[last] |= 1u64 << shift;
        }
        self.len += 1;
    }

    /// Bit at position `i`, or `None` past the end.
    #[inline]
    pub fn get(&self, i: usize) -> Option<bool> {
        if i >= self.len {
            return None;
        }
        Some((self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1)
    }

    /// Total number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Backing words. The last word's bits past `len` are zero.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut bv = BitVec::new();
        for bit in iter {
            bv.push(bit);
        }
        bv
    }
}
