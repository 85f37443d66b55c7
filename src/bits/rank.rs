//! Append-time rank index.
//!
//! A `RankIndex` shadows a [`BitVec`] that is being appended to: every
//! `push` goes to both, and the index keeps one cumulative popcount
//! sample per started word. `rank1(x)` then costs one sample read plus
//! one masked popcount of the word containing `x` — the same
//! bits-below-position idiom as a sparse bitmap word lookup, with the
//! prefix sums precomputed instead of rescanned.
//!
//! Rank convention: `rank1(x)` counts set bits at positions **strictly
//! before** `x`. The `+1` block offset in the k²-tree addressing formula
//! is calibrated against this convention; the round-trip proofs in
//! `tests/proof_k2.rs` pin the pair down.

use serde::{Deserialize, Serialize};

use super::{BitVec, WORD_BITS};

/// O(1) `rank1` over an append-only bit sequence.
///
/// Owns its own copy of the bit words so it can be serialized and
/// rebuilt independently of the sequence it indexes (the three blobs of
/// a flattened k²-tree are logically independent).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankIndex {
    bits: BitVec,
    /// `samples[w]` = set bits in words `0..w`. One entry per started word.
    samples: Vec<u32>,
    /// Running total of set bits pushed so far.
    total: u32,
}

impl RankIndex {
    /// Empty index.
    pub fn new() -> Self {
        Self {
            bits: BitVec::new(),
            samples: Vec::new(),
            total: 0,
        }
    }

    /// Append one bit, extending the sample array at word boundaries.
    pub fn push(&mut self, bit: bool) {
        if self.bits.len() % WORD_BITS == 0 {
            self.samples.push(self.total);
        }
        self.bits.push(bit);
        if bit {
            self.total += 1;
        }
    }

    /// Number of indexed bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if nothing has been indexed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Set bits at positions strictly before `x`.
    ///
    /// `x` past the end saturates to the total ones count: positions
    /// that were never pushed contribute nothing.
    #[inline]
    pub fn rank1(&self, x: usize) -> usize {
        if x >= self.bits.len() {
            return self.total as usize;
        }
        let word = x / WORD_BITS;
        let shift = x % WORD_BITS;
        let mask = if shift == 0 { 0 } else { (1u64 << shift) - 1 };
        let below = (self.bits.words()[word] & mask).count_ones();
        self.samples[word] as usize + below as usize
    }

    /// Total set bits pushed.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.total as usize
    }
}
