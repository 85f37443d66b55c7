//! Bit-sequence substrate: packed bit vectors and rank indexing.
//!
//! Everything downstream of the tree builder operates on these two types:
//!
//! - [`BitVec`] — append-only bit sequence packed into `u64` words,
//!   LSB-first within each word.
//! - [`RankIndex`] — per-word cumulative popcount samples built as bits
//!   are appended, answering `rank1(x)` (set bits strictly before `x`)
//!   with one array read and one masked popcount.

pub mod bitvec;
pub mod rank;

pub use bitvec::BitVec;
pub use rank::RankIndex;

/// Bits per packed word.
pub const WORD_BITS: usize = 64;
