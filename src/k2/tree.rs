//! The flattened k²-tree and its succinct query engine.
//!
//! Positions form one combined address space: `0..internal.len()` read
//! from the internal bits, everything past that from the leaf bits. The
//! children of the node at position `x` occupy the block starting at
//! `(rank1(x) + 1) * 4` — the `+1` accounts for the root's four
//! children holding the first block even though the root itself is
//! never stored.

use serde::{Deserialize, Serialize};

use crate::bits::{BitVec, RankIndex};
use crate::graph::AdjacencyList;
use super::path::{Quadrant, QuadrantPath};
use super::{K2Error, CHILDREN};

/// Succinct k²-tree over a graph's adjacency matrix.
///
/// Immutable once built: queries are side-effect-free, so one instance
/// may be shared across threads without locking. The three fields are
/// logically independent blobs for persistence purposes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct K2Tree {
    internal: BitVec,
    leaves: BitVec,
    rank: RankIndex,
    /// Padded matrix dimension (power of two, or 0 for the empty graph).
    size: usize,
}

impl K2Tree {
    /// Build from an adjacency list. See [`crate::k2::builder`].
    pub fn build(graph: &AdjacencyList) -> Result<Self, K2Error> {
        super::builder::build(graph)
    }

    /// Structure with no materialized nodes (empty graph, or no edges).
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            internal: BitVec::new(),
            leaves: BitVec::new(),
            rank: RankIndex::new(),
            size,
        }
    }

    pub(crate) fn from_parts(
        internal: BitVec,
        leaves: BitVec,
        rank: RankIndex,
        size: usize,
    ) -> Self {
        debug_assert_eq!(internal.len(), rank.len());
        Self { internal, leaves, rank, size }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// The `c`-th child bit of the node at position `x`.
    ///
    /// Fails with [`K2Error::NotSet`] when the bit at `x` is unset or
    /// out of range — children of an absent node are meaningless and
    /// rejected rather than silently answered.
    pub fn get_child(&self, x: usize, c: Quadrant) -> Result<bool, K2Error> {
        if !self.bit(x).unwrap_or(false) {
            return Err(K2Error::NotSet { pos: x });
        }
        let pos = self.child_block(x) + c.index();
        self.bit(pos).ok_or(K2Error::NotSet { pos })
    }

    /// Is `(row, col)` an edge? Walks the quadrant derivation path
    /// through the flattened structure; the first unset (or absent) bit
    /// on the way down means the cell is empty.
    pub fn has_edge(&self, row: usize, col: usize) -> bool {
        if self.size < 2 || row >= self.size || col >= self.size {
            return false;
        }
        let path = QuadrantPath::derive(row, col, self.size);
        let steps = path.steps();
        let mut x = steps[0].index();
        if self.bit(x) != Some(true) {
            return false;
        }
        for &q in &steps[1..] {
            x = self.child_block(x) + q.index();
            if self.bit(x) != Some(true) {
                return false;
            }
        }
        true
    }

    /// Bit at `x` in the combined internal-then-leaves address space.
    #[inline]
    pub fn bit(&self, x: usize) -> Option<bool> {
        if x < self.internal.len() {
            self.internal.get(x)
        } else {
            self.leaves.get(x - self.internal.len())
        }
    }

    /// Start of the child block of the node at position `x`.
    #[inline]
    pub fn child_block(&self, x: usize) -> usize {
        (self.rank.rank1(x) + 1) * CHILDREN
    }

    /// Set bits strictly before `x` among the internal bits.
    #[inline]
    pub fn rank1(&self, x: usize) -> usize {
        self.rank.rank1(x)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Padded matrix dimension. 0 for a tree built from an empty graph.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of the internal bit sequence.
    #[inline]
    pub fn internal_len(&self) -> usize {
        self.internal.len()
    }

    /// Length of the leaf bit sequence.
    #[inline]
    pub fn leaf_len(&self) -> usize {
        self.leaves.len()
    }

    /// True if no edge was ever inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.internal.is_empty() && self.leaves.is_empty()
    }

    /// Internal-level bits (levels strictly between root and leaf).
    #[inline]
    pub fn internal_bits(&self) -> &BitVec {
        &self.internal
    }

    /// Leaf-level bits.
    #[inline]
    pub fn leaf_bits(&self) -> &BitVec {
        &self.leaves
    }

    /// Rank index over the internal bits.
    #[inline]
    pub fn rank_index(&self) -> &RankIndex {
        &self.rank
    }
}
