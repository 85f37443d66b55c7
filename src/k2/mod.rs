//! k²-tree core: quadrant decomposition, tree builder, succinct queries.
//!
//! Branching factor is fixed at k = 2, so every internal node has exactly
//! four children, one per quadrant of the current matrix block:
//!
//! ```text
//!          col < half   col ≥ half
//!         ┌───────────┬───────────┐
//! row <   │           │           │
//! half    │     0     │     1     │
//!         ├───────────┼───────────┤
//! row ≥   │           │           │
//! half    │     2     │     3     │
//!         └───────────┴───────────┘
//! ```
//!
//! The flattened encoding stores, in breadth-first order, one bit per
//! materialized node: internal levels (1..max) in `internal`, the leaf
//! level in `leaves`. The root is implicit. A node contributes a 4-bit
//! child block to the next level iff its own bit is set — that is the
//! sparsity invariant the whole structure rests on.

pub mod builder;
pub mod path;
pub mod tree;

pub use path::{Quadrant, QuadrantPath};
pub use tree::K2Tree;

/// Children per node (k² with k = 2).
pub const CHILDREN: usize = 4;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors surfaced by k²-tree construction and queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum K2Error {
    /// The bit at `pos` is unset or out of range: the node does not
    /// exist, so asking for its children is a caller-contract violation.
    NotSet { pos: usize },
    /// A neighbor index fell outside `0..nodes` during construction.
    InvalidEdge { row: usize, col: usize, nodes: usize },
}

impl std::fmt::Display for K2Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSet { pos } =>
                write!(f, "Bit at pos {} is not set", pos),
            Self::InvalidEdge { row, col, nodes } =>
                write!(f, "Edge ({}, {}) outside graph of {} nodes", row, col, nodes),
        }
    }
}

impl std::error::Error for K2Error {}
