//! # k2graph
//!
//! Succinct k²-tree representation of sparse adjacency matrices
//! (Brisaboa et al., "k²-trees for Compact Web Graph Representation").
//!
//! A graph's adjacency matrix is recursively split into four quadrants;
//! only quadrants containing at least one edge are materialized. The tree
//! is then flattened level-by-level into two packed bit sequences plus a
//! rank index, after which single-bit child lookups run in O(1) without
//! ever touching a pointer.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  AdjacencyList  →  transient quadrant tree (arena, indices)   │
//! │                          │ BFS flatten                        │
//! │                          ▼                                    │
//! │  K2Tree { internal: BitVec, leaves: BitVec, rank: RankIndex } │
//! │                          │                                    │
//! │  get_child(x, c) = bit at (rank1(x) + 1) * 4 + c              │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick start
//! ```rust
//! use k2graph::{AdjacencyList, K2Tree};
//!
//! let graph = AdjacencyList::from_lists(vec![
//!     vec![0, 1],
//!     vec![1],
//!     vec![2, 3],
//!     vec![2],
//! ]);
//! let tree = K2Tree::build(&graph).unwrap();
//! assert!(tree.has_edge(3, 2));
//! assert!(!tree.has_edge(0, 2));
//! ```
//!
//! The flattened structure is immutable and lock-free to query: once
//! `build` returns, any number of threads may share one `K2Tree`.

pub mod bits;
pub mod graph;
pub mod k2;

pub use bits::{BitVec, RankIndex};
pub use graph::AdjacencyList;
pub use k2::{K2Error, K2Tree, Quadrant, QuadrantPath};
