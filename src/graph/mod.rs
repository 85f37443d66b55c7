//! Adjacency-list input graph.
//!
//! The builder consumes a plain adjacency list: node index → neighbor
//! indices. Neighbor lists may arrive in any order; the builder sorts a
//! private copy and never mutates the caller's data.

use crate::k2::K2Error;

/// A directed graph over nodes `0..n` as an adjacency list.
///
/// Row `i` holds the column indices of the set cells in row `i` of the
/// adjacency matrix. Self-loops are ordinary edges. Neighbor order is
/// preserved as given; nothing here requires it to be sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    adj: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Empty graph.
    pub fn new() -> Self {
        Self { adj: Vec::new() }
    }

    /// Graph with `n` nodes and no edges.
    pub fn with_nodes(n: usize) -> Self {
        Self { adj: vec![Vec::new(); n] }
    }

    /// Wrap existing neighbor lists. Index of the outer vec = node id.
    pub fn from_lists(adj: Vec<Vec<usize>>) -> Self {
        Self { adj }
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(|row| row.len()).sum()
    }

    /// Append a node, returning its id.
    pub fn add_node(&mut self) -> usize {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// Add the edge `(from, to)`. Both endpoints must already exist.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), K2Error> {
        let n = self.adj.len();
        if from >= n || to >= n {
            return Err(K2Error::InvalidEdge { row: from, col: to, nodes: n });
        }
        self.adj[from].push(to);
        Ok(())
    }

    /// Neighbors of node `i` in insertion order. Empty for unknown ids.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        self.adj.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Reject any neighbor index outside `0..node_count`.
    ///
    /// Called by the builder before construction starts: a bad index
    /// fails fast instead of silently corrupting the tree.
    pub fn validate(&self) -> Result<(), K2Error> {
        let n = self.adj.len();
        for (row, neighbors) in self.adj.iter().enumerate() {
            for &col in neighbors {
                if col >= n {
                    return Err(K2Error::InvalidEdge { row, col, nodes: n });
                }
            }
        }
        Ok(())
    }

    /// Ascending-sorted copy of each row, leaving `self` untouched.
    pub(crate) fn sorted_rows(&self) -> Vec<Vec<usize>> {
        let mut rows = self.adj.clone();
        for row in &mut rows {
            row.sort_unstable();
        }
        rows
    }
}
