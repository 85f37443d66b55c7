//! Tree builder: adjacency list → transient quadrant tree → flat encoding.
//!
//! The transient tree lives in an arena — a flat `Vec` of nodes where
//! "children" is an optional quadruple of pool indices. No pointers, no
//! ownership cycles, and the whole pool drops in one free once the
//! flattened encoding has been emitted.
//!
//! Flattening is two breadth-first passes over the pool with an explicit
//! work queue: one to find the deepest level reached, one to emit bits.
//! Only allocated children are ever enqueued, so subtrees under false
//! nodes contribute nothing — the bit sequences grow with the number of
//! materialized nodes, not with 4^depth.

use std::collections::VecDeque;

use tracing::debug;

use crate::bits::{BitVec, RankIndex};
use crate::graph::AdjacencyList;
use super::path::QuadrantPath;
use super::tree::K2Tree;
use super::{K2Error, CHILDREN};

// ============================================================================
// NODE POOL
// ============================================================================

/// A transient tree node. `value` is true iff this node or any
/// descendant covers at least one edge.
#[derive(Clone, Copy, Debug)]
struct Node {
    value: bool,
    level: u8,
    children: Option<[u32; CHILDREN]>,
}

/// Arena holding the transient tree. Root is index 0 and always true.
struct NodePool {
    nodes: Vec<Node>,
}

impl NodePool {
    fn new() -> Self {
        Self {
            nodes: vec![Node { value: true, level: 0, children: None }],
        }
    }

    /// Children of `idx`, allocating all four (false, level + 1) on
    /// first touch. A node has either all four children or none.
    fn ensure_children(&mut self, idx: u32) -> [u32; CHILDREN] {
        if let Some(kids) = self.nodes[idx as usize].children {
            return kids;
        }
        let level = self.nodes[idx as usize].level + 1;
        let base = self.nodes.len() as u32;
        for _ in 0..CHILDREN {
            self.nodes.push(Node { value: false, level, children: None });
        }
        let kids = [base, base + 1, base + 2, base + 3];
        self.nodes[idx as usize].children = Some(kids);
        kids
    }

    /// Walk one root-to-leaf path, marking every visited node true.
    fn insert(&mut self, path: &QuadrantPath) {
        let mut cur = 0u32;
        for &q in path.steps() {
            self.nodes[cur as usize].value = true;
            let kids = self.ensure_children(cur);
            cur = kids[q.index()];
        }
        // Final step lands on the leaf-level node for the matrix cell.
        self.nodes[cur as usize].value = true;
    }

    /// Deepest level reached, by breadth-first traversal.
    fn max_level(&self) -> u8 {
        let mut max_level = 0;
        let mut queue: VecDeque<u32> = VecDeque::new();
        queue.push_back(0);
        while let Some(idx) = queue.pop_front() {
            let node = &self.nodes[idx as usize];
            max_level = max_level.max(node.level);
            if let Some(kids) = node.children {
                queue.extend(kids);
            }
        }
        max_level
    }
}

// ============================================================================
// BUILD
// ============================================================================

/// Build the flattened k²-tree for `graph`.
///
/// Neighbor lists are sorted into a private copy; the caller's graph is
/// never mutated. Fails fast with [`K2Error::InvalidEdge`] if any
/// neighbor index is out of range.
pub(crate) fn build(graph: &AdjacencyList) -> Result<K2Tree, K2Error> {
    graph.validate()?;

    let n = graph.node_count();
    if n == 0 {
        return Ok(K2Tree::empty(0));
    }

    // The recursion needs at least one split, so a 1-node graph still
    // pads to a 2×2 matrix.
    let size = n.next_power_of_two().max(2);
    debug!(nodes = n, edges = graph.edge_count(), size, "building k2 tree");

    let rows = graph.sorted_rows();
    let mut pool = NodePool::new();

    // Single ascending merge-scan per row: the cursor walks the sorted
    // neighbor list while j sweeps all columns.
    for (i, row) in rows.iter().enumerate() {
        let mut cursor = 0usize;
        for j in 0..n {
            if cursor < row.len() && row[cursor] == j {
                pool.insert(&QuadrantPath::derive(i, j, size));
                cursor += 1;
            }
        }
    }

    Ok(flatten(&pool, size))
}

/// Flatten the pool breadth-first into the durable triple.
///
/// Levels strictly between root and the deepest level feed `internal`
/// and the rank index (one push each, append-time); the deepest level
/// feeds `leaves`. The root bit is never stored — it is implicitly true.
fn flatten(pool: &NodePool, size: usize) -> K2Tree {
    let max_level = pool.max_level();
    if max_level == 0 {
        // No edges were inserted; nothing below the root exists.
        return K2Tree::empty(size);
    }

    let mut internal = BitVec::new();
    let mut rank = RankIndex::new();
    let mut leaves = BitVec::new();

    let mut queue: VecDeque<u32> = VecDeque::new();
    queue.push_back(0);
    while let Some(idx) = queue.pop_front() {
        let node = &pool.nodes[idx as usize];
        if node.level == max_level {
            leaves.push(node.value);
        } else if node.level != 0 {
            internal.push(node.value);
            rank.push(node.value);
        }
        if let Some(kids) = node.children {
            queue.extend(kids);
        }
    }

    debug!(
        internal = internal.len(),
        leaves = leaves.len(),
        max_level,
        "flattened k2 tree"
    );
    K2Tree::from_parts(internal, leaves, rank, size)
}
