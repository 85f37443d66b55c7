//! k²-tree proofs — the structural properties everything else rests on.
//!
//! Each test proves one property of the flattened encoding against an
//! independent reference (dense matrix or direct path derivation).
//!
//! Run: `cargo test --test proof_k2`

use std::sync::Arc;

use k2graph::{AdjacencyList, K2Tree, Quadrant, QuadrantPath};

/// Deterministic splitmix64 stream.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

fn random_graph(n: usize, density_pct: u64, seed: u64) -> AdjacencyList {
    let mut state = seed;
    let mut lists = Vec::with_capacity(n);
    for _ in 0..n {
        let mut row = Vec::new();
        for j in 0..n {
            if splitmix64(&mut state) % 100 < density_pct {
                row.push(j);
            }
        }
        lists.push(row);
    }
    AdjacencyList::from_lists(lists)
}

// =============================================================================
// K-1: Query/construction equivalence
// =============================================================================

/// PROOF K-1: walking `get_child` along an edge's derivation path is
/// bit-identical to re-walking the transient tree by path.
///
/// The flattened structure discards the pointer tree; this is the
/// property that makes the rank-addressed encoding a faithful stand-in.
/// For every edge, each step down returns true; for every non-edge, the
/// walk hits a false (or absent) bit before the leaf.
#[test]
fn proof_k1_path_walk_equivalence() {
    for (n, density, seed) in [(4, 30u64, 7u64), (9, 15, 8), (16, 40, 9), (30, 8, 10)] {
        let graph = random_graph(n, density, seed);
        let tree = K2Tree::build(&graph).unwrap();
        let size = tree.size();

        for row in 0..n {
            let neighbors = graph.neighbors(row);
            for col in 0..n {
                let expected = neighbors.contains(&col);
                let steps = QuadrantPath::derive(row, col, size);
                let steps = steps.steps();

                // Walk the combined address space by hand.
                let mut x = steps[0].index();
                let mut reached = tree.bit(x) == Some(true);
                for &q in &steps[1..] {
                    if !reached {
                        break;
                    }
                    match tree.get_child(x, q) {
                        Ok(true) => x = tree.child_block(x) + q.index(),
                        _ => reached = false,
                    }
                }

                assert_eq!(reached, expected, "n={} cell ({},{})", n, row, col);
                assert_eq!(tree.has_edge(row, col), expected);
            }
        }
    }
}

// =============================================================================
// K-2: Rank convention
// =============================================================================

/// PROOF K-2: `rank1` counts strictly-before, starts at zero, never
/// decreases, and the `+1` block offset addresses child blocks in
/// first-come order: the j-th set internal bit owns block j+1 (block 0
/// belongs to the implicit root).
#[test]
fn proof_k2_rank_convention() {
    let graph = random_graph(16, 35, 21);
    let tree = K2Tree::build(&graph).unwrap();

    assert_eq!(tree.rank1(0), 0);

    let mut prev = 0usize;
    let mut ones = 0usize;
    for x in 0..tree.internal_len() {
        let r = tree.rank1(x);
        assert!(r >= prev, "rank1 must be monotonic");
        assert_eq!(r, ones, "strictly-before convention at {}", x);
        prev = r;
        if tree.bit(x) == Some(true) {
            // This set node owns child block ones + 1.
            assert_eq!(tree.child_block(x), (ones + 1) * 4);
            ones += 1;
        }
    }
}

// =============================================================================
// K-3: Sparsity accounting
// =============================================================================

/// PROOF K-3: a node contributes a 4-bit child block iff its own bit is
/// set. Total emitted bits therefore equal four per set internal node,
/// plus four for the implicit root.
#[test]
fn proof_k3_sparsity_accounting() {
    for (n, density, seed) in [(4, 20u64, 31u64), (8, 50, 32), (17, 10, 33)] {
        let graph = random_graph(n, density, seed);
        let tree = K2Tree::build(&graph).unwrap();
        if tree.is_empty() {
            continue;
        }
        let set_internal = tree.internal_bits().count_ones();
        assert_eq!(
            tree.internal_len() + tree.leaf_len(),
            4 * (1 + set_internal),
            "n={} seed={}",
            n,
            seed
        );
    }
}

// =============================================================================
// K-4: Lock-free concurrent readers
// =============================================================================

/// PROOF K-4: once built, one structure serves concurrent readers with
/// no synchronization — queries are pure reads of immutable data.
#[test]
fn proof_k4_concurrent_readers() {
    let graph = random_graph(16, 30, 41);
    let tree = Arc::new(K2Tree::build(&graph).unwrap());

    let expected: Vec<Vec<bool>> = (0..16)
        .map(|i| (0..16).map(|j| graph.neighbors(i).contains(&j)).collect())
        .collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = Arc::clone(&tree);
            let expected = Arc::clone(&expected);
            std::thread::spawn(move || {
                for row in 0..16 {
                    for col in 0..16 {
                        assert_eq!(tree.has_edge(row, col), expected[row][col]);
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}

// =============================================================================
// K-5: Degenerate structures
// =============================================================================

/// PROOF K-5: the empty graph and the no-edge graph flatten to empty
/// sequences, and every query on them is a NotSet rejection.
#[test]
fn proof_k5_degenerate_graphs() {
    for graph in [AdjacencyList::new(), AdjacencyList::with_nodes(6)] {
        let tree = K2Tree::build(&graph).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.internal_len(), 0);
        assert_eq!(tree.leaf_len(), 0);
        for x in 0..8 {
            for q in Quadrant::ALL {
                assert!(tree.get_child(x, q).is_err());
            }
        }
    }
}
