//! Shared helpers for the integration tests, plus tests for `edgegraph::util`.

use edgegraph::{NeighborMode, OrderedEdgeList};

mod test_index_vec;

/// The three neighbor modes, in raw-value order.
pub const MODES: [NeighborMode; 3] = [NeighborMode::OUT, NeighborMode::IN, NeighborMode::ALL];

/// All edges of `g` as `(from, to)` pairs, in edge-id order.
pub fn edge_pairs(g: &OrderedEdgeList) -> Vec<(usize, usize)> {
    g.edge_ids().map(|e| g.edge(e).unwrap()).collect()
}

/// Build a graph from `(from, to)` pairs.
pub fn graph_of(n: usize, directed: bool, pairs: &[(usize, usize)]) -> OrderedEdgeList {
    let flat: Vec<usize> = pairs.iter().flat_map(|&(f, t)| [f, t]).collect();
    OrderedEdgeList::from_edges(&flat, n, directed).unwrap()
}
