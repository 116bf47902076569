//! Reference MST computations used as property-test oracles.
//!
//! Neither reference shares code with the engines under test: the exhaustive
//! search enumerates every `(n - 1)`-edge subset, and the matrix Prim keeps
//! the cheapest known connection per vertex instead of using a heap.

use crate::edge::{Edge, Weight};

use super::helpers::find_root;

/// Largest edge list the exhaustive search accepts.
pub(super) const EXHAUSTIVE_EDGE_LIMIT: usize = 16;

/// Minimum spanning tree weight by trying every `(n - 1)`-edge subset.
///
/// Returns `None` when no subset spans the graph. Only intended for tiny
/// inputs; panics above [`EXHAUSTIVE_EDGE_LIMIT`] edges.
pub(super) fn exhaustive_mst_weight(vertex_count: usize, edges: &[Edge]) -> Option<Weight> {
    assert!(
        edges.len() <= EXHAUSTIVE_EDGE_LIMIT,
        "exhaustive search limited to {EXHAUSTIVE_EDGE_LIMIT} edges"
    );
    let required = vertex_count.saturating_sub(1);
    if required == 0 {
        return Some(0);
    }

    let mut best: Option<Weight> = None;
    for mask in 0_u32..(1_u32 << edges.len()) {
        if mask.count_ones() as usize != required {
            continue;
        }
        let subset = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge);
        if let Some(weight) = spanning_weight(vertex_count, subset) {
            best = Some(best.map_or(weight, |current| current.min(weight)));
        }
    }
    best
}

/// Returns the subset's weight when it is acyclic (and therefore spanning,
/// given it has `n - 1` edges).
fn spanning_weight(vertex_count: usize, subset: impl Iterator<Item = Edge>) -> Option<Weight> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total: Weight = 0;
    for edge in subset {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return None;
        }
        parent[right] = left;
        total += edge.weight();
    }
    Some(total)
}

/// Minimum spanning tree weight by array-based Prim over a weight matrix.
///
/// Parallel edges collapse to the cheapest one. Returns `None` when some
/// vertex is unreachable from vertex 0.
pub(super) fn matrix_prim_weight(vertex_count: usize, edges: &[Edge]) -> Option<Weight> {
    if vertex_count == 0 {
        return None;
    }
    let mut matrix: Vec<Vec<Option<Weight>>> = vec![vec![None; vertex_count]; vertex_count];
    for edge in edges {
        let (source, target) = (edge.source(), edge.target());
        let cheapest = matrix[source][target].map_or(edge.weight(), |w| w.min(edge.weight()));
        matrix[source][target] = Some(cheapest);
        matrix[target][source] = Some(cheapest);
    }

    let mut in_tree = vec![false; vertex_count];
    let mut key: Vec<Option<Weight>> = vec![None; vertex_count];
    key[0] = Some(0);
    let mut total: Weight = 0;

    for _ in 0..vertex_count {
        let next = (0..vertex_count)
            .filter(|&vertex| !in_tree[vertex])
            .filter_map(|vertex| key[vertex].map(|weight| (weight, vertex)))
            .min()?;
        let (weight, vertex) = next;
        in_tree[vertex] = true;
        total += weight;
        for neighbour in 0..vertex_count {
            if in_tree[neighbour] {
                continue;
            }
            if let Some(candidate) = matrix[vertex][neighbour] {
                if key[neighbour].is_none_or(|current| candidate < current) {
                    key[neighbour] = Some(candidate);
                }
            }
        }
    }
    Some(total)
}

/// Counts connected components using a plain parent array.
pub(super) fn count_components(vertex_count: usize, edges: &[Edge]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}
