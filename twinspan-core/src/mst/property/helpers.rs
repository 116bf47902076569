//! Shared helpers for the MST property suites.

use proptest::test_runner::TestCaseError;

use crate::edge::Edge;
use crate::mst::{Adjacency, MstError, SpanningTree, kruskal, prim};

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Prim's result followed by Kruskal's.
pub(super) type EngineResults = (Result<SpanningTree, MstError>, Result<SpanningTree, MstError>);

/// Runs both engines over the same input.
pub(super) fn run_engines(
    vertex_count: usize,
    edges: &[Edge],
) -> Result<EngineResults, TestCaseError> {
    let adjacency = Adjacency::from_edges(vertex_count, edges)
        .map_err(|err| TestCaseError::fail(format!("adjacency rejected input: {err}")))?;
    Ok((prim(&adjacency), kruskal(vertex_count, edges)))
}
