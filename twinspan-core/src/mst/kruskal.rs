//! Kruskal's engine: ascending edge scan over a disjoint set.

use tracing::{debug, instrument};

use crate::edge::Edge;

use super::{Algorithm, DisjointSet, MstError, SpanningTree, TreeBuilder};

/// Computes the MST of the graph with Kruskal's algorithm.
///
/// Edges are considered in ascending `(weight, source, target)` order, so the
/// accepted set is the same on every run. The scan stops as soon as
/// `vertex_count - 1` edges have been accepted. Self-loops are never
/// accepted.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] when `vertex_count == 0`,
/// [`MstError::InvalidVertex`] for an endpoint `>= vertex_count`,
/// [`MstError::Disconnected`] when fewer than `vertex_count - 1` edges join
/// distinct components, and [`MstError::WeightOverflow`] if the total leaves
/// the `i64` range.
///
/// # Examples
/// ```
/// use twinspan_core::{Edge, kruskal};
///
/// let edges = [Edge::new(0, 2, 9), Edge::new(1, 2, 2), Edge::new(0, 1, 1)];
/// let tree = kruskal(3, &edges)?;
/// assert_eq!(tree.total_weight(), 3);
/// assert_eq!(tree.edges(), &[Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
/// # Ok::<(), twinspan_core::MstError>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    level = "debug",
    skip(edges),
    fields(edge_count = edges.len()),
)]
pub fn kruskal(vertex_count: usize, edges: &[Edge]) -> Result<SpanningTree, MstError> {
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }
    let sorted = sorted_edges(vertex_count, edges)?;

    let mut sets = DisjointSet::new(vertex_count);
    let mut tree = TreeBuilder::new(Algorithm::Kruskal, vertex_count);
    for edge in sorted {
        if tree.is_complete() {
            break;
        }
        if sets.union(edge.source(), edge.target()) {
            tree.accept(edge)?;
        }
    }

    debug!(components = sets.component_count(), "kruskal finished");
    tree.finish()
}

fn sorted_edges(vertex_count: usize, edges: &[Edge]) -> Result<Vec<Edge>, MstError> {
    if let Some(vertex) = edges
        .iter()
        .flat_map(|edge| [edge.source(), edge.target()])
        .find(|vertex| *vertex >= vertex_count)
    {
        return Err(MstError::InvalidVertex {
            vertex,
            vertex_count,
        });
    }
    let mut sorted = edges.to_vec();
    sorted.sort_unstable();
    Ok(sorted)
}
