//! Prim's engine: heap-driven growth from vertex 0.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use crate::edge::{Edge, Vertex, Weight};

use super::{Adjacency, Algorithm, MstError, SpanningTree, TreeBuilder};

/// Heap entry `(weight, vertex, parent)`.
///
/// Tuple ordering makes ties on weight resolve by the lower vertex id, then
/// by the lower parent id. `None` sorts before any parent so the seed entry
/// is always popped first.
type Frontier = Reverse<(Weight, Vertex, Option<Vertex>)>;

/// Computes the MST of `adjacency` with Prim's algorithm from vertex 0.
///
/// Accepted edges are reported as `(parent, vertex, weight)` in the order the
/// vertices were settled.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] for a view with no vertices,
/// [`MstError::Disconnected`] when some vertex is unreachable from vertex 0,
/// and [`MstError::WeightOverflow`] if the total leaves the `i64` range.
///
/// # Examples
/// ```
/// use twinspan_core::{Adjacency, Edge, prim};
///
/// let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 9)];
/// let tree = prim(&Adjacency::from_edges(3, &edges)?)?;
/// assert_eq!(tree.total_weight(), 3);
/// assert_eq!(tree.edges(), &[Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
/// # Ok::<(), twinspan_core::MstError>(())
/// ```
#[instrument(
    name = "mst.prim",
    level = "debug",
    skip(adjacency),
    fields(vertex_count = adjacency.vertex_count()),
)]
pub fn prim(adjacency: &Adjacency) -> Result<SpanningTree, MstError> {
    let vertex_count = adjacency.vertex_count();
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    let mut settled = vec![false; vertex_count];
    let mut settled_count = 0_usize;
    let mut tree = TreeBuilder::new(Algorithm::Prim, vertex_count);
    let mut frontier: BinaryHeap<Frontier> = BinaryHeap::new();
    frontier.push(Reverse((0, 0, None)));

    while settled_count < vertex_count {
        let Some(Reverse((weight, vertex, parent))) = frontier.pop() else {
            break;
        };
        let Some(is_settled) = settled.get_mut(vertex) else {
            continue;
        };
        if *is_settled {
            continue;
        }
        *is_settled = true;
        settled_count = settled_count.saturating_add(1);

        if let Some(parent) = parent {
            tree.accept(Edge::new(parent, vertex, weight))?;
        }

        for &(edge_weight, neighbour) in adjacency.neighbours(vertex) {
            if !settled.get(neighbour).copied().unwrap_or(true) {
                frontier.push(Reverse((edge_weight, neighbour, Some(vertex))));
            }
        }
    }

    debug!(settled = settled_count, "prim finished");
    tree.finish()
}
