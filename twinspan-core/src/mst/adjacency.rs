//! Adjacency view consumed by Prim's engine.

use crate::edge::{Edge, Vertex, Weight};

use super::MstError;

/// Per-vertex neighbour lists `(weight, neighbour)` for an undirected graph.
///
/// Built fresh before each run and never persisted. Each undirected edge
/// appears in both endpoints' lists, in edge-list order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Adjacency {
    neighbours: Vec<Vec<(Weight, Vertex)>>,
}

impl Adjacency {
    /// Builds the view over `vertex_count` vertices from `edges`.
    ///
    /// Self-loops are dropped since they never join two components.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidVertex`] when an endpoint is
    /// `>= vertex_count`.
    ///
    /// # Examples
    /// ```
    /// use twinspan_core::{Adjacency, Edge};
    ///
    /// let adjacency = Adjacency::from_edges(3, &[Edge::new(0, 2, 4)])?;
    /// assert_eq!(adjacency.neighbours(2), &[(4, 0)]);
    /// assert!(adjacency.neighbours(1).is_empty());
    /// # Ok::<(), twinspan_core::MstError>(())
    /// ```
    pub fn from_edges(vertex_count: usize, edges: &[Edge]) -> Result<Self, MstError> {
        for edge in edges {
            for vertex in [edge.source(), edge.target()] {
                if vertex >= vertex_count {
                    return Err(MstError::InvalidVertex {
                        vertex,
                        vertex_count,
                    });
                }
            }
        }
        Ok(Self::from_validated(vertex_count, edges))
    }

    pub(crate) fn from_validated(vertex_count: usize, edges: &[Edge]) -> Self {
        let mut neighbours = vec![Vec::new(); vertex_count];
        for edge in edges.iter().filter(|edge| !edge.is_self_loop()) {
            if let Some(list) = neighbours.get_mut(edge.source()) {
                list.push((edge.weight(), edge.target()));
            }
            if let Some(list) = neighbours.get_mut(edge.target()) {
                list.push((edge.weight(), edge.source()));
            }
        }
        Self { neighbours }
    }

    /// Returns the number of vertices covered by the view.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns `(weight, neighbour)` pairs for `vertex`, or an empty slice
    /// when the vertex is unknown.
    #[must_use]
    pub fn neighbours(&self, vertex: Vertex) -> &[(Weight, Vertex)] {
        self.neighbours.get(vertex).map_or(&[], Vec::as_slice)
    }
}
