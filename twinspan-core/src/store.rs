//! The mutable edge list backing a Twinspan session.
//!
//! [`EdgeStore`] is the single source of truth for the graph. Every edge it
//! holds satisfies `source < vertex_count`, `target < vertex_count`, and
//! `source != target`; each mutating operation either preserves that or fails
//! without changing anything.

use std::num::NonZeroUsize;

use crate::{
    edge::{Edge, Vertex, Weight},
    error::ValidationError,
    mst::Adjacency,
};

/// Ordered edge list plus the configured vertex count.
///
/// # Examples
/// ```
/// use twinspan_core::{EdgeStore, ValidationError};
///
/// let mut store = EdgeStore::new(3)?;
/// store.add_edge(0, 1, 4)?;
/// assert_eq!(store.snapshot().len(), 1);
/// assert!(matches!(
///     store.add_edge(0, 3, 1),
///     Err(ValidationError::VertexOutOfRange { vertex: 3, vertex_count: 3 })
/// ));
/// # Ok::<(), ValidationError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeStore {
    vertex_count: NonZeroUsize,
    edges: Vec<Edge>,
}

impl EdgeStore {
    /// Creates an empty store over `vertex_count` vertices.
    ///
    /// # Errors
    /// Returns [`ValidationError::ZeroVertexCount`] when `vertex_count == 0`.
    pub fn new(vertex_count: usize) -> Result<Self, ValidationError> {
        let vertex_count =
            NonZeroUsize::new(vertex_count).ok_or(ValidationError::ZeroVertexCount)?;
        Ok(Self {
            vertex_count,
            edges: Vec::new(),
        })
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count.get()
    }

    /// Returns the number of stored edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edges are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Changes the vertex count.
    ///
    /// Growing always succeeds. Shrinking fails if a stored edge would fall
    /// outside the new range.
    ///
    /// # Errors
    /// Returns [`ValidationError::ZeroVertexCount`] for `0` and
    /// [`ValidationError::VertexOutOfRange`] naming the first stranded vertex.
    pub fn set_vertex_count(&mut self, vertex_count: usize) -> Result<(), ValidationError> {
        let next = NonZeroUsize::new(vertex_count).ok_or(ValidationError::ZeroVertexCount)?;
        for edge in &self.edges {
            check_edge(edge, next.get())?;
        }
        self.vertex_count = next;
        Ok(())
    }

    /// Appends the edge `(u, v, w)`, preserving insertion order.
    ///
    /// # Errors
    /// Returns [`ValidationError::VertexOutOfRange`] if either endpoint is
    /// `>= vertex_count` and [`ValidationError::SelfLoop`] if `u == v`.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, w: Weight) -> Result<(), ValidationError> {
        let edge = Edge::new(u, v, w);
        self.validate(&edge)?;
        self.edges.push(edge);
        Ok(())
    }

    /// Checks `edge` against the store's invariants without inserting it.
    ///
    /// # Errors
    /// See [`EdgeStore::add_edge`].
    pub fn validate(&self, edge: &Edge) -> Result<(), ValidationError> {
        check_edge(edge, self.vertex_count())
    }

    /// Replaces the whole edge list.
    ///
    /// Every edge is validated before anything is swapped in, so on error the
    /// store keeps its previous contents.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found in `edges`.
    pub fn replace_edges(&mut self, edges: Vec<Edge>) -> Result<(), ValidationError> {
        for edge in &edges {
            self.validate(edge)?;
        }
        self.replace_validated(edges);
        Ok(())
    }

    pub(crate) fn replace_validated(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
    }

    /// Removes every edge. The vertex count is untouched.
    pub fn reset(&mut self) {
        self.edges.clear();
    }

    /// Returns the stored edges in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[Edge] {
        &self.edges
    }

    /// Builds a fresh adjacency view of the current edges.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_validated(self.vertex_count(), &self.edges)
    }
}

fn check_edge(edge: &Edge, vertex_count: usize) -> Result<(), ValidationError> {
    for vertex in [edge.source(), edge.target()] {
        if vertex >= vertex_count {
            return Err(ValidationError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
    }
    if edge.is_self_loop() {
        return Err(ValidationError::SelfLoop {
            vertex: edge.source(),
        });
    }
    Ok(())
}
