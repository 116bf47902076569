//! Minimum spanning tree (MST) construction.
//!
//! Two independent engines compute the MST of the same graph: [`prim`] grows
//! a tree from vertex 0 with a binary heap, and [`kruskal`] accepts edges in
//! ascending order while a [`DisjointSet`] rejects cycles. Both are
//! deterministic for equal weights and both refuse to return a partial tree
//! when the graph is disconnected.

mod adjacency;
mod kruskal;
mod prim;
mod union_find;

use std::fmt;

use crate::edge::{Edge, Weight};
use crate::error::define_error_codes;

pub use self::{
    adjacency::Adjacency, kruskal::kruskal, prim::prim, union_find::DisjointSet,
};

/// Identifies which engine produced a result or failure.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Heap-driven vertex growth from vertex 0.
    Prim,
    /// Sorted-edge union-find.
    Kruskal,
}

impl Algorithm {
    /// Returns the lowercase name used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while computing a minimum spanning tree.
#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The caller requested an MST for a graph without vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// An edge referenced a vertex id that is not present in the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The invalid vertex id referenced by an edge.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// The engine settled fewer than `vertex_count - 1` edges.
    #[error(
        "graph is disconnected: {algorithm} accepted {accepted} of {required} required edges"
    )]
    Disconnected {
        /// Engine that detected the disconnection.
        algorithm: Algorithm,
        /// Edges accepted before the engine ran out of candidates.
        accepted: usize,
        /// Edges a spanning tree over the graph needs.
        required: usize,
    },
    /// The tree's total weight does not fit in [`Weight`].
    #[error("{algorithm} total weight overflowed")]
    WeightOverflow {
        /// Engine whose total overflowed.
        algorithm: Algorithm,
    },
}

define_error_codes! {
    /// Machine-readable error codes for [`MstError`].
    enum MstErrorCode for MstError {
        /// The caller requested an MST for a graph without vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// An edge referenced a vertex id that is not present in the graph.
        InvalidVertex => InvalidVertex { .. } => "MST_INVALID_VERTEX",
        /// The graph is not connected.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// The total weight overflowed.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
    }
}

/// A complete minimum spanning tree produced by one engine.
///
/// Holds exactly `vertex_count - 1` edges in the order the engine accepted
/// them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    algorithm: Algorithm,
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl SpanningTree {
    /// Returns the engine that produced this tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the tree edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the tree's edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the edges as canonical `(min, max, weight)` triples, sorted.
    ///
    /// Two trees with equal canonical edge lists contain the same edges
    /// regardless of orientation or acceptance order.
    #[must_use]
    pub fn canonical_edges(&self) -> Vec<(usize, usize, Weight)> {
        let mut edges: Vec<_> = self.edges.iter().map(Edge::canonical).collect();
        edges.sort_unstable();
        edges
    }
}

/// Accumulates accepted edges and checks completeness for either engine.
///
/// The running total is wider than [`Weight`] so that acceptance order never
/// matters; only the finished total has to fit.
struct TreeBuilder {
    algorithm: Algorithm,
    edges: Vec<Edge>,
    total_weight: i128,
    required: usize,
}

impl TreeBuilder {
    fn new(algorithm: Algorithm, vertex_count: usize) -> Self {
        let required = vertex_count.saturating_sub(1);
        Self {
            algorithm,
            edges: Vec::with_capacity(required),
            total_weight: 0,
            required,
        }
    }

    fn is_complete(&self) -> bool {
        self.edges.len() >= self.required
    }

    fn accept(&mut self, edge: Edge) -> Result<(), MstError> {
        self.total_weight = self
            .total_weight
            .checked_add(i128::from(edge.weight()))
            .ok_or_else(|| self.overflow())?;
        self.edges.push(edge);
        Ok(())
    }

    const fn overflow(&self) -> MstError {
        MstError::WeightOverflow {
            algorithm: self.algorithm,
        }
    }

    fn finish(self) -> Result<SpanningTree, MstError> {
        if self.edges.len() != self.required {
            return Err(MstError::Disconnected {
                algorithm: self.algorithm,
                accepted: self.edges.len(),
                required: self.required,
            });
        }
        let total_weight = Weight::try_from(self.total_weight).map_err(|_| self.overflow())?;
        Ok(SpanningTree {
            algorithm: self.algorithm,
            edges: self.edges,
            total_weight,
        })
    }
}


#[cfg(test)]
mod property;
