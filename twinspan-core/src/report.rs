//! The combined result handed to renderers after a successful computation.

use crate::{
    accuracy::Accuracy,
    edge::{Edge, Weight},
    labels::VertexLabels,
    mst::SpanningTree,
};

/// Both engines' spanning trees, their weights, and the accuracy check.
///
/// A report only exists when both engines succeeded.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    prim: SpanningTree,
    kruskal: SpanningTree,
    accuracy: Accuracy,
    labels: VertexLabels,
}

impl Report {
    pub(crate) fn new(prim: SpanningTree, kruskal: SpanningTree, labels: VertexLabels) -> Self {
        let accuracy = Accuracy::compare(prim.total_weight(), kruskal.total_weight());
        Self {
            prim,
            kruskal,
            accuracy,
            labels,
        }
    }

    /// Returns Prim's tree edges in the order they were settled.
    #[must_use]
    #[rustfmt::skip]
    pub fn prim_edges(&self) -> &[Edge] { self.prim.edges() }

    /// Returns Prim's total weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prim_weight(&self) -> Weight { self.prim.total_weight() }

    /// Returns Kruskal's tree edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn kruskal_edges(&self) -> &[Edge] { self.kruskal.edges() }

    /// Returns Kruskal's total weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kruskal_weight(&self) -> Weight { self.kruskal.total_weight() }

    /// Returns Prim's accuracy percentage.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prim_accuracy(&self) -> f64 { self.accuracy.prim() }

    /// Returns Kruskal's accuracy percentage.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kruskal_accuracy(&self) -> f64 { self.accuracy.kruskal() }

    /// Returns the full accuracy comparison.
    #[must_use]
    #[rustfmt::skip]
    pub const fn accuracy(&self) -> &Accuracy { &self.accuracy }

    /// Returns the spanning tree produced by Prim's engine.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prim_tree(&self) -> &SpanningTree { &self.prim }

    /// Returns the spanning tree produced by Kruskal's engine.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kruskal_tree(&self) -> &SpanningTree { &self.kruskal }

    /// Returns the vertex labels captured when the report was built.
    #[must_use]
    #[rustfmt::skip]
    pub const fn labels(&self) -> &VertexLabels { &self.labels }

    /// Returns `true` when both engines reported the same total weight.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.accuracy.is_consistent()
    }
}
