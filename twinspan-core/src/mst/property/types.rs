//! Type definitions for MST property-based tests.

use test_strategy::Arbitrary;

use crate::edge::Edge;

/// Weight and topology profile for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightProfile {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Weights drawn from a pool of at most three values, stressing ties.
    ManyIdentical,
    /// Weights drawn from a range that is mostly negative.
    Negative,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Edge probability 0.7-0.95 on a capped vertex count.
    Dense,
    /// Two to four internally connected components with no bridges.
    Disconnected,
}

/// Generated graph plus the profile it came from, for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges, never self-loops.
    pub edges: Vec<Edge>,
    /// Profile used during generation.
    pub profile: WeightProfile,
}

impl MstFixture {
    /// Short description appended to property failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "profile={:?}, vertices={}, edges={}",
            self.profile,
            self.vertex_count,
            self.edges.len()
        )
    }
}
