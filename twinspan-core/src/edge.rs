//! Edge and vertex primitives shared by the store, engines, and serializer.

use std::cmp::Ordering;
use std::fmt;

/// Vertex identifier in `0..vertex_count`.
pub type Vertex = usize;

/// Integer edge weight. Negative weights are permitted.
pub type Weight = i64;

/// An undirected weighted edge.
///
/// Endpoints keep the orientation they were created with so exported files
/// and reported trees preserve the caller's `(u, v)` order. Use
/// [`Edge::canonical`] when orientation must not matter.
///
/// Edges order by `(weight, source, target)`, the order Kruskal's algorithm
/// consumes them in.
///
/// # Examples
/// ```
/// use twinspan_core::Edge;
///
/// let edge = Edge::new(2, 1, 7);
/// assert_eq!((edge.source(), edge.target(), edge.weight()), (2, 1, 7));
/// assert_eq!(edge.canonical(), (1, 2, 7));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    weight: Weight,
    source: Vertex,
    target: Vertex,
}

impl Edge {
    /// Creates an edge between `source` and `target` carrying `weight`.
    #[must_use]
    pub const fn new(source: Vertex, target: Vertex, weight: Weight) -> Self {
        Self {
            weight,
            source,
            target,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> Vertex { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> Vertex { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns `(min(u, v), max(u, v), weight)`.
    #[must_use]
    pub const fn canonical(&self) -> (Vertex, Vertex, Weight) {
        if self.source <= self.target {
            (self.source, self.target, self.weight)
        } else {
            (self.target, self.source, self.weight)
        }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.target, self.weight)
    }
}
