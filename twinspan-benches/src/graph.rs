//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning backbone attaches
//! each vertex `v > 0` to an earlier vertex, and extra random edges are laid
//! on top. Generation is deterministic for a given seed.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use twinspan_core::{Adjacency, Edge, EdgeStore, MstError, ValidationError, Weight};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested maximum weight was below one.
    #[error("maximum weight must be at least 1, got {got}")]
    NonPositiveMaxWeight {
        /// The rejected maximum weight.
        got: Weight,
    },
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Random edges added on top of the spanning backbone.
    pub extra_edges: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A connected random graph.
///
/// # Examples
///
/// ```
/// use twinspan_benches::graph::{SyntheticConfig, SyntheticGraph};
///
/// let config = SyntheticConfig { vertex_count: 10, extra_edges: 5, max_weight: 100, seed: 42 };
/// let graph = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(graph.edges().len(), 14);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl SyntheticGraph {
    /// Generates a graph eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero, or
    /// [`SyntheticError::NonPositiveMaxWeight`] if `max_weight < 1`.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        let vertex_count = config.vertex_count;
        if vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if config.max_weight < 1 {
            return Err(SyntheticError::NonPositiveMaxWeight {
                got: config.max_weight,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut edges =
            Vec::with_capacity((vertex_count - 1).saturating_add(config.extra_edges));
        for target in 1..vertex_count {
            let source = rng.gen_range(0..target);
            let weight = rng.gen_range(1..=config.max_weight);
            edges.push(Edge::new(source, target, weight));
        }
        if vertex_count > 1 {
            for _ in 0..config.extra_edges {
                let source = rng.gen_range(0..vertex_count);
                let candidate = rng.gen_range(0..vertex_count - 1);
                let target = if candidate >= source {
                    candidate + 1
                } else {
                    candidate
                };
                let weight = rng.gen_range(1..=config.max_weight);
                edges.push(Edge::new(source, target, weight));
            }
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the generated edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Builds the adjacency view consumed by Prim's engine.
    ///
    /// # Errors
    ///
    /// Propagates [`MstError::InvalidVertex`], which generation never produces.
    pub fn adjacency(&self) -> Result<Adjacency, MstError> {
        Adjacency::from_edges(self.vertex_count, &self.edges)
    }

    /// Loads the graph into a fresh [`EdgeStore`].
    ///
    /// # Errors
    ///
    /// Propagates [`ValidationError`], which generation never produces.
    pub fn to_store(&self) -> Result<EdgeStore, ValidationError> {
        let mut store = EdgeStore::new(self.vertex_count)?;
        store.replace_edges(self.edges.clone())?;
        Ok(store)
    }
}
