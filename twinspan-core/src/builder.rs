//! Builder for configuring [`Twinspan`] sessions.
//!
//! Collects the vertex count and any initial vertex labels, validating both
//! before a session is constructed.

use crate::{
    edge::Vertex, error::ValidationError, labels::VertexLabels, session::Twinspan,
    store::EdgeStore,
};

/// Configures and constructs [`Twinspan`] sessions.
///
/// # Examples
/// ```
/// use twinspan_core::TwinspanBuilder;
///
/// let twinspan = TwinspanBuilder::new()
///     .with_vertex_count(4)
///     .with_label(0, "depot")
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(twinspan.vertex_count(), 4);
/// assert_eq!(twinspan.labels().label(0), "depot");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TwinspanBuilder {
    vertex_count: usize,
    labels: Vec<(Vertex, String)>,
}

impl TwinspanBuilder {
    /// Creates a builder with no vertices configured.
    ///
    /// # Examples
    /// ```
    /// use twinspan_core::TwinspanBuilder;
    ///
    /// let builder = TwinspanBuilder::new();
    /// assert_eq!(builder.vertex_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of vertices in the graph.
    #[must_use]
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Attaches a display label to `vertex`. Later labels for the same vertex
    /// win.
    #[must_use]
    pub fn with_label(mut self, vertex: Vertex, label: impl Into<String>) -> Self {
        self.labels.push((vertex, label.into()));
        self
    }

    /// Validates the configuration and constructs a [`Twinspan`] session.
    ///
    /// # Errors
    /// Returns [`ValidationError::ZeroVertexCount`] when no vertices were
    /// configured and [`ValidationError::VertexOutOfRange`] for a label on a
    /// vertex outside the graph.
    ///
    /// # Examples
    /// ```
    /// use twinspan_core::{TwinspanBuilder, ValidationError};
    ///
    /// let err = TwinspanBuilder::new().build().expect_err("zero vertices");
    /// assert_eq!(err, ValidationError::ZeroVertexCount);
    /// ```
    pub fn build(self) -> Result<Twinspan, ValidationError> {
        let store = EdgeStore::new(self.vertex_count)?;
        let mut labels = VertexLabels::default();
        for (vertex, label) in self.labels {
            if vertex >= self.vertex_count {
                return Err(ValidationError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
            labels.insert(vertex, label);
        }
        Ok(Twinspan::new(store, labels))
    }
}
