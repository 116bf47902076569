//! Optional display labels for vertices.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::edge::Vertex;

/// Sparse `vertex → label` mapping handed to renderers with a report.
///
/// Vertices without a label render as their decimal id.
///
/// # Examples
/// ```
/// use twinspan_core::VertexLabels;
///
/// let mut labels = VertexLabels::default();
/// labels.insert(0, "A");
/// assert_eq!(labels.label(0), "A");
/// assert_eq!(labels.label(3), "3");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VertexLabels {
    labels: BTreeMap<Vertex, String>,
}

impl VertexLabels {
    /// Stores `label` for `vertex`, replacing any earlier label.
    ///
    /// Range checks are the caller's job; see
    /// [`crate::Twinspan::set_vertex_label`].
    pub fn insert(&mut self, vertex: Vertex, label: impl Into<String>) {
        self.labels.insert(vertex, label.into());
    }

    /// Returns the label for `vertex`, falling back to its id.
    #[must_use]
    pub fn label(&self, vertex: Vertex) -> Cow<'_, str> {
        self.labels
            .get(&vertex)
            .map_or_else(|| Cow::Owned(vertex.to_string()), |label| {
                Cow::Borrowed(label.as_str())
            })
    }

    /// Returns `true` when no vertex carries an explicit label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates explicit labels in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &str)> {
        self.labels
            .iter()
            .map(|(vertex, label)| (*vertex, label.as_str()))
    }

    /// Drops labels for vertices `>= vertex_count`.
    pub(crate) fn truncate(&mut self, vertex_count: usize) {
        self.labels.retain(|vertex, _| *vertex < vertex_count);
    }
}
