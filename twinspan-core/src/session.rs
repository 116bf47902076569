//! The [`Twinspan`] session: one graph, two engines, one report.
//!
//! A session owns the [`EdgeStore`] and the vertex labels. Callers mutate it
//! through `&mut self`, so concurrent access needs an external lock.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::{Span, debug, error, field, info, instrument, warn};

use crate::{
    edge::{Edge, Vertex, Weight},
    error::{EngineError, ValidationError},
    labels::VertexLabels,
    mst::{MstError, kruskal, prim},
    report::Report,
    serializer::{self, SerializeError},
    store::EdgeStore,
};

/// Entry point for building a graph and comparing its spanning trees.
///
/// # Examples
/// ```
/// use twinspan_core::TwinspanBuilder;
///
/// let mut twinspan = TwinspanBuilder::new()
///     .with_vertex_count(4)
///     .build()
///     .expect("builder must succeed");
/// twinspan.add_edge(0, 1, 1)?;
/// twinspan.add_edge(1, 2, 2)?;
/// twinspan.add_edge(2, 3, 3)?;
/// twinspan.add_edge(0, 3, 10)?;
///
/// let report = twinspan.compute_mst()?;
/// assert_eq!(report.prim_weight(), 6);
/// assert_eq!(report.kruskal_weight(), 6);
/// assert_eq!(report.prim_accuracy(), 100.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Twinspan {
    store: EdgeStore,
    labels: VertexLabels,
}

impl Twinspan {
    pub(crate) fn new(store: EdgeStore, labels: VertexLabels) -> Self {
        Self { store, labels }
    }

    /// Wraps an existing store in a session with no labels.
    #[must_use]
    pub fn from_store(store: EdgeStore) -> Self {
        Self::new(store, VertexLabels::default())
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.store.vertex_count() }

    /// Returns the stored edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { self.store.snapshot() }

    /// Returns the underlying edge store.
    #[must_use]
    #[rustfmt::skip]
    pub const fn store(&self) -> &EdgeStore { &self.store }

    /// Returns the vertex labels.
    #[must_use]
    #[rustfmt::skip]
    pub const fn labels(&self) -> &VertexLabels { &self.labels }

    /// Changes the vertex count, dropping labels that fall out of range.
    ///
    /// # Errors
    /// See [`EdgeStore::set_vertex_count`].
    #[instrument(name = "twinspan.set_vertex_count", level = "debug", err, skip(self))]
    pub fn set_vertex_count(&mut self, vertex_count: usize) -> Result<(), ValidationError> {
        self.store.set_vertex_count(vertex_count)?;
        self.labels.truncate(vertex_count);
        Ok(())
    }

    /// Attaches a display label to `vertex`.
    ///
    /// # Errors
    /// Returns [`ValidationError::VertexOutOfRange`] when `vertex` is not in
    /// the graph.
    #[instrument(
        name = "twinspan.set_vertex_label",
        level = "debug",
        err,
        skip(self, label)
    )]
    pub fn set_vertex_label(
        &mut self,
        vertex: Vertex,
        label: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let vertex_count = self.vertex_count();
        if vertex >= vertex_count {
            return Err(ValidationError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
        self.labels.insert(vertex, label);
        Ok(())
    }

    /// Appends the edge `(u, v, w)`.
    ///
    /// # Errors
    /// See [`EdgeStore::add_edge`].
    #[instrument(name = "twinspan.add_edge", level = "debug", err, skip(self))]
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, w: Weight) -> Result<(), ValidationError> {
        self.store.add_edge(u, v, w)
    }

    /// Removes every edge. The vertex count and labels are kept.
    #[instrument(name = "twinspan.reset", level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Runs both engines over the current graph and compares their weights.
    ///
    /// A weight mismatch between the engines is logged at `error` level but
    /// still yields a report; inspect [`Report::is_consistent`].
    ///
    /// # Errors
    /// Returns [`EngineError::Validation`] when no edges are stored and
    /// [`EngineError::Mst`] when either engine fails. No partial report is
    /// returned.
    #[instrument(
        name = "twinspan.compute_mst",
        err,
        skip(self),
        fields(
            vertex_count = self.vertex_count(),
            edge_count = self.store.len(),
            weight = field::Empty,
        ),
    )]
    pub fn compute_mst(&self) -> Result<Report, EngineError> {
        if self.store.is_empty() {
            warn!("no edges stored, refusing to compute");
            return Err(ValidationError::EmptyEdgeSet.into());
        }

        let adjacency = self.store.adjacency();
        let prim_tree = prim(&adjacency).inspect_err(note_engine_failure)?;
        let kruskal_tree =
            kruskal(self.vertex_count(), self.store.snapshot()).inspect_err(note_engine_failure)?;
        let report = Report::new(prim_tree, kruskal_tree, self.labels.clone());

        if !report.is_consistent() {
            error!(
                prim_weight = report.prim_weight(),
                kruskal_weight = report.kruskal_weight(),
                "engines disagree on the spanning tree weight"
            );
            record_weight_mismatch();
        }

        Span::current().record("weight", report.kruskal_weight());
        record_computation();
        info!(
            prim_weight = report.prim_weight(),
            kruskal_weight = report.kruskal_weight(),
            prim_accuracy = report.prim_accuracy(),
            kruskal_accuracy = report.kruskal_accuracy(),
            "spanning trees computed"
        );
        Ok(report)
    }

    /// Replaces the stored edges with the contents of the CSV file at `path`.
    ///
    /// On any failure the session keeps its previous edges.
    ///
    /// # Errors
    /// Returns [`SerializeError::Io`] when the file cannot be opened and the
    /// errors of [`serializer::import`] otherwise.
    #[instrument(name = "twinspan.import_edges", err, skip(self, path), fields(path = %path.display()))]
    pub fn import_edges(&mut self, path: &Path) -> Result<(), SerializeError> {
        let file = File::open(path).map_err(|source| SerializeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let imported = serializer::import(&mut self.store, BufReader::new(file))?;
        info!(imported, "edges imported");
        Ok(())
    }

    /// Writes the stored edges to `path` as CSV, replacing any existing file.
    ///
    /// Rows go to a sibling `<path>.part` file that is renamed over `path`
    /// once complete, so a failed export leaves the previous file intact.
    ///
    /// # Errors
    /// Returns [`SerializeError::Io`] when the file cannot be created,
    /// written, or moved into place.
    #[instrument(name = "twinspan.export_edges", err, skip(self, path), fields(path = %path.display()))]
    pub fn export_edges(&self, path: &Path) -> Result<(), SerializeError> {
        let part_path = part_path_for(path);
        if let Err(source) = write_then_rename(&self.store, &part_path, path) {
            if let Err(cleanup) = fs::remove_file(&part_path) {
                debug!(%cleanup, part = %part_path.display(), "no partial export to remove");
            }
            return Err(SerializeError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
        info!(exported = self.store.len(), "edges exported");
        Ok(())
    }
}

fn part_path_for(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(".part");
    PathBuf::from(raw)
}

fn write_then_rename(store: &EdgeStore, part_path: &Path, path: &Path) -> io::Result<()> {
    let file = File::create(part_path)?;
    serializer::export(store, BufWriter::new(file))?;
    fs::rename(part_path, path)
}

fn note_engine_failure(err: &MstError) {
    if let MstError::Disconnected {
        algorithm,
        accepted,
        required,
    } = err
    {
        warn!(%algorithm, accepted, required, "graph is disconnected");
        record_disconnected();
    }
}

#[cfg(feature = "metrics")]
fn record_computation() {
    metrics::counter!("mst_computations_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_computation() {}

#[cfg(feature = "metrics")]
fn record_disconnected() {
    metrics::counter!("mst_disconnected_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_disconnected() {}

#[cfg(feature = "metrics")]
fn record_weight_mismatch() {
    metrics::counter!("mst_weight_mismatch_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_weight_mismatch() {}
