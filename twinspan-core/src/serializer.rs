//! Flat CSV persistence for an [`EdgeStore`].
//!
//! Rows are `u,v,w` integers with no header. Rows that do not have exactly
//! three fields are skipped; everything else must parse and validate or the
//! whole import fails and the store is left as it was.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    error::{ValidationError, define_error_codes},
    store::EdgeStore,
};

/// Errors raised while reading or writing edge files.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SerializeError {
    /// Opening, creating, or flushing a file failed.
    #[error("failed to access `{}`: {source}", path.display())]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a row from the source failed part-way through.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// 1-based line number that could not be read.
        line: usize,
        /// Underlying read error.
        #[source]
        source: io::Error,
    },
    /// A three-field row held a value that is not an integer.
    #[error("line {line}: field `{field}` is not an integer: `{value}`")]
    Parse {
        /// 1-based line number of the offending row.
        line: usize,
        /// Name of the offending field (`u`, `v`, or `w`).
        field: &'static str,
        /// Raw field text after trimming.
        value: String,
    },
    /// A row parsed but describes an edge the store would reject.
    #[error("line {line}: {source}")]
    Invalid {
        /// 1-based line number of the offending row.
        line: usize,
        /// Validation failure reported by the store.
        #[source]
        source: ValidationError,
    },
}

define_error_codes! {
    /// Stable codes describing [`SerializeError`] variants.
    enum SerializeErrorCode for SerializeError {
        /// File access failed.
        Io => Io { .. } => "SERIALIZE_IO",
        /// Reading a row failed.
        Read => Read { .. } => "SERIALIZE_READ",
        /// A field was not an integer.
        Parse => Parse { .. } => "SERIALIZE_PARSE",
        /// A row described an invalid edge.
        Invalid => Invalid { .. } => "SERIALIZE_INVALID",
    }
}

impl SerializeError {
    /// Retrieve the inner [`crate::ValidationErrorCode`] for invalid rows.
    #[must_use]
    pub const fn validation_code(&self) -> Option<crate::ValidationErrorCode> {
        match self {
            Self::Invalid { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}

/// Replaces the contents of `store` with the edges read from `reader`.
///
/// Returns the number of edges imported. The store is only touched once every
/// row has been read, parsed, and validated against its vertex count.
///
/// # Errors
/// Returns [`SerializeError::Read`] on an I/O failure,
/// [`SerializeError::Parse`] for a non-integer field, and
/// [`SerializeError::Invalid`] for an out-of-range endpoint or a self-loop.
///
/// # Examples
/// ```
/// use twinspan_core::{EdgeStore, serializer};
///
/// let mut store = EdgeStore::new(3)?;
/// let imported = serializer::import(&mut store, "0,1,4\nbad row\n1,2,-2\n".as_bytes())?;
/// assert_eq!(imported, 2);
/// assert_eq!(store.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(name = "serializer.import", level = "debug", err, skip_all)]
pub fn import<R: BufRead>(store: &mut EdgeStore, reader: R) -> Result<usize, SerializeError> {
    let mut edges = Vec::new();
    let mut skipped = 0_usize;
    for (index, row) in reader.lines().enumerate() {
        let line = index + 1;
        let row = row.map_err(|source| SerializeError::Read { line, source })?;
        let Some(edge) = parse_row(&row, line)? else {
            skipped += 1;
            continue;
        };
        store
            .validate(&edge)
            .map_err(|source| SerializeError::Invalid { line, source })?;
        edges.push(edge);
    }

    let imported = edges.len();
    store.replace_validated(edges);
    debug!(imported, skipped, "edges imported");
    Ok(imported)
}

/// Writes every stored edge to `writer` as `u,v,w` rows in stored order.
///
/// # Errors
/// Returns any error raised by `writer`.
///
/// # Examples
/// ```
/// use twinspan_core::{EdgeStore, serializer};
///
/// let mut store = EdgeStore::new(3)?;
/// store.add_edge(2, 0, 7)?;
/// store.add_edge(0, 1, -1)?;
/// let mut out = Vec::new();
/// serializer::export(&store, &mut out)?;
/// assert_eq!(out, b"2,0,7\n0,1,-1\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn export<W: Write>(store: &EdgeStore, mut writer: W) -> io::Result<()> {
    for edge in store.snapshot() {
        writeln!(
            writer,
            "{},{},{}",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    writer.flush()
}

/// Parses one row. `Ok(None)` means the row has the wrong width and is skipped.
fn parse_row(row: &str, line: usize) -> Result<Option<Edge>, SerializeError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    let [source, target, weight] = fields.as_slice() else {
        debug!(line, fields = fields.len(), "skipping row");
        return Ok(None);
    };
    Ok(Some(Edge::new(
        parse_field(source, "u", line)?,
        parse_field(target, "v", line)?,
        parse_field(weight, "w", line)?,
    )))
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    field: &'static str,
    line: usize,
) -> Result<T, SerializeError> {
    raw.parse().map_err(|_| SerializeError::Parse {
        line,
        field,
        value: raw.to_owned(),
    })
}
