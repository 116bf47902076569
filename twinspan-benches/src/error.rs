//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use crate::graph::SyntheticError;
use twinspan_core::{MstError, ValidationError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated graph was rejected by the edge store.
    #[error("graph validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// Building the adjacency view failed.
    #[error("MST setup failed: {0}")]
    Mst(#[from] MstError),
}
