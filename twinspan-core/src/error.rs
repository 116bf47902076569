//! Error types for the Twinspan core library.
//!
//! Defines the validation and engine errors exposed by the public API together
//! with stable machine-readable codes for each variant.

use std::fmt;

use thiserror::Error;

use crate::mst::{MstError, MstErrorCode};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident
                    $( { $($pattern:tt)* } )?
                    $( ( $($tuple:tt)* ) )?
                    => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(
                        Self::$ErrVariant
                            $( { $($pattern)* } )?
                            $( ( $($tuple)* ) )?
                            => $CodeTy::$CodeVariant,
                    )+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Input rejected before any computation takes place.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// An edge or label referenced a vertex outside `0..vertex_count`.
    #[error("vertex index {vertex} out of range (vertex_count is {vertex_count})")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// The configured number of vertices.
        vertex_count: usize,
    },
    /// An edge joined a vertex to itself.
    #[error("self-loop on vertex {vertex} cannot be part of a spanning tree")]
    SelfLoop {
        /// The vertex used as both endpoints.
        vertex: usize,
    },
    /// The graph was configured without any vertices.
    #[error("vertex count must be at least 1")]
    ZeroVertexCount,
    /// A spanning tree was requested for a graph with no edges.
    #[error("no edges to compute a spanning tree from")]
    EmptyEdgeSet,
}

define_error_codes! {
    /// Stable codes describing [`ValidationError`] variants.
    enum ValidationErrorCode for ValidationError {
        /// An edge or label referenced a vertex outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "VALIDATION_VERTEX_OUT_OF_RANGE",
        /// An edge joined a vertex to itself.
        SelfLoop => SelfLoop { .. } => "VALIDATION_SELF_LOOP",
        /// The graph was configured without any vertices.
        ZeroVertexCount => ZeroVertexCount => "VALIDATION_ZERO_VERTEX_COUNT",
        /// A spanning tree was requested for a graph with no edges.
        EmptyEdgeSet => EmptyEdgeSet => "VALIDATION_EMPTY_EDGE_SET",
    }
}

/// Error produced by [`crate::Twinspan::compute_mst`].
///
/// Any single engine failure fails the whole computation; no partial report
/// is ever returned.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EngineError {
    /// The graph failed validation before either engine ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// One of the engines could not produce a spanning tree.
    #[error(transparent)]
    Mst(#[from] MstError),
}

define_error_codes! {
    /// Stable codes describing [`EngineError`] variants.
    enum EngineErrorCode for EngineError {
        /// The graph failed validation before either engine ran.
        Validation => Validation(..) => "ENGINE_VALIDATION",
        /// One of the engines could not produce a spanning tree.
        Mst => Mst(..) => "ENGINE_MST",
    }
}

impl EngineError {
    /// Retrieve the inner [`ValidationErrorCode`] when validation failed.
    #[must_use]
    pub const fn validation_code(&self) -> Option<ValidationErrorCode> {
        match self {
            Self::Validation(error) => Some(error.code()),
            Self::Mst(_) => None,
        }
    }

    /// Retrieve the inner [`MstErrorCode`] when an engine failed.
    #[must_use]
    pub const fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Mst(error) => Some(error.code()),
            Self::Validation(_) => None,
        }
    }

    /// Returns `true` when the failure was caused by a disconnected graph.
    #[must_use]
    pub const fn is_disconnected(&self) -> bool {
        matches!(self, Self::Mst(MstError::Disconnected { .. }))
    }
}
