//! Twinspan core library.
//!
//! Computes the minimum spanning tree of one undirected weighted graph with
//! two independent engines and cross-checks their weights.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod accuracy;
mod builder;
mod edge;
mod error;
mod labels;
mod mst;
mod report;
pub mod serializer;
mod session;
mod store;

#[cfg(test)]
mod test_utils;

pub use crate::{
    accuracy::Accuracy,
    builder::TwinspanBuilder,
    edge::{Edge, Vertex, Weight},
    error::{EngineError, EngineErrorCode, ValidationError, ValidationErrorCode},
    labels::VertexLabels,
    mst::{
        Adjacency, Algorithm, DisjointSet, MstError, MstErrorCode, SpanningTree, kruskal, prim,
    },
    report::Report,
    serializer::{SerializeError, SerializeErrorCode},
    session::Twinspan,
    store::EdgeStore,
};
