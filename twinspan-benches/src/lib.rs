//! Benchmark support crate for twinspan.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for the Prim and Kruskal engines.

pub mod error;
pub mod graph;
pub mod params;
