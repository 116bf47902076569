//! Shared test utilities used across twinspan crates.

pub mod ci;
pub mod tracing;
