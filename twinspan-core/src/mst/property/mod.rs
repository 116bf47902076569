//! Property-based tests for the Prim and Kruskal engines.
//!
//! Checks both engines against independent references (an exhaustive
//! spanning-tree search for tiny graphs and an O(n²) matrix Prim for larger
//! ones), validates tree structure, and confirms that repeated runs select
//! identical edges.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
