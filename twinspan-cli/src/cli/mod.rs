//! Command-line interface for comparing Prim and Kruskal spanning trees.
//!
//! `compute` loads a CSV edge list, runs both engines, and prints the trees
//! with their weights and accuracy figures. `rewrite` loads an edge list and
//! writes it back, dropping rows that do not have exactly three fields.

mod commands;

pub use commands::{
    Cli, CliError, Command, ComputeCommand, Outcome, RewriteCommand, render_outcome, run_cli,
};

#[cfg(test)]
mod test_helpers;
