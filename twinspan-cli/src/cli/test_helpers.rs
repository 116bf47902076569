//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, ComputeCommand, Outcome, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_csv(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn compute_cli(path: PathBuf, vertices: usize, labels: &[&str]) -> Cli {
    Cli {
        command: Command::Compute(ComputeCommand {
            path,
            vertices,
            labels: labels.iter().map(|label| (*label).to_owned()).collect(),
        }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn expect_report(outcome: Outcome) -> twinspan_core::Report {
    match outcome {
        Outcome::Computed(report) => report,
        other @ Outcome::Rewritten { .. } => panic!("expected a report, got {other:?}"),
    }
}
