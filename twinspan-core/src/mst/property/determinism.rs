//! Repeated runs over one input must select identical edges.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::run_engines;
use super::types::MstFixture;

/// Number of extra runs compared against the first.
const REPETITIONS: usize = 4;

/// Runs both engines several times and compares every run with the first.
pub(super) fn run_determinism(fixture: &MstFixture) -> TestCaseResult {
    let baseline = run_engines(fixture.vertex_count, &fixture.edges)?;
    for run in 0..REPETITIONS {
        let repeat = run_engines(fixture.vertex_count, &fixture.edges)?;
        if repeat != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run} diverged from the first ({})",
                fixture.describe()
            )));
        }
    }
    Ok(())
}
