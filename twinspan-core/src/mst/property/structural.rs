//! Structural invariants of every produced tree.
//!
//! - exactly `n - 1` edges, no cycles, endpoints in range
//! - reported total equals the sum of edge weights
//! - disconnected input fails in both engines, and only then

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{MstError, SpanningTree};

use super::helpers::{find_root, run_engines};
use super::oracle::count_components;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants(fixture: &MstFixture) -> TestCaseResult {
    let components = count_components(fixture.vertex_count, &fixture.edges);
    let (prim_result, kruskal_result) = run_engines(fixture.vertex_count, &fixture.edges)?;

    for result in [prim_result, kruskal_result] {
        match result {
            Ok(tree) if components == 1 => validate_tree(fixture, &tree)?,
            Err(MstError::Disconnected { required, .. }) if components > 1 => {
                if required != fixture.vertex_count - 1 {
                    return Err(TestCaseError::fail(format!(
                        "required {required} edges ({})",
                        fixture.describe()
                    )));
                }
            }
            other => {
                return Err(TestCaseError::fail(format!(
                    "{components} input components but engine returned {other:?} ({})",
                    fixture.describe()
                )));
            }
        }
    }
    Ok(())
}

fn validate_tree(fixture: &MstFixture, tree: &SpanningTree) -> TestCaseResult {
    let vertex_count = fixture.vertex_count;
    if tree.edges().len() != vertex_count - 1 {
        return Err(TestCaseError::fail(format!(
            "{} produced {} edges ({})",
            tree.algorithm(),
            tree.edges().len(),
            fixture.describe()
        )));
    }

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (index, edge) in tree.edges().iter().enumerate() {
        if edge.source() >= vertex_count || edge.target() >= vertex_count {
            return Err(TestCaseError::fail(format!(
                "{} edge {index} {edge} is out of range ({})",
                tree.algorithm(),
                fixture.describe()
            )));
        }
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "{} edge {index} {edge} closes a cycle ({})",
                tree.algorithm(),
                fixture.describe()
            )));
        }
        parent[right] = left;
    }

    let sum: i64 = tree.edges().iter().map(|edge| edge.weight()).sum();
    if sum != tree.total_weight() {
        return Err(TestCaseError::fail(format!(
            "{} reported total {} but edges sum to {sum}",
            tree.algorithm(),
            tree.total_weight()
        )));
    }
    Ok(())
}
