//! Equal-weight property: both engines report the true MST weight.
//!
//! Matching weights also pin both accuracy figures at `100.0`, except for a
//! zero-weight tree, which takes the `0.0` guard.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::accuracy::Accuracy;
use crate::edge::{Edge, Weight};
use crate::mst::MstError;

use super::helpers::run_engines;
use super::oracle::{exhaustive_mst_weight, matrix_prim_weight};
use super::types::MstFixture;

/// Compares both engines against the exhaustive search on a tiny graph.
pub(super) fn run_exhaustive_equivalence(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let expected = exhaustive_mst_weight(vertex_count, edges);
    compare_with_reference(vertex_count, edges, expected, "exhaustive")
        .and_then(|weights| weights.map_or(Ok(()), check_accuracy))
}

/// Compares both engines against the matrix Prim on a generated fixture,
/// then checks the accuracy figures derived from their weights.
pub(super) fn run_matrix_equivalence(fixture: &MstFixture) -> TestCaseResult {
    let expected = matrix_prim_weight(fixture.vertex_count, &fixture.edges);
    compare_with_reference(fixture.vertex_count, &fixture.edges, expected, "matrix")
        .and_then(|weights| weights.map_or(Ok(()), check_accuracy))
        .map_err(|err| TestCaseError::fail(format!("{err} ({})", fixture.describe())))
}

/// Returns the `(prim, kruskal)` weights when both engines succeeded.
fn compare_with_reference(
    vertex_count: usize,
    edges: &[Edge],
    expected: Option<Weight>,
    reference: &str,
) -> Result<Option<(Weight, Weight)>, TestCaseError> {
    let (prim_result, kruskal_result) = run_engines(vertex_count, edges)?;
    let mut weights = Vec::with_capacity(2);
    for result in [prim_result, kruskal_result] {
        match (result, expected) {
            (Ok(tree), Some(weight)) if tree.total_weight() == weight => weights.push(weight),
            (Err(MstError::Disconnected { .. }), None) => {}
            (actual, expected) => {
                return Err(TestCaseError::fail(format!(
                    "engine disagreed with {reference} reference: got {actual:?}, \
                     expected weight {expected:?}"
                )));
            }
        }
    }
    Ok(match weights.as_slice() {
        &[prim_weight, kruskal_weight] => Some((prim_weight, kruskal_weight)),
        _ => None,
    })
}

fn check_accuracy((prim_weight, kruskal_weight): (Weight, Weight)) -> TestCaseResult {
    let accuracy = Accuracy::compare(prim_weight, kruskal_weight);
    let expected = if prim_weight == 0 { 0.0 } else { 100.0 };
    if !accuracy.is_consistent()
        || accuracy.prim().total_cmp(&expected).is_ne()
        || accuracy.kruskal().total_cmp(&expected).is_ne()
    {
        return Err(TestCaseError::fail(format!(
            "accuracy {accuracy:?} for weights {prim_weight}/{kruskal_weight}, \
             expected {expected} for both engines"
        )));
    }
    Ok(())
}
