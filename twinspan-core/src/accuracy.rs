//! Cross-check of the two engines' total weights.
//!
//! Each engine's accuracy is the best (lowest) of the two weights expressed
//! as a percentage of its own weight, rounded to two decimal places. On a
//! connected graph both engines find the true MST weight, so anything other
//! than `100.0` for a non-zero weight points at an engine bug.

use crate::edge::Weight;

/// Accuracy figures derived from a Prim weight and a Kruskal weight.
///
/// # Examples
/// ```
/// use twinspan_core::Accuracy;
///
/// let accuracy = Accuracy::compare(6, 6);
/// assert_eq!(accuracy.prim(), 100.0);
/// assert_eq!(accuracy.kruskal(), 100.0);
/// assert!(accuracy.is_consistent());
///
/// let skewed = Accuracy::compare(8, 6);
/// assert_eq!(skewed.prim(), 75.0);
/// assert!(!skewed.is_consistent());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accuracy {
    prim_weight: Weight,
    kruskal_weight: Weight,
    prim: f64,
    kruskal: f64,
}

impl Accuracy {
    /// Compares the two weights.
    ///
    /// A weight of `0` yields an accuracy of `0.0` for that engine rather
    /// than dividing by zero.
    #[must_use]
    pub fn compare(prim_weight: Weight, kruskal_weight: Weight) -> Self {
        let best = prim_weight.min(kruskal_weight);
        Self {
            prim_weight,
            kruskal_weight,
            prim: percentage(best, prim_weight),
            kruskal: percentage(best, kruskal_weight),
        }
    }

    /// Returns Prim's accuracy as a percentage.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prim(&self) -> f64 { self.prim }

    /// Returns Kruskal's accuracy as a percentage.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kruskal(&self) -> f64 { self.kruskal }

    /// Returns `true` when both engines reported the same weight.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.prim_weight == self.kruskal_weight
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "accuracy is reported as a rounded floating-point percentage"
)]
fn percentage(best: Weight, own: Weight) -> f64 {
    if own == 0 {
        return 0.0;
    }
    let ratio = best as f64 / own as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}
