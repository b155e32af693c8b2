//! Micro-averaged precision/recall/F1 over one-vs-rest class decomposition.
//!
//! The classes are exactly the distinct labels in the ground truth. For each
//! class `c`, record `i` is a positive truth when its label is `c` and a
//! positive prediction when `c` is anywhere in its candidate set, so an
//! ambiguous prediction `{valine, leucine}` for a valine domain scores a TP
//! for valine and an FP for leucine.
//!
//! Counts from all classes are pooled before the ratios are taken:
//!
//! ```text
//! P  = ΣTP / (ΣTP + ΣFP)
//! R  = ΣTP / (ΣTP + ΣFN)
//! F1 = 2PR / (P + R)        (0 when P or R is 0)
//! ```
//!
//! A zero denominator is reported as [`Error::DegenerateMetric`] rather than
//! NaN.

use super::confusion::{count, ConfusionCounts};
use crate::{Error, Label, PredictionSet, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Rounding precision used for reported scores.
pub const DEFAULT_DECIMALS: u32 = 5;

/// Unrounded micro-averaged metrics for one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroMetrics {
    /// ΣTP / (ΣTP + ΣFP)
    pub precision: f64,
    /// ΣTP / (ΣTP + ΣFN)
    pub recall: f64,
    /// Harmonic mean of precision and recall
    pub f1: f64,
    /// Counts summed over all ground-truth classes
    pub totals: ConfusionCounts,
    /// Counts per ground-truth class
    pub per_class: BTreeMap<Label, ConfusionCounts>,
}

/// Precision/recall/F1 rounded for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    /// Micro precision
    pub precision: f64,
    /// Micro recall
    pub recall: f64,
    /// Micro F1
    pub f1: f64,
}

impl MicroMetrics {
    /// Derive metrics from per-class counts.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateMetric`] when nothing was predicted positive or
    /// nothing is positive in the ground truth.
    pub fn from_per_class(per_class: BTreeMap<Label, ConfusionCounts>) -> Result<Self> {
        let mut totals = ConfusionCounts::default();
        for counts in per_class.values() {
            totals.merge(counts);
        }

        if totals.predicted_positive() == 0 {
            return Err(Error::degenerate(format!(
                "precision undefined: no positive predictions across {} classes",
                per_class.len()
            )));
        }
        if totals.actual_positive() == 0 {
            return Err(Error::degenerate(format!(
                "recall undefined: no positive ground truth across {} classes",
                per_class.len()
            )));
        }

        let precision = totals.tp as f64 / totals.predicted_positive() as f64;
        let recall = totals.tp as f64 / totals.actual_positive() as f64;
        let f1 = if precision != 0.0 && recall != 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Ok(Self {
            precision,
            recall,
            f1,
            totals,
            per_class,
        })
    }

    /// Scores rounded to `decimals` places.
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> MetricScores {
        MetricScores {
            precision: round_to(self.precision, decimals),
            recall: round_to(self.recall, decimals),
            f1: round_to(self.f1, decimals),
        }
    }

    /// Number of ground-truth classes evaluated.
    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.per_class.len()
    }
}

/// Round to `decimals` places.
///
/// Rounds the exact binary value, so a tie such as `1/64` to five places
/// goes to the even digit (`0.01562`).
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Evaluate one method's candidate sets against the ground truth.
///
/// ```rust
/// use adomain_eval::eval::micro::evaluate;
/// use adomain_eval::{normalize, PredictionSet};
///
/// let gt = vec![normalize("val"), normalize("leu"), normalize("val")];
/// let preds: Vec<PredictionSet> = vec![
///     [normalize("val")].into_iter().collect(),
///     [normalize("val"), normalize("leu")].into_iter().collect(),
///     [normalize("leu"), normalize("val")].into_iter().collect(),
/// ];
///
/// let metrics = evaluate(&gt, &preds).unwrap();
/// assert!((metrics.precision - 0.6).abs() < 1e-12);
/// assert!((metrics.recall - 1.0).abs() < 1e-12);
/// assert!((metrics.f1 - 0.75).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if the slices differ in length
/// - [`Error::DegenerateMetric`] if precision or recall has a zero denominator
pub fn evaluate(ground_truth: &[Label], predictions: &[PredictionSet]) -> Result<MicroMetrics> {
    if ground_truth.len() != predictions.len() {
        return Err(Error::length_mismatch(ground_truth.len(), predictions.len()));
    }

    let classes: BTreeSet<&Label> = ground_truth.iter().collect();
    let mut per_class = BTreeMap::new();

    for class in classes {
        let gt_bin: Vec<bool> = ground_truth.iter().map(|label| label == class).collect();
        let pred_bin: Vec<bool> = predictions.iter().map(|set| set.contains(class)).collect();
        let counts = count(&gt_bin, &pred_bin)?;
        per_class.insert(class.clone(), counts);
    }

    MicroMetrics::from_per_class(per_class)
}
