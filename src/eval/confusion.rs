//! One-vs-rest binary confusion counts.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// TP/FP/TN/FN counts for one class (or summed over classes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// Ground truth positive, predicted positive
    pub tp: usize,
    /// Ground truth negative, predicted positive
    pub fp: usize,
    /// Ground truth negative, predicted negative
    pub tn: usize,
    /// Ground truth positive, predicted negative
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl ConfusionCounts {
    /// Create counts from explicit values.
    #[must_use]
    pub fn new(tp: usize, fp: usize, tn: usize, fn_: usize) -> Self {
        Self { tp, fp, tn, fn_ }
    }

    /// Number of records these counts cover.
    #[must_use]
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }

    /// TP + FP.
    #[must_use]
    pub fn predicted_positive(&self) -> usize {
        self.tp + self.fp
    }

    /// TP + FN.
    #[must_use]
    pub fn actual_positive(&self) -> usize {
        self.tp + self.fn_
    }

    /// Merge counts from another set.
    pub fn merge(&mut self, other: &ConfusionCounts) {
        self.tp += other.tp;
        self.fp += other.fp;
        self.tn += other.tn;
        self.fn_ += other.fn_;
    }
}

/// Count TP/FP/TN/FN over two binarized sequences.
///
/// Index `i` of both slices refers to the same record. Every index lands in
/// exactly one of the four cells, so `total()` equals the slice length.
///
/// # Errors
///
/// [`Error::LengthMismatch`] when the slices differ in length.
///
/// ```rust
/// use adomain_eval::eval::confusion::count;
///
/// let counts = count(&[true, false, true, false], &[true, true, false, false]).unwrap();
/// assert_eq!((counts.tp, counts.fp, counts.tn, counts.fn_), (1, 1, 1, 1));
/// ```
pub fn count(ground_truth: &[bool], prediction: &[bool]) -> Result<ConfusionCounts> {
    if ground_truth.len() != prediction.len() {
        return Err(Error::length_mismatch(ground_truth.len(), prediction.len()));
    }

    let mut counts = ConfusionCounts::default();
    for (&truth, &pred) in ground_truth.iter().zip(prediction) {
        match (truth, pred) {
            (true, true) => counts.tp += 1,
            (false, true) => counts.fp += 1,
            (false, false) => counts.tn += 1,
            (true, false) => counts.fn_ += 1,
        }
    }
    Ok(counts)
}
