//! Inner join of ground truth and predictions.

use super::table::{GroundTruthTable, PredictionTable};
use super::RecordKey;
use crate::{Error, Label, LabelNormalizer, PredictionSet, Result};
use std::collections::{HashMap, HashSet};

/// Records present in both tables, with normalized labels.
///
/// `ground_truth[i]` and every method's `predictions[i]` describe `keys[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignedDataset {
    /// Matched records, in ground-truth order
    pub keys: Vec<RecordKey>,
    /// Normalized true substrate per record
    pub ground_truth: Vec<Label>,
    /// Method column → normalized prediction set per record
    pub predictions: Vec<(String, Vec<PredictionSet>)>,
}

impl AlignedDataset {
    /// Prediction sets of one method, if it was aligned.
    #[must_use]
    pub fn method(&self, column: &str) -> Option<&[PredictionSet]> {
        self.predictions
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, sets)| sets.as_slice())
    }

    /// Number of matched records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no record matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Join `ground_truth` with `predictions` on [`RecordKey`].
///
/// Only records present in both tables are kept, in ground-truth order. A
/// method without an entry for a matched record contributes an empty set.
///
/// # Errors
///
/// [`Error::Dataset`] when a requested method is not a column of
/// `predictions`, or when either table repeats a key.
pub fn align(
    ground_truth: &GroundTruthTable,
    predictions: &PredictionTable,
    methods: &[&str],
    normalizer: LabelNormalizer<'_>,
) -> Result<AlignedDataset> {
    for method in methods {
        if !predictions.has_method(method) {
            return Err(Error::dataset(format!(
                "prediction table has no column {:?} (columns: {:?})",
                method, predictions.methods
            )));
        }
    }

    let mut by_key = HashMap::with_capacity(predictions.rows.len());
    for row in &predictions.rows {
        if by_key.insert(&row.key, row).is_some() {
            return Err(Error::dataset(format!("duplicate prediction record {}", row.key)));
        }
    }

    let mut seen = HashSet::with_capacity(ground_truth.rows.len());
    let mut aligned = AlignedDataset {
        predictions: methods
            .iter()
            .map(|m| (m.to_string(), Vec::new()))
            .collect(),
        ..AlignedDataset::default()
    };

    for gt in &ground_truth.rows {
        if !seen.insert(&gt.key) {
            return Err(Error::dataset(format!("duplicate ground-truth record {}", gt.key)));
        }
        let Some(row) = by_key.get(&gt.key) else {
            continue;
        };

        aligned.keys.push(gt.key.clone());
        aligned.ground_truth.push(normalizer.label(&gt.substrate));
        for (method, sets) in &mut aligned.predictions {
            let set = match row.get(method) {
                Some(names) => normalizer.prediction_set(names),
                None => PredictionSet::new(),
            };
            sets.push(set);
        }
    }

    let dropped = ground_truth.len() - aligned.len();
    log::info!(
        "Aligned {} records ({} ground-truth records without predictions)",
        aligned.len(),
        dropped
    );
    if aligned.is_empty() {
        log::warn!("No ground-truth record has a matching prediction row");
    }
    Ok(aligned)
}
