//! # adomain-eval
//!
//! Benchmarking of A-domain substrate specificity predictors.
//!
//! - **Labels**: substrate names normalized into comparable keys, with an
//!   optional short-name lookup
//! - **Evaluation**: one-vs-rest confusion counts pooled into micro-averaged
//!   precision, recall and F1 per prediction method
//! - **Ingest**: ground-truth and prediction TSV tables, SANDPUMA output
//!   parsing, pivoting and the inner join that aligns records
//!
//! ## Quick Start
//!
//! ```rust
//! use adomain_eval::eval::evaluate;
//! use adomain_eval::{LabelNormalizer, PredictionSet};
//!
//! let normalizer = LabelNormalizer::default();
//! let gt: Vec<_> = ["val", "leu", "val"].iter().map(|s| normalizer.label(s)).collect();
//! let preds: Vec<PredictionSet> = vec![
//!     normalizer.prediction_set(["val"]),
//!     normalizer.prediction_set(["val", "leu"]),
//!     normalizer.prediction_set(["leu", "val"]),
//! ];
//!
//! let metrics = evaluate(&gt, &preds)?;
//! assert_eq!(metrics.rounded(5).f1, 0.75);
//! # Ok::<(), adomain_eval::Error>(())
//! ```
//!
//! ## From Files
//!
//! ```rust,ignore
//! use adomain_eval::ingest::{align, tsv};
//! use adomain_eval::{compare_aligned, EvalConfig, LabelNormalizer};
//!
//! let config = EvalConfig::default();
//! let gt = tsv::read_ground_truth("ADD_benchmarking_dataset.tsv", &config)?;
//! let preds = tsv::read_prediction_table("sandpuma_predictions.tsv")?;
//! let aligned = align(&gt, &preds, &config.method_columns(), LabelNormalizer::default())?;
//! let table = compare_aligned(&aligned, &config);
//! print!("{}", table.to_tsv());
//! ```

#![warn(missing_docs)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
mod error;
pub mod eval;
pub mod ingest;
mod label;

pub use config::{EvalConfig, MethodSpec};
pub use error::{Error, Result};
pub use eval::{ComparisonTable, ConfusionCounts, MetricScores, MicroMetrics};
pub use ingest::{AlignedDataset, RecordKey};
pub use label::{normalize, Label, LabelNormalizer, PredictionSet, SubstrateLookup};

/// Compare every configured method on an aligned dataset.
///
/// Rows appear in the order of [`EvalConfig::methods`], labelled with their
/// display names.
#[must_use]
pub fn compare_aligned(aligned: &AlignedDataset, config: &EvalConfig) -> ComparisonTable {
    let methods: Vec<(&str, &[PredictionSet])> = config
        .methods
        .iter()
        .filter_map(|spec| {
            aligned
                .method(&spec.column)
                .map(|preds| (spec.display_name.as_str(), preds))
        })
        .collect();

    eval::compare_methods(&aligned.ground_truth, &methods, config.decimals)
}
