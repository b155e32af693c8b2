//! Substrate prediction evaluation.
//!
//! # Overview
//!
//! A-domain substrate predictors return zero, one or several candidate names
//! per domain, while the ground truth holds exactly one. Evaluation is a
//! one-vs-rest decomposition over the ground-truth classes followed by
//! micro-averaging:
//!
//! 1. [`confusion::count`]: TP/FP/TN/FN for one class over binarized sequences
//! 2. [`micro::evaluate`]: per-class counts, pooled into precision/recall/F1
//! 3. [`compare::compare_methods`]: one row per method, failures isolated
//!
//! ```rust
//! use adomain_eval::eval::compare_methods;
//! use adomain_eval::{normalize, PredictionSet};
//!
//! let gt = vec![normalize("Valine"), normalize("Leucine")];
//! let sandpuma: Vec<PredictionSet> = vec![
//!     [normalize("valine")].into_iter().collect(),
//!     [normalize("leucine"), normalize("valine")].into_iter().collect(),
//! ];
//! let silent = vec![PredictionSet::new(), PredictionSet::new()];
//!
//! let table = compare_methods(
//!     &gt,
//!     &[("SANDPUMA", sandpuma.as_slice()), ("silent", silent.as_slice())],
//!     5,
//! );
//! assert_eq!(table.get("SANDPUMA").unwrap().outcome.scores().unwrap().recall, 1.0);
//! assert_eq!(table.num_failed(), 1);
//! ```
//!
//! # Metrics
//!
//! - Micro precision, recall and F1 only. Per-class counts are kept on
//!   [`MicroMetrics::per_class`] but not reported.
//! - A zero denominator is [`crate::Error::DegenerateMetric`], never NaN.
//! - Scores are rounded for presentation ([`micro::DEFAULT_DECIMALS`]); the
//!   unrounded values stay on [`MicroMetrics`].

pub mod compare;
pub mod confusion;
pub mod micro;

pub use compare::{compare_methods, ComparisonRow, ComparisonTable, MethodOutcome};
pub use confusion::{count, ConfusionCounts};
pub use micro::{evaluate, round_to, MetricScores, MicroMetrics, DEFAULT_DECIMALS};
