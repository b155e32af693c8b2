//! Side-by-side comparison of prediction methods.
//!
//! Each method is evaluated in isolation: a degenerate or misaligned method
//! becomes a failed row and the rest of the table is still produced.

use super::micro::{evaluate, MetricScores, MicroMetrics};
use crate::{Label, PredictionSet, Result};
use serde::Serialize;
use std::fmt::Write as _;

/// Column headers used in the TSV report.
pub const TSV_HEADERS: [&str; 3] = ["Precision (micro)", "Recall (micro)", "F1-score (micro)"];

/// Outcome of evaluating one method.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodOutcome {
    /// Metrics were computed.
    Scored {
        /// Rounded scores
        scores: MetricScores,
        /// Unrounded metrics, including per-class counts
        metrics: Box<MicroMetrics>,
    },
    /// Evaluation failed for this method only.
    Failed {
        /// Error message
        error: String,
    },
}

impl MethodOutcome {
    /// Rounded scores, if the method was scored.
    #[must_use]
    pub fn scores(&self) -> Option<&MetricScores> {
        match self {
            MethodOutcome::Scored { scores, .. } => Some(scores),
            MethodOutcome::Failed { .. } => None,
        }
    }

    /// Unrounded metrics, if the method was scored.
    #[must_use]
    pub fn metrics(&self) -> Option<&MicroMetrics> {
        match self {
            MethodOutcome::Scored { metrics, .. } => Some(metrics),
            MethodOutcome::Failed { .. } => None,
        }
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Method display name
    pub method: String,
    /// Scores or failure
    pub outcome: MethodOutcome,
}

/// Methods → scores, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    /// Decimal places used for the scores
    pub decimals: u32,
    /// One row per method
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Create an empty table rounding to `decimals` places.
    #[must_use]
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals,
            rows: Vec::new(),
        }
    }

    /// Append one method's evaluation result.
    ///
    /// A method inserted twice keeps its first position and takes the new
    /// result.
    pub fn insert(&mut self, method: impl Into<String>, result: Result<MicroMetrics>) {
        let method = method.into();
        let outcome = match result {
            Ok(metrics) => MethodOutcome::Scored {
                scores: metrics.rounded(self.decimals),
                metrics: Box::new(metrics),
            },
            Err(e) => MethodOutcome::Failed {
                error: e.to_string(),
            },
        };

        match self.rows.iter_mut().find(|row| row.method == method) {
            Some(row) => row.outcome = outcome,
            None => self.rows.push(ComparisonRow { method, outcome }),
        }
    }

    /// Look up a method's row.
    #[must_use]
    pub fn get(&self, method: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.method == method)
    }

    /// Number of methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no methods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of methods that failed to evaluate.
    #[must_use]
    pub fn num_failed(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row.outcome, MethodOutcome::Failed { .. }))
            .count()
    }

    /// Tab-separated report; failed methods show `NA`.
    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\t{}", TSV_HEADERS.join("\t"));
        for row in &self.rows {
            match row.outcome.scores() {
                Some(s) => {
                    let _ = writeln!(out, "{}\t{}\t{}\t{}", row.method, s.precision, s.recall, s.f1);
                }
                None => {
                    let _ = writeln!(out, "{}\tNA\tNA\tNA", row.method);
                }
            }
        }
        out
    }

    /// Markdown table.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let width = self.decimals as usize;
        let mut out = String::from(
            "| Method | Precision | Recall | F1 |\n\
             |--------|-----------|--------|----|\n",
        );
        for row in &self.rows {
            match &row.outcome {
                MethodOutcome::Scored { scores, .. } => {
                    let _ = writeln!(
                        out,
                        "| {} | {:.w$} | {:.w$} | {:.w$} |",
                        row.method,
                        scores.precision,
                        scores.recall,
                        scores.f1,
                        w = width
                    );
                }
                MethodOutcome::Failed { .. } => {
                    let _ = writeln!(out, "| {} | NA | NA | NA |", row.method);
                }
            }
        }
        out
    }

    /// Pretty-printed JSON. Per-class counts are not included.
    pub fn to_json(&self) -> Result<String> {
        let report = JsonReport {
            decimals: self.decimals,
            rows: self.rows.iter().map(JsonRow::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    decimals: u32,
    rows: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    method: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    f1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> From<&'a ComparisonRow> for JsonRow<'a> {
    fn from(row: &'a ComparisonRow) -> Self {
        match &row.outcome {
            MethodOutcome::Scored { scores, .. } => JsonRow {
                method: &row.method,
                status: "scored",
                precision: Some(scores.precision),
                recall: Some(scores.recall),
                f1: Some(scores.f1),
                error: None,
            },
            MethodOutcome::Failed { error } => JsonRow {
                method: &row.method,
                status: "failed",
                precision: None,
                recall: None,
                f1: None,
                error: Some(error),
            },
        }
    }
}

/// Evaluate each method against the same ground truth.
///
/// Failures are logged and recorded per row; they never abort the other
/// methods.
pub fn compare_methods(
    ground_truth: &[Label],
    methods: &[(&str, &[PredictionSet])],
    decimals: u32,
) -> ComparisonTable {
    let mut table = ComparisonTable::new(decimals);

    for (name, predictions) in methods {
        log::info!("Evaluating {}...", name);
        let result = evaluate(ground_truth, predictions);
        if let Err(e) = &result {
            log::warn!("{} could not be scored: {}", name, e);
        }
        table.insert(*name, result);
    }

    table
}
