//! In-memory ground-truth and prediction tables.
//!
//! Tables hold raw (unnormalized) names so they can be written back
//! unchanged; normalization happens when records are aligned.

use super::RecordKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One curated A-domain with its true substrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTruthRow {
    /// Record identity
    pub key: RecordKey,
    /// Raw substrate name
    pub substrate: String,
}

/// Ground truth, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTruthTable {
    /// Rows in file order
    pub rows: Vec<GroundTruthRow>,
}

impl GroundTruthTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn push(&mut self, key: RecordKey, substrate: impl Into<String>) {
        self.rows.push(GroundTruthRow {
            key,
            substrate: substrate.into(),
        });
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Raw candidate names per method for one A-domain.
///
/// A method with no entry made no call for this record; an entry with an
/// empty list is an explicit "no prediction". Both align to an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRow {
    /// Record identity
    pub key: RecordKey,
    /// Method → raw candidate names
    pub predictions: BTreeMap<String, Vec<String>>,
}

impl PredictionRow {
    /// Create a row with no predictions.
    #[must_use]
    pub fn new(key: RecordKey) -> Self {
        Self {
            key,
            predictions: BTreeMap::new(),
        }
    }

    /// Raw names for `method`, if the method has an entry.
    #[must_use]
    pub fn get(&self, method: &str) -> Option<&[String]> {
        self.predictions.get(method).map(Vec::as_slice)
    }
}

/// Prediction table pivoted to one column per method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionTable {
    /// Method columns in table order
    pub methods: Vec<String>,
    /// Rows in table order
    pub rows: Vec<PredictionRow>,
}

impl PredictionTable {
    /// Create an empty table with the given method columns.
    pub fn with_methods<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            methods: methods.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Whether `method` is one of the columns.
    #[must_use]
    pub fn has_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
