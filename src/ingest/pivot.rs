//! Long ↔ wide conversion of prediction tables.
//!
//! Tools report one line per `(record, method)`; evaluation wants one row
//! per record with a column per method. [`pivot`] and [`unpivot`] convert
//! between the two while preserving which names each method predicted for
//! each record.

use super::table::{PredictionRow, PredictionTable};
use super::RecordKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One method's raw candidate names for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatPrediction {
    /// Record identity
    pub key: RecordKey,
    /// Method name
    pub method: String,
    /// Raw candidate names (may be empty)
    pub names: Vec<String>,
}

impl FlatPrediction {
    /// Create a flat prediction.
    pub fn new(key: RecordKey, method: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            key,
            method: method.into(),
            names,
        }
    }
}

/// Pivot flat predictions into one row per record.
///
/// Records and methods keep first-seen order. Repeated `(record, method)`
/// entries are merged, keeping the first occurrence of each name.
#[must_use]
pub fn pivot(flat: &[FlatPrediction]) -> PredictionTable {
    let mut table = PredictionTable::default();
    let mut row_of: HashMap<&RecordKey, usize> = HashMap::new();

    for entry in flat {
        if !table.has_method(&entry.method) {
            table.methods.push(entry.method.clone());
        }

        let idx = *row_of.entry(&entry.key).or_insert_with(|| {
            table.rows.push(PredictionRow::new(entry.key.clone()));
            table.rows.len() - 1
        });

        let names = table.rows[idx]
            .predictions
            .entry(entry.method.clone())
            .or_default();
        for name in &entry.names {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }

    table
}

/// Flatten a pivoted table back to one entry per `(record, method)`.
///
/// Methods without an entry for a record produce nothing.
#[must_use]
pub fn unpivot(table: &PredictionTable) -> Vec<FlatPrediction> {
    let mut flat = Vec::new();
    for row in &table.rows {
        for method in &table.methods {
            if let Some(names) = row.get(method) {
                flat.push(FlatPrediction::new(row.key.clone(), method.clone(), names.to_vec()));
            }
        }
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pivot_orders_and_merges() {
        let a = RecordKey::new("G", "orf2", 1);
        let b = RecordKey::new("G", "orf1", 1);
        let flat = vec![
            FlatPrediction::new(a.clone(), "SVM", names(&["Val"])),
            FlatPrediction::new(b.clone(), "ASM", names(&[])),
            FlatPrediction::new(a.clone(), "ASM", names(&["Leu", "Val"])),
            FlatPrediction::new(a.clone(), "SVM", names(&["Val", "Ile"])),
        ];

        let table = pivot(&flat);
        assert_eq!(table.methods, ["SVM", "ASM"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].key, a);
        assert_eq!(table.rows[0].get("SVM").unwrap(), ["Val", "Ile"]);
        assert_eq!(table.rows[0].get("ASM").unwrap(), ["Leu", "Val"]);
        assert_eq!(table.rows[1].get("ASM").unwrap().len(), 0);
        assert!(table.rows[1].get("SVM").is_none());
    }

    #[test]
    fn test_unpivot_then_pivot() {
        let a = RecordKey::new("G", "orf1", 1);
        let b = RecordKey::new("G", "orf1", 2);
        let flat = vec![
            FlatPrediction::new(a.clone(), "pHMM", names(&["Orn"])),
            FlatPrediction::new(b.clone(), "pHMM", names(&[])),
            FlatPrediction::new(b.clone(), "SANDPUMA", names(&["Tyr", "Phe"])),
        ];

        let table = pivot(&flat);
        assert_eq!(unpivot(&table), flat);
        assert_eq!(pivot(&unpivot(&table)), table);
    }
}
