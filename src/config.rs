//! Evaluation run configuration.
//!
//! Loaded from TOML; every field has a default, so an empty file is valid.
//!
//! ```toml
//! decimals = 5
//! substrate_column = "substrate"
//! module_prefix = "A"
//! locus_separator = "_"
//! lookup = "specificities_dict.txt"
//!
//! [[methods]]
//! column = "SANDPUMA"
//! display_name = "SANDPUMA (Ensemble)"
//!
//! [[methods]]
//! column = "pHMM"
//! display_name = "NRPSsp (pHMM)"
//! ```

use crate::eval::DEFAULT_DECIMALS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Largest rounding precision accepted; beyond this f64 has no digits left.
const MAX_DECIMALS: u32 = 15;

/// A prediction method: its column in the prediction table and the name
/// used in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    /// Column / method name as it appears in tool output
    pub column: String,
    /// Name shown in the comparison table
    pub display_name: String,
}

impl MethodSpec {
    /// Create a method spec.
    pub fn new(column: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            display_name: display_name.into(),
        }
    }
}

/// Settings for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// Decimal places for reported scores
    pub decimals: u32,
    /// Ground-truth column holding the substrate name
    pub substrate_column: String,
    /// Non-numeric tag before the module number (`A` in `A3`)
    pub module_prefix: String,
    /// Separator between locus tag and module tag (`_` in `orf5_A3`)
    pub locus_separator: String,
    /// Optional short-name → full-name lookup file
    pub lookup: Option<PathBuf>,
    /// Methods to evaluate, in report order
    pub methods: Vec<MethodSpec>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            substrate_column: "substrate".to_string(),
            module_prefix: "A".to_string(),
            locus_separator: "_".to_string(),
            lookup: None,
            methods: vec![
                MethodSpec::new("SANDPUMA", "SANDPUMA (Ensemble)"),
                MethodSpec::new("pHMM", "NRPSsp (pHMM)"),
                MethodSpec::new("ASM", "NRPSPredictor2 (ASM)"),
                MethodSpec::new("SVM", "NRPSPredictor2 (SVM)"),
            ],
        }
    }
}

impl EvalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        log::debug!(
            "Loaded config from {} ({} methods)",
            path.display(),
            config.methods.len()
        );
        Ok(config)
    }

    /// Check invariants the rest of the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(Error::config(format!(
                "decimals must be at most {}, got {}",
                MAX_DECIMALS, self.decimals
            )));
        }
        if self.locus_separator.is_empty() {
            return Err(Error::config("locus_separator cannot be empty"));
        }
        if self.substrate_column.is_empty() {
            return Err(Error::config("substrate_column cannot be empty"));
        }
        if self.methods.is_empty() {
            return Err(Error::config("at least one method is required"));
        }

        let mut columns = HashSet::new();
        let mut names = HashSet::new();
        for spec in &self.methods {
            if spec.column.is_empty() {
                return Err(Error::config("method column cannot be empty"));
            }
            if !columns.insert(spec.column.as_str()) {
                return Err(Error::config(format!("duplicate method column: {}", spec.column)));
            }
            // Report rows are keyed by display name
            if !names.insert(spec.display_name.as_str()) {
                return Err(Error::config(format!(
                    "duplicate method display name: {}",
                    spec.display_name
                )));
            }
        }
        Ok(())
    }

    /// Method column names in report order.
    #[must_use]
    pub fn method_columns(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.column.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EvalConfig::default();
        assert_eq!(config.decimals, 5);
        assert_eq!(
            config.method_columns(),
            ["SANDPUMA", "pHMM", "ASM", "SVM"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = EvalConfig::from_toml_str("").unwrap();
        assert_eq!(config, EvalConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = EvalConfig::from_toml_str(
            r#"
            decimals = 3
            lookup = "names.txt"

            [[methods]]
            column = "minowa"
            display_name = "Minowa"
            "#,
        )
        .unwrap();

        assert_eq!(config.decimals, 3);
        assert_eq!(config.lookup, Some(PathBuf::from("names.txt")));
        assert_eq!(config.methods, vec![MethodSpec::new("minowa", "Minowa")]);
        assert_eq!(config.module_prefix, "A");
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = EvalConfig::from_toml_str("decimal = 3").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_duplicate_methods() {
        let err = EvalConfig::from_toml_str(
            r#"
            [[methods]]
            column = "SVM"
            display_name = "a"

            [[methods]]
            column = "SVM"
            display_name = "b"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate method column"));
    }

    #[test]
    fn test_rejects_duplicate_display_names() {
        let config = EvalConfig {
            methods: vec![
                MethodSpec::new("ASM", "NRPSPredictor2"),
                MethodSpec::new("SVM", "NRPSPredictor2"),
            ],
            ..EvalConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("NRPSPredictor2")));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(EvalConfig::from_toml_str("decimals = 16").is_err());
        assert!(EvalConfig::from_toml_str("locus_separator = \"\"").is_err());
        assert!(EvalConfig::from_toml_str("methods = []").is_err());
    }
}
