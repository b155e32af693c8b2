//! Composite record keys.
//!
//! Every A-domain is identified by `(genome, locus tag, module)`. Tool output
//! often fuses the last two (`ctg1_orf5_A2`); the grammar accepted here is
//!
//! ```text
//! fused  := locus SEP module
//! module := PREFIX DIGIT+
//! ```
//!
//! where the split happens at the rightmost `SEP`. Anything else is rejected
//! with [`Error::MalformedKey`] instead of being truncated.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one evaluated A-domain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    /// Genome / assembly identifier
    pub genome_id: String,
    /// Locus tag of the NRPS gene
    pub locus_tag: String,
    /// A-domain (module) index within the gene
    pub module: u32,
}

impl RecordKey {
    /// Create a record key.
    pub fn new(genome_id: impl Into<String>, locus_tag: impl Into<String>, module: u32) -> Self {
        Self {
            genome_id: genome_id.into(),
            locus_tag: locus_tag.into(),
            module,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.genome_id, self.locus_tag, self.module)
    }
}

/// Parse a module tag such as `A3` (with `prefix = "A"`) into its index.
///
/// ```rust
/// use adomain_eval::ingest::key::parse_module;
///
/// assert_eq!(parse_module("A12", "A").unwrap(), 12);
/// assert!(parse_module("B1", "A").is_err());
/// assert!(parse_module("A1x", "A").is_err());
/// ```
pub fn parse_module(tag: &str, prefix: &str) -> Result<u32> {
    let digits = tag.strip_prefix(prefix).ok_or_else(|| {
        Error::malformed_key(format!("module tag {:?} does not start with {:?}", tag, prefix))
    })?;
    parse_index(digits).ok_or_else(|| {
        Error::malformed_key(format!(
            "module tag {:?}: expected digits after {:?}, got {:?}",
            tag, prefix, digits
        ))
    })
}

/// Parse a bare numeric module cell (`"3"`).
pub fn parse_module_number(cell: &str) -> Result<u32> {
    let cell = cell.trim();
    parse_index(cell)
        .ok_or_else(|| Error::malformed_key(format!("module {:?} is not a non-negative integer", cell)))
}

/// Split a fused `locus<SEP><PREFIX><n>` tag from the right.
///
/// ```rust
/// use adomain_eval::ingest::key::split_locus_module;
///
/// let (locus, module) = split_locus_module("ctg1_orf5_A2", "_", "A").unwrap();
/// assert_eq!(locus, "ctg1_orf5");
/// assert_eq!(module, 2);
/// ```
pub fn split_locus_module(raw: &str, separator: &str, prefix: &str) -> Result<(String, u32)> {
    let (locus, tag) = raw.rsplit_once(separator).ok_or_else(|| {
        Error::malformed_key(format!("{:?} has no {:?} before the module tag", raw, separator))
    })?;
    if locus.is_empty() {
        return Err(Error::malformed_key(format!("{:?} has an empty locus tag", raw)));
    }
    let module = parse_module(tag, prefix)?;
    Ok((locus.to_string(), module))
}

// `u32::from_str` accepts a leading '+'; the grammar is digits only.
fn parse_index(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module() {
        assert_eq!(parse_module("A1", "A").unwrap(), 1);
        assert_eq!(parse_module("A007", "A").unwrap(), 7);
        assert_eq!(parse_module("12", "").unwrap(), 12);
        assert_eq!(parse_module("mod3", "mod").unwrap(), 3);
    }

    #[test]
    fn test_parse_module_rejects() {
        for tag in ["A", "A+1", "A-1", "A1.0", "a1", "1", "A 1", "A99999999999"] {
            let err = parse_module(tag, "A").unwrap_err();
            assert!(matches!(err, Error::MalformedKey(_)), "accepted {tag:?}");
        }
    }

    #[test]
    fn test_parse_module_number() {
        assert_eq!(parse_module_number(" 4 ").unwrap(), 4);
        assert!(parse_module_number("4.0").is_err());
        assert!(parse_module_number("").is_err());
    }

    #[test]
    fn test_split_from_right() {
        let (locus, module) = split_locus_module("NRPS_orf_1_A10", "_", "A").unwrap();
        assert_eq!(locus, "NRPS_orf_1");
        assert_eq!(module, 10);
    }

    #[test]
    fn test_split_rejects() {
        assert!(split_locus_module("orf5A1", "_", "A").is_err());
        assert!(split_locus_module("_A1", "_", "A").is_err());
        assert!(split_locus_module("orf5_", "_", "A").is_err());
        assert!(split_locus_module("orf5_C1", "_", "A").is_err());
    }

    #[test]
    fn test_record_key_display() {
        assert_eq!(RecordKey::new("GCF_1", "orf5", 2).to_string(), "GCF_1/orf5/2");
    }
}
