//! Substrate label normalization.
//!
//! Prediction tools and curated datasets spell the same substrate many ways
//! (`"D-Val"`, `"d val"`, `"Val."`). Everything is compared through [`Label`],
//! the canonical key produced by [`normalize`].
//!
//! Short tool-specific names (SANDPUMA emits `"val"`, `"orn"`, ...) can be
//! expanded first through a [`SubstrateLookup`], which is an explicit value
//! scoped to one evaluation run:
//!
//! ```rust
//! use adomain_eval::{normalize, LabelNormalizer, SubstrateLookup};
//!
//! let mut lookup = SubstrateLookup::new();
//! lookup.add("orn", "Ornithine");
//!
//! let normalizer = LabelNormalizer::new(Some(&lookup));
//! assert_eq!(normalizer.label("orn"), normalize("ornithine"));
//! assert_eq!(normalizer.label("Val ine!"), normalize("valine"));
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::io::BufRead;
use std::path::Path;

/// Canonical substrate class key.
///
/// Only [`normalize`] constructs one, so two labels are equal exactly when
/// their raw strings agree after whitespace/punctuation removal and case
/// folding. The empty label is a valid class of its own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// The normalized key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label normalized to the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalize a raw substrate name.
///
/// Strips whitespace, then anything that is neither alphanumeric nor
/// whitespace, then lowercases.
///
/// ```rust
/// use adomain_eval::normalize;
///
/// assert_eq!(normalize("Val   ine!"), normalize("valine"));
/// assert_eq!(normalize("beta-Ala").as_str(), "betaala");
/// assert!(normalize("--").is_empty());
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Label {
    let no_space: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    // Per-char lowercasing can expand into combining marks (e.g. 'İ'),
    // which the final filter drops so the result stays a fixed point.
    let cleaned: String = no_space
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect();
    Label(cleaned)
}

/// Candidate labels one method produced for one record.
///
/// Empty means the method made no call. Order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionSet(BTreeSet<Label>);

impl PredictionSet {
    /// An empty set (no prediction).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `label` is among the candidates.
    #[must_use]
    pub fn contains(&self, label: &Label) -> bool {
        self.0.contains(label)
    }

    /// Add a candidate.
    pub fn insert(&mut self, label: Label) -> bool {
        self.0.insert(label)
    }

    /// Number of distinct candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no prediction was made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate candidates in label order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.0.iter()
    }
}

impl FromIterator<Label> for PredictionSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Short name → full substrate name table.
///
/// Loaded from a two-column, tab-separated file (`short<TAB>full`).
/// Unknown names resolve to themselves.
#[derive(Debug, Clone, Default)]
pub struct SubstrateLookup {
    names: HashMap<String, String>,
}

impl SubstrateLookup {
    /// Create an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping, replacing any previous full name for `short`.
    pub fn add(&mut self, short: impl Into<String>, full: impl Into<String>) {
        self.names.insert(short.into(), full.into());
    }

    /// Parse `short<TAB>full` lines. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lookup = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            match fields.as_slice() {
                [short, full] => lookup.add(short.trim(), full.trim()),
                _ => {
                    return Err(Error::parse(format!(
                        "lookup line {}: expected 2 tab-separated fields, got {}",
                        idx + 1,
                        fields.len()
                    )))
                }
            }
        }
        Ok(lookup)
    }

    /// Load a lookup file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let lookup = Self::from_reader(std::io::BufReader::new(file))?;
        log::debug!("Loaded {} substrate names from {}", lookup.len(), path.display());
        Ok(lookup)
    }

    /// Full name for `raw`, or `raw` itself when unknown.
    #[must_use]
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.names.get(raw).map_or(raw, String::as_str)
    }

    /// Number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Raw string → (optional lookup) → [`Label`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelNormalizer<'a> {
    lookup: Option<&'a SubstrateLookup>,
}

impl<'a> LabelNormalizer<'a> {
    /// Create a normalizer, optionally expanding short names first.
    #[must_use]
    pub fn new(lookup: Option<&'a SubstrateLookup>) -> Self {
        Self { lookup }
    }

    /// Normalize one raw name.
    #[must_use]
    pub fn label(&self, raw: &str) -> Label {
        match self.lookup {
            Some(lookup) => normalize(lookup.resolve(raw)),
            None => normalize(raw),
        }
    }

    /// Normalize a list of raw candidate names into a set.
    pub fn prediction_set<I, S>(&self, raws: I) -> PredictionSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raws.into_iter().map(|raw| self.label(raw.as_ref())).collect()
    }
}
