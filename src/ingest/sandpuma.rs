//! SANDPUMA tabular output.
//!
//! SANDPUMA reports one line per A-domain and method, without a header:
//!
//! ```text
//! GCF_0001    orf5_A1    SVM         val|leu
//! GCF_0001    orf5_A1    SANDPUMA    val
//! GCF_0001    orf5_A2    pHMM        None
//! ```
//!
//! Predictions are short names separated by `|` (or `,`). They are expanded
//! through the run's [`SubstrateLookup`], restricted to the configured
//! methods, and pivoted into a [`PredictionTable`].

use super::key::split_locus_module;
use super::pivot::{pivot, FlatPrediction};
use super::table::PredictionTable;
use super::RecordKey;
use crate::{EvalConfig, Error, Result, SubstrateLookup};
use std::io::BufRead;
use std::path::Path;

/// Parse raw SANDPUMA lines into flat predictions (all methods).
pub fn parse_flat<R: BufRead>(
    reader: R,
    lookup: &SubstrateLookup,
    config: &EvalConfig,
) -> Result<Vec<FlatPrediction>> {
    let mut flat = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        flat.push(parse_line(line, lookup, config).map_err(|e| match e {
            Error::Parse(msg) => Error::parse(format!("line {}: {}", idx + 1, msg)),
            Error::MalformedKey(msg) => Error::malformed_key(format!("line {}: {}", idx + 1, msg)),
            other => other,
        })?);
    }
    Ok(flat)
}

fn parse_line(line: &str, lookup: &SubstrateLookup, config: &EvalConfig) -> Result<FlatPrediction> {
    let fields: Vec<&str> = line.split('\t').collect();
    let (genome, fused, method, prediction) = match fields.as_slice() {
        [g, l, m] => (*g, *l, *m, ""),
        [g, l, m, p] => (*g, *l, *m, *p),
        _ => {
            return Err(Error::parse(format!(
                "expected 4 tab-separated fields, got {}",
                fields.len()
            )))
        }
    };

    let (locus, module) =
        split_locus_module(fused.trim(), &config.locus_separator, &config.module_prefix)?;
    let names = split_prediction(prediction)
        .map(|name| lookup.resolve(name).to_string())
        .collect();

    Ok(FlatPrediction::new(
        RecordKey::new(genome.trim(), locus, module),
        method.trim(),
        names,
    ))
}

/// Split a raw prediction field into trimmed names.
///
/// `None`, `nan` and empty fields yield nothing; empty pieces are dropped.
pub fn split_prediction(field: &str) -> impl Iterator<Item = &str> {
    let field = field.trim();
    let field = if matches!(field, "None" | "nan" | "NaN") {
        ""
    } else {
        field
    };
    field
        .split(|c: char| c == '|' || c == ',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Parse SANDPUMA output into a prediction table of the configured methods.
///
/// Method columns follow the order of [`EvalConfig::methods`].
pub fn parse<R: BufRead>(
    reader: R,
    lookup: &SubstrateLookup,
    config: &EvalConfig,
) -> Result<PredictionTable> {
    let flat = parse_flat(reader, lookup, config)?;
    let total = flat.len();

    let valid = config.method_columns();
    let kept: Vec<FlatPrediction> = flat
        .into_iter()
        .filter(|entry| valid.contains(&entry.method.as_str()))
        .collect();
    if kept.len() < total {
        log::debug!(
            "Dropped {} SANDPUMA lines for methods outside {:?}",
            total - kept.len(),
            valid
        );
    }

    let mut table = pivot(&kept);
    table
        .methods
        .sort_by_key(|m| valid.iter().position(|v| v == m));
    Ok(table)
}

/// Read a SANDPUMA output file.
pub fn read(
    path: impl AsRef<Path>,
    lookup: &SubstrateLookup,
    config: &EvalConfig,
) -> Result<PredictionTable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let table = parse(std::io::BufReader::new(file), lookup, config)?;
    log::info!(
        "Parsed {} A-domains from {} ({} methods)",
        table.len(),
        path.display(),
        table.methods.len()
    );
    Ok(table)
}
