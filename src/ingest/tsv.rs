//! Tab-separated ground-truth and prediction tables.
//!
//! # Ground truth
//!
//! ```text
//! genomic_id   locus_tag   module  substrate   ...
//! GCF_0001     orf5        1       Valine
//! ```
//!
//! Extra columns are ignored; the substrate column name is configurable.
//!
//! # Predictions
//!
//! ```text
//! genomic_id   locus_tag   module  ASM            SANDPUMA
//! GCF_0001     orf5        1       ['Valine']     ['Valine', 'Leucine']
//! GCF_0001     orf5        2       []
//! ```
//!
//! Every non-key column is a method. Cells are list literals; an empty,
//! `nan` or `None` cell means the method has no entry for that record.

use super::key::parse_module_number;
use super::table::{GroundTruthTable, PredictionRow, PredictionTable};
use super::RecordKey;
use crate::{EvalConfig, Error, Result};
use std::fmt::Write as _;
use std::io::BufRead;
use std::path::Path;

/// Key column names shared by both tables.
pub const KEY_COLUMNS: [&str; 3] = ["genomic_id", "locus_tag", "module"];

/// Cell values that mean "no value".
const MISSING: [&str; 4] = ["", "nan", "NaN", "None"];

struct Header {
    columns: Vec<String>,
}

impl Header {
    fn parse(line: &str) -> Self {
        Self {
            columns: split_row(line),
        }
    }

    fn index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::dataset(format!("missing column {:?}", name)))
    }
}

/// Split a TSV line, removing CSV-style quotes around fields.
fn split_row(line: &str) -> Vec<String> {
    line.split('\t').map(unquote_field).collect()
}

fn unquote_field(field: &str) -> String {
    let field = field.trim_end_matches('\r');
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        field[1..field.len() - 1].replace("\"\"", "\"")
    } else {
        field.to_string()
    }
}

fn quote_field(field: &str) -> String {
    if field.contains(|c: char| matches!(c, '\t' | '"' | '\n')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Non-blank lines with their 1-based line numbers.
fn data_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(Ok((idx + 1, line))),
            Err(e) => Some(Err(Error::from(e))),
        })
}

fn cell<'a>(fields: &'a [String], idx: usize, line_no: usize, name: &str) -> Result<&'a str> {
    fields.get(idx).map(String::as_str).ok_or_else(|| {
        Error::parse(format!("line {}: missing value for column {:?}", line_no, name))
    })
}

fn read_key(fields: &[String], idx: [usize; 3], line_no: usize) -> Result<RecordKey> {
    let genome = cell(fields, idx[0], line_no, KEY_COLUMNS[0])?;
    let locus = cell(fields, idx[1], line_no, KEY_COLUMNS[1])?;
    let module = cell(fields, idx[2], line_no, KEY_COLUMNS[2])?;
    let module =
        parse_module_number(module).map_err(|e| with_context(e, format!("line {}", line_no)))?;
    Ok(RecordKey::new(genome.trim(), locus.trim(), module))
}

/// Parse a ground-truth TSV.
pub fn parse_ground_truth<R: BufRead>(reader: R, config: &EvalConfig) -> Result<GroundTruthTable> {
    let mut lines = data_lines(reader);
    let header = match lines.next() {
        Some(line) => Header::parse(&line?.1),
        None => return Err(Error::dataset("ground truth file is empty")),
    };
    let key_idx = [
        header.index(KEY_COLUMNS[0])?,
        header.index(KEY_COLUMNS[1])?,
        header.index(KEY_COLUMNS[2])?,
    ];
    let substrate_idx = header.index(&config.substrate_column)?;

    let mut table = GroundTruthTable::new();
    for line in lines {
        let (line_no, line) = line?;
        let fields = split_row(&line);
        let key = read_key(&fields, key_idx, line_no)?;
        let substrate = cell(&fields, substrate_idx, line_no, &config.substrate_column)?;
        table.push(key, substrate);
    }
    Ok(table)
}

/// Parse a pivoted prediction TSV.
pub fn parse_prediction_table<R: BufRead>(reader: R) -> Result<PredictionTable> {
    let mut lines = data_lines(reader);
    let header = match lines.next() {
        Some(line) => Header::parse(&line?.1),
        None => return Err(Error::dataset("prediction file is empty")),
    };
    let key_idx = [
        header.index(KEY_COLUMNS[0])?,
        header.index(KEY_COLUMNS[1])?,
        header.index(KEY_COLUMNS[2])?,
    ];
    let method_idx: Vec<(usize, &String)> = header
        .columns
        .iter()
        .enumerate()
        .filter(|(i, _)| !key_idx.contains(i))
        .collect();

    let mut table = PredictionTable::with_methods(method_idx.iter().map(|(_, m)| m.as_str()));
    for line in lines {
        let (line_no, line) = line?;
        let fields = split_row(&line);
        let mut row = PredictionRow::new(read_key(&fields, key_idx, line_no)?);
        for (idx, method) in &method_idx {
            let raw = fields.get(*idx).map_or("", String::as_str);
            let parsed = parse_list_literal(raw)
                .map_err(|e| with_context(e, format!("line {}, column {:?}", line_no, method)))?;
            if let Some(names) = parsed {
                row.predictions.insert((*method).clone(), names);
            }
        }
        table.rows.push(row);
    }
    Ok(table)
}

/// Read a ground-truth TSV file.
pub fn read_ground_truth(path: impl AsRef<Path>, config: &EvalConfig) -> Result<GroundTruthTable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let table = parse_ground_truth(std::io::BufReader::new(file), config)
        .map_err(|e| with_context(e, path.display()))?;
    log::info!("Loaded {} ground-truth records from {}", table.len(), path.display());
    Ok(table)
}

/// Read a prediction TSV file.
pub fn read_prediction_table(path: impl AsRef<Path>) -> Result<PredictionTable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let table = parse_prediction_table(std::io::BufReader::new(file))
        .map_err(|e| with_context(e, path.display()))?;
    log::info!(
        "Loaded {} prediction records ({} methods) from {}",
        table.len(),
        table.methods.len(),
        path.display()
    );
    Ok(table)
}

/// Prefix the message of a parse-level error with where it happened.
fn with_context(err: Error, context: impl std::fmt::Display) -> Error {
    match err {
        Error::Parse(msg) => Error::parse(format!("{}: {}", context, msg)),
        Error::Dataset(msg) => Error::dataset(format!("{}: {}", context, msg)),
        Error::MalformedKey(msg) => Error::malformed_key(format!("{}: {}", context, msg)),
        other => other,
    }
}

/// Render a prediction table as TSV (key columns, then one per method).
#[must_use]
pub fn format_prediction_table(table: &PredictionTable) -> String {
    let mut out = String::new();
    let header: Vec<String> = KEY_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(table.methods.iter().map(|m| quote_field(m)))
        .collect();
    let _ = writeln!(out, "{}", header.join("\t"));

    for row in &table.rows {
        let mut fields = vec![
            quote_field(&row.key.genome_id),
            quote_field(&row.key.locus_tag),
            row.key.module.to_string(),
        ];
        for method in &table.methods {
            fields.push(match row.get(method) {
                Some(names) => quote_field(&format_list_literal(names)),
                None => String::new(),
            });
        }
        let _ = writeln!(out, "{}", fields.join("\t"));
    }
    out
}

/// Write a prediction table to disk.
pub fn write_prediction_table(path: impl AsRef<Path>, table: &PredictionTable) -> Result<()> {
    std::fs::write(path, format_prediction_table(table))?;
    Ok(())
}

/// Parse a list literal such as `['Valine', "D-Leu"]`.
///
/// Returns `None` for a missing cell (empty, `nan`, `None`).
///
/// ```rust
/// use adomain_eval::ingest::tsv::parse_list_literal;
///
/// assert_eq!(
///     parse_list_literal("['Val', \"Leu\"]").unwrap(),
///     Some(vec!["Val".to_string(), "Leu".to_string()])
/// );
/// assert_eq!(parse_list_literal("[]").unwrap(), Some(vec![]));
/// assert_eq!(parse_list_literal("nan").unwrap(), None);
/// assert!(parse_list_literal("['Val'").is_err());
/// ```
pub fn parse_list_literal(raw: &str) -> Result<Option<Vec<String>>> {
    let raw = raw.trim();
    if MISSING.contains(&raw) {
        return Ok(None);
    }
    let inner = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| Error::parse(format!("expected a [...] list, got {:?}", raw)))?;

    let mut names = Vec::new();
    let mut chars = inner.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let quote = match chars.next() {
            None => break,
            Some(q @ ('\'' | '"')) => q,
            Some(c) => {
                return Err(Error::parse(format!("expected a quoted string, found {:?}", c)))
            }
        };

        let mut name = String::new();
        loop {
            match chars.next() {
                None => return Err(Error::parse(format!("unterminated string in {:?}", raw))),
                Some('\\') => match chars.next() {
                    Some('n') => name.push('\n'),
                    Some('t') => name.push('\t'),
                    Some(c) => name.push(c),
                    None => {
                        return Err(Error::parse(format!("dangling escape in {:?}", raw)))
                    }
                },
                Some(c) if c == quote => break,
                Some(c) => name.push(c),
            }
        }
        names.push(name);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(c) => return Err(Error::parse(format!("expected ',' or ']', found {:?}", c))),
        }
    }
    Ok(Some(names))
}

/// Render names as a single-quoted list literal.
#[must_use]
pub fn format_list_literal(names: &[String]) -> String {
    let items: Vec<String> = names
        .iter()
        .map(|name| {
            let escaped = name
                .replace('\\', "\\\\")
                .replace('\'', "\\'")
                .replace('\n', "\\n")
                .replace('\t', "\\t");
            format!("'{}'", escaped)
        })
        .collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND_TRUTH: &str = "\
genomic_id\tlocus_tag\tmodule\tsubstrate\tnote
GCF_1\torf5\t1\tValine\tx
GCF_1\torf5\t2\tD-Leucine\t

GCF_2\torf1\t1\tTyr\ty
";

    const PREDICTIONS: &str = "\
genomic_id\tlocus_tag\tmodule\tASM\tSANDPUMA
GCF_1\torf5\t1\t['val']\t['Valine', 'Leucine']
GCF_1\torf5\t2\t[]\tnan
GCF_2\torf1\t1\t\"['tyr', \"\"it's\"\"]\"\t
";

    #[test]
    fn test_parse_ground_truth() {
        let table = parse_ground_truth(GROUND_TRUTH.as_bytes(), &EvalConfig::default()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[1].key, RecordKey::new("GCF_1", "orf5", 2));
        assert_eq!(table.rows[1].substrate, "D-Leucine");
        assert_eq!(table.rows[2].substrate, "Tyr");
    }

    #[test]
    fn test_ground_truth_missing_column() {
        let data = "genomic_id\tlocus_tag\tmodule\tsubstrate_name\nG\tL\t1\tVal\n";
        let err = parse_ground_truth(data.as_bytes(), &EvalConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Dataset(ref msg) if msg.contains("substrate")));
    }

    #[test]
    fn test_ground_truth_bad_module() {
        let data = "genomic_id\tlocus_tag\tmodule\tsubstrate\nG\tL\tA1\tVal\n";
        let err = parse_ground_truth(data.as_bytes(), &EvalConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedKey(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_parse_prediction_table() {
        let table = parse_prediction_table(PREDICTIONS.as_bytes()).unwrap();
        assert_eq!(table.methods, ["ASM", "SANDPUMA"]);
        assert_eq!(table.len(), 3);

        let first = &table.rows[0];
        assert_eq!(first.get("SANDPUMA").unwrap(), ["Valine", "Leucine"]);

        let second = &table.rows[1];
        assert_eq!(second.get("ASM").unwrap().len(), 0);
        assert!(second.get("SANDPUMA").is_none());

        let third = &table.rows[2];
        assert_eq!(third.get("ASM").unwrap(), ["tyr", "it's"]);
        assert!(third.get("SANDPUMA").is_none());
    }

    #[test]
    fn test_prediction_table_bad_cell() {
        let data = "genomic_id\tlocus_tag\tmodule\tASM\nG\tL\t1\tValine\n";
        let err = parse_prediction_table(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_prediction_table_write_read() {
        let table = parse_prediction_table(PREDICTIONS.as_bytes()).unwrap();
        let written = format_prediction_table(&table);
        let reread = parse_prediction_table(written.as_bytes()).unwrap();
        assert_eq!(reread, table);
    }

    #[test]
    fn test_parse_list_literal() {
        assert_eq!(parse_list_literal("").unwrap(), None);
        assert_eq!(parse_list_literal("None").unwrap(), None);
        assert_eq!(parse_list_literal(" [ ] ").unwrap(), Some(vec![]));
        assert_eq!(
            parse_list_literal("['a' , \"b\",'c\\'d']").unwrap(),
            Some(vec!["a".into(), "b".into(), "c'd".into()])
        );
        assert_eq!(
            parse_list_literal("['2,3-dihydroxybenzoic acid']").unwrap(),
            Some(vec!["2,3-dihydroxybenzoic acid".into()])
        );
    }

    #[test]
    fn test_parse_list_literal_rejects() {
        for bad in ["Val", "['a'", "['a' 'b']", "[a]", "['a',]x", "['a\\"] {
            assert!(parse_list_literal(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_format_list_literal() {
        let names = vec!["Val".to_string(), "it's".to_string(), "a\\b".to_string()];
        let literal = format_list_literal(&names);
        assert_eq!(literal, r"['Val', 'it\'s', 'a\\b']");
        assert_eq!(parse_list_literal(&literal).unwrap(), Some(names));
    }
}
