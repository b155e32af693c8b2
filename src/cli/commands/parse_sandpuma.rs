//! Parse-sandpuma command - raw SANDPUMA output to a prediction table

use clap::Parser;
use std::path::PathBuf;

use super::super::output::write_output;
use super::super::utils::{load_config, load_lookup, require_file};

use crate::ingest::{sandpuma, tsv};

/// Convert raw SANDPUMA output into a pivoted prediction TSV
#[derive(Parser, Debug)]
pub struct ParseSandpumaArgs {
    /// SANDPUMA output (genomic_id, locus_A<n>, method, prediction; no header)
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Short-name → full-name lookup table (overrides the config)
    #[arg(short, long, value_name = "PATH")]
    pub lookup: Option<PathBuf>,

    /// TOML config (methods, key grammar, lookup)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the table here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Run `parse-sandpuma`.
pub fn run(args: ParseSandpumaArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let lookup = load_lookup(args.lookup.as_deref(), &config, args.config.as_deref())?
        .unwrap_or_default();
    if lookup.is_empty() {
        log::warn!("No lookup table given; short names are kept as-is");
    }

    require_file(&args.input, "SANDPUMA output")?;
    let table = sandpuma::read(&args.input, &lookup, &config).map_err(|e| e.to_string())?;
    write_output(&tsv::format_prediction_table(&table), args.output.as_deref())
}

