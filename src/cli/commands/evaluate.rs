//! Evaluate command - score every configured method against the ground truth

use clap::Parser;
use std::path::PathBuf;

use super::super::output::write_output;
use super::super::parser::OutputFormat;
use super::super::utils::{load_config, load_lookup, require_file};

use crate::ingest::{align, tsv};
use crate::{compare_aligned, ComparisonTable, LabelNormalizer};

/// Score prediction methods against a curated ground truth
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Ground-truth TSV (genomic_id, locus_tag, module, substrate)
    #[arg(short, long, value_name = "PATH")]
    pub ground_truth: PathBuf,

    /// Prediction TSV with one list-literal column per method
    #[arg(short, long, value_name = "PATH")]
    pub predictions: PathBuf,

    /// TOML config (methods, columns, lookup)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Short-name → full-name lookup table (overrides the config)
    #[arg(short, long, value_name = "PATH")]
    pub lookup: Option<PathBuf>,

    /// Decimal places in the report (overrides the config)
    #[arg(short, long, value_name = "N")]
    pub decimals: Option<u32>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Run `evaluate`.
pub fn run(args: EvaluateArgs) -> Result<(), String> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(decimals) = args.decimals {
        config.decimals = decimals;
        config.validate().map_err(|e| e.to_string())?;
    }
    let lookup = load_lookup(args.lookup.as_deref(), &config, args.config.as_deref())?;

    require_file(&args.ground_truth, "Ground truth")?;
    require_file(&args.predictions, "Predictions")?;
    let ground_truth =
        tsv::read_ground_truth(&args.ground_truth, &config).map_err(|e| e.to_string())?;
    let predictions = tsv::read_prediction_table(&args.predictions).map_err(|e| e.to_string())?;

    let aligned = align(
        &ground_truth,
        &predictions,
        &config.method_columns(),
        LabelNormalizer::new(lookup.as_ref()),
    )
    .map_err(|e| e.to_string())?;

    let table = compare_aligned(&aligned, &config);
    if table.num_failed() == table.len() {
        log::warn!("No method could be scored");
    }
    write_output(&render(&table, args.format)?, args.output.as_deref())
}

fn render(table: &ComparisonTable, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Tsv => Ok(table.to_tsv()),
        OutputFormat::Markdown => Ok(table.to_markdown()),
        OutputFormat::Json => table.to_json().map_err(|e| e.to_string()),
    }
}
