//! CLI argument parsing and structure definitions

use clap::{Parser, Subcommand, ValueEnum};

use super::commands::{EvaluateArgs, NormalizeArgs, ParseSandpumaArgs};

/// A-domain substrate prediction benchmarking
#[derive(Parser, Debug)]
#[command(name = "adomain-eval")]
#[command(
    author,
    version,
    about = "Micro-averaged benchmarking of A-domain substrate predictors",
    long_about = r#"
adomain-eval - benchmark A-domain substrate specificity predictors

Compares the predictions of several methods (SANDPUMA, NRPSsp, NRPSPredictor2, ...)
against a curated ground truth and reports micro-averaged precision, recall and F1.

EXAMPLES:
  adomain-eval parse-sandpuma --input sandpuma.tsv --lookup short_to_full.txt -o predictions.tsv
  adomain-eval evaluate --ground-truth benchmark.tsv --predictions predictions.tsv
  adomain-eval evaluate -g benchmark.tsv -p predictions.tsv --format markdown
  adomain-eval normalize "D-Leucine" "2,3-DHB"
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every configured method against the ground truth
    #[command(visible_alias = "e")]
    Evaluate(EvaluateArgs),

    /// Convert raw SANDPUMA output into a prediction table
    #[command(visible_alias = "p")]
    ParseSandpuma(ParseSandpumaArgs),

    /// Print the normalized form of substrate names
    #[command(visible_alias = "n")]
    Normalize(NormalizeArgs),
}

/// Report format for `evaluate`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated values (default)
    #[default]
    Tsv,
    /// Markdown table
    Markdown,
    /// JSON report
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_evaluate() {
        let cli = Cli::try_parse_from([
            "adomain-eval",
            "-vv",
            "evaluate",
            "-g",
            "gt.tsv",
            "-p",
            "preds.tsv",
            "--format",
            "markdown",
            "--decimals",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Evaluate(args) => {
                assert_eq!(args.format, OutputFormat::Markdown);
                assert_eq!(args.decimals, Some(3));
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_normalize_requires_labels() {
        assert!(Cli::try_parse_from(["adomain-eval", "normalize"]).is_err());
    }
}
