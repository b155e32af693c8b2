//! adomain-eval - A-domain substrate prediction benchmarking
//!
//! # Usage
//!
//! ```bash
//! # Pivot raw SANDPUMA output, expanding short substrate names
//! adomain-eval parse-sandpuma -i sandpuma.tsv -l short_to_full.txt -o predictions.tsv
//!
//! # Micro-averaged precision / recall / F1 per method
//! adomain-eval evaluate -g benchmark.tsv -p predictions.tsv
//!
//! # Check how names are compared
//! adomain-eval normalize "D-Leucine" "d leucine"
//! ```

use std::process::ExitCode;

use adomain_eval::cli::{self, Cli};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli::log_level(cli.verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
