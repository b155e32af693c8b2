//! CLI library modules for the adomain-eval binary.
//!
//! Kept in the library so argument parsing and commands can be tested
//! without spawning the binary.

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use parser::{Cli, Commands, OutputFormat};

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run(args),
        Commands::ParseSandpuma(args) => commands::parse_sandpuma::run(args),
        Commands::Normalize(args) => commands::normalize::run(args),
    }
}

/// Log level for a `-v` count.
#[must_use]
pub fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}
