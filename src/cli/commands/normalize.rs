//! Normalize command - show how substrate names are compared

use clap::Parser;

use super::super::output::write_output;

use crate::normalize;

/// Print the normalized form of each substrate name
#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    /// Raw substrate names
    #[arg(required = true, value_name = "LABEL")]
    pub labels: Vec<String>,
}

/// Run `normalize`.
pub fn run(args: NormalizeArgs) -> Result<(), String> {
    let mut out = String::new();
    for raw in &args.labels {
        let label = normalize(raw);
        if label.is_empty() {
            log::warn!("{:?} normalizes to an empty label", raw);
        }
        out.push_str(raw);
        out.push('\t');
        out.push_str(label.as_str());
        out.push('\n');
    }
    write_output(&out, None)
}
