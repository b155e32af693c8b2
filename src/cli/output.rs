//! Output helpers for CLI commands

use std::io::{self, Write};
use std::path::Path;

/// Write output to file or stdout
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), String> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write to {}: {}", path.display(), e))?;
        log::info!("Wrote {}", path.display());
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| format!("Failed to write to stdout: {}", e))?;
    }
    Ok(())
}
