//! Shared loading steps for CLI commands

use std::path::{Path, PathBuf};

use crate::{EvalConfig, SubstrateLookup};

/// Fail early with a readable message when an input file is missing.
pub fn require_file(path: &Path, what: &str) -> Result<(), String> {
    if path.is_file() {
        Ok(())
    } else {
        Err(format!("{} file not found: {}", what, path.display()))
    }
}

/// Load the config file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<EvalConfig, String> {
    match path {
        Some(path) => {
            require_file(path, "Config")?;
            EvalConfig::from_path(path).map_err(|e| e.to_string())
        }
        None => Ok(EvalConfig::default()),
    }
}

/// Resolve which lookup table to use.
///
/// `--lookup` wins over the config's `lookup`. A relative path in the config
/// is taken relative to the config file's directory.
pub fn lookup_path(
    cli: Option<&Path>,
    config: &EvalConfig,
    config_path: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = cli {
        return Some(path.to_path_buf());
    }
    let path = config.lookup.as_deref()?;
    match config_path.and_then(Path::parent) {
        Some(dir) if path.is_relative() => Some(dir.join(path)),
        _ => Some(path.to_path_buf()),
    }
}

/// Load the lookup table, if one is configured.
pub fn load_lookup(
    cli: Option<&Path>,
    config: &EvalConfig,
    config_path: Option<&Path>,
) -> Result<Option<SubstrateLookup>, String> {
    let Some(path) = lookup_path(cli, config, config_path) else {
        return Ok(None);
    };
    require_file(&path, "Lookup")?;
    let lookup = SubstrateLookup::from_path(&path).map_err(|e| e.to_string())?;
    log::info!("Loaded {} lookup entries from {}", lookup.len(), path.display());
    Ok(Some(lookup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_path_precedence() {
        let mut config = EvalConfig::default();
        assert_eq!(lookup_path(None, &config, None), None);

        config.lookup = Some(PathBuf::from("short.txt"));
        assert_eq!(
            lookup_path(None, &config, Some(Path::new("/data/run/eval.toml"))),
            Some(PathBuf::from("/data/run/short.txt"))
        );
        assert_eq!(
            lookup_path(Some(Path::new("other.txt")), &config, None),
            Some(PathBuf::from("other.txt"))
        );

        config.lookup = Some(PathBuf::from("/abs/short.txt"));
        assert_eq!(
            lookup_path(None, &config, Some(Path::new("/data/eval.toml"))),
            Some(PathBuf::from("/abs/short.txt"))
        );
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Some(Path::new("/nonexistent/eval.toml"))).unwrap_err();
        assert!(err.contains("not found"));
    }
}
