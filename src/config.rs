use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::models::Config;

/// Relative path both binaries read their configuration from.
pub const CONFIG_FILE: &str = "config.json";

/// Load the run configuration from a JSON file.
///
/// A missing or unreadable file and malformed JSON are both reported as
/// [`AppError::Config`]. Key presence is checked later, by whichever pipeline
/// needs the key.
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    let config: Config = serde_json::from_str(&raw).map_err(|e| {
        AppError::Config(format!("'{}' is not valid JSON: {}", path.display(), e))
    })?;

    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
