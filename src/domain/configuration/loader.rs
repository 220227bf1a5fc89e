//! Configuration file discovery and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppConfig, AppError};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "escribe.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ESCRIBE_CONFIG";

/// Resolve which config file applies, if any.
///
/// Precedence: explicit path, then `ESCRIBE_CONFIG`, then `./escribe.toml` when present.
pub fn resolve_config_path(explicit: Option<&Path>, work_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let candidate = work_dir.join(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

/// Load the configuration, falling back to defaults when no file applies.
pub fn load_config(explicit: Option<&Path>, work_dir: &Path) -> Result<AppConfig, AppError> {
    let Some(path) = resolve_config_path(explicit, work_dir) else {
        debug!("No config file found, using defaults");
        return Ok(AppConfig::default());
    };

    debug!(path = %path.display(), "Reading configuration file");
    let content = fs::read_to_string(&path).map_err(|err| {
        AppError::config_error(format!("Failed to read config {}: {}", path.display(), err))
    })?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
