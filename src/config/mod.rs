//! Configuration module
//!
//! Handles loading and saving of codegather.toml configuration files.

mod types;

pub use types::Config;

use crate::error::{GatherError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "codegather.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        GatherError::Config(format!(
            "Cannot read config from '{}': {}. Run 'codegather config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load an explicitly requested config, or fall back to the default file
/// and finally to the built-in defaults
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        debug!(path = %path.display(), "loading config");
        return load(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        debug!(path = %default_path.display(), "loading config");
        load(default_path)
    } else {
        debug!("no config file found, using built-in defaults");
        Ok(Config::default())
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| GatherError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
