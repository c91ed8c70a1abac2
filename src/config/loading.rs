//! Configuration loading functionality.
//!
//! Handles locating `bannr.toml`, creating a default file on first run, and
//! parsing with clamping normalization applied.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::validation::validate_config;
use super::{Config, builder};
use crate::constants::CONFIG_FILE_NAME;

/// Global configuration directory, set once at startup
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// This can only be called once, typically at startup.
/// Returns an error if already set.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Get the custom configuration directory if one was set.
/// Returns None if using the default directory.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Full path to the configuration file.
///
/// Uses the custom directory when one was set with `--config`, otherwise
/// `$XDG_CONFIG_HOME/bannr/bannr.toml` (with the usual `~/.config` fallback
/// handled by `dirs`).
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom) = get_custom_config_dir() {
        return Ok(custom.join(CONFIG_FILE_NAME));
    }
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join("bannr").join(CONFIG_FILE_NAME))
}

/// Load configuration using automatic path detection.
///
/// Creates a default configuration file if none exists, so the first run
/// always has something to animate.
pub fn load() -> Result<Config> {
    let config_path = get_config_path()?;
    if !config_path.exists() {
        builder::create_default_config(&config_path)?;
        log_block_start!(
            "Created default configuration at {}",
            config_path.display()
        );
    }
    load_from_path(&config_path)
}

/// Load and normalize configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse and normalize configuration from TOML text.
pub fn parse(content: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(content).context("Invalid TOML in configuration")?;
    validate_config(&mut config);
    Ok(config)
}
