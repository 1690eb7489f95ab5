//! Configuration file support for skillgap.
//!
//! Loads settings from `~/.skillgap/config.toml` with the following
//! precedence: CLI arguments > Environment variables > Config file.
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.skillgap/config.toml
//!
//! [api]
//! # Base URL of the Skills Gap Analyzer API
//! base_url = "http://localhost:5000/api"
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// API connection configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Configuration for the API connection.
#[derive(Debug, Default, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Skills Gap Analyzer API.
    pub base_url: Option<String>,
}

/// Returns the path to the config file (~/.skillgap/config.toml).
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".skillgap").join("config.toml"))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;

    tracing::debug!(
        target: "skillgap::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving
/// the precedence: CLI > ENV > config file. Call early in startup, before
/// parsing CLI arguments.
pub fn apply_config_to_env() {
    if let Ok(Some(config)) = load_config() {
        apply_api_config_to_env(&config.api);
    }
}

fn apply_api_config_to_env(api: &ApiConfig) {
    if let Some(ref base_url) = api.base_url {
        if std::env::var("SKILLGAP_API_BASE").is_err() {
            std::env::set_var("SKILLGAP_API_BASE", base_url);
        }
    }
}
