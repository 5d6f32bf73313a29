//! Style configuration loading.
//!
//! The configuration file is optional: it tunes tones and heading
//! proportions but the built-in defaults reproduce the established output.
//!
//! # Locations
//!
//! 1. Path given via the `--config` CLI flag (must exist).
//! 2. Default location, used when present:
//!    - **Linux/macOS:** `~/.padsheet/config.json`
//!    - **Windows:** `%USERPROFILE%\.padsheet\config.json`
//! 3. Built-in defaults otherwise.

mod settings;

pub use settings::{Config, LoggingConfig, StyleConfig};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Returns the default configuration directory.
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".padsheet"))
}

/// Returns the platform-specific default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join("config.json"))
}

/// Loads the configuration.
///
/// An explicit `path` must exist; the default location is used only when it
/// is present, and built-in defaults apply otherwise.
///
/// # Errors
///
/// Returns an error if an explicitly requested file is missing, or if any
/// file that is read cannot be parsed or fails validation.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound {
                    path: p.to_path_buf(),
                });
            }
            p.to_path_buf()
        }
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Read {
        path: config_path.clone(),
        source: e,
    })?;

    let config: Config = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: config_path.clone(),
        source: e,
    })?;

    config.validate()?;

    Ok(config)
}
