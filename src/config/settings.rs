//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.
//! Every field has a default reproducing the tool's built-in style, so an
//! empty object (or no file at all) is a valid configuration.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::render::{Rgb, SheetStyle};

/// Root configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Sheet style settings.
    #[serde(default)]
    pub style: StyleConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.style.muted.is_valid() {
            return Err(ConfigError::Validation {
                message: "muted tone components must be within 0.0..=1.0".to_string(),
            });
        }
        if !self.style.highlight.is_valid() {
            return Err(ConfigError::Validation {
                message: "highlight tone components must be within 0.0..=1.0".to_string(),
            });
        }
        if !(self.style.heading_band_ratio > 0.0 && self.style.heading_band_ratio <= 1.0) {
            return Err(ConfigError::Validation {
                message: format!(
                    "heading_band_ratio must be within (0.0, 1.0], got {}",
                    self.style.heading_band_ratio
                ),
            });
        }
        if !(self.style.heading_font_ratio > 0.0 && self.style.heading_font_ratio <= 1.0) {
            return Err(ConfigError::Validation {
                message: format!(
                    "heading_font_ratio must be within (0.0, 1.0], got {}",
                    self.style.heading_font_ratio
                ),
            });
        }
        Ok(())
    }
}

/// Sheet style configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Fill tone for context pads. Default: light grey.
    #[serde(default = "default_muted")]
    pub muted: Rgb,

    /// Fill tone for the highlighted group. Default: black.
    #[serde(default = "default_highlight")]
    pub highlight: Rgb,

    /// Heading band height as a fraction of the board height.
    /// Default: 0.1
    #[serde(default = "default_band_ratio")]
    pub heading_band_ratio: f64,

    /// Heading font size as a fraction of the band height.
    /// Default: 0.2
    #[serde(default = "default_font_ratio")]
    pub heading_font_ratio: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            muted: default_muted(),
            highlight: default_highlight(),
            heading_band_ratio: default_band_ratio(),
            heading_font_ratio: default_font_ratio(),
        }
    }
}

impl From<&StyleConfig> for SheetStyle {
    fn from(config: &StyleConfig) -> Self {
        Self {
            muted: config.muted,
            highlight: config.highlight,
            heading_band_ratio: config.heading_band_ratio,
            heading_font_ratio: config.heading_font_ratio,
        }
    }
}

const fn default_muted() -> Rgb {
    Rgb::new(0.827, 0.827, 0.827)
}

const fn default_highlight() -> Rgb {
    Rgb::new(0.0, 0.0, 0.0)
}

const fn default_band_ratio() -> f64 {
    0.1
}

const fn default_font_ratio() -> f64 {
    0.2
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn" or "error".
    /// Default: "warn"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_built_in_style() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let style = SheetStyle::from(&config.style);
        assert_eq!(style, SheetStyle::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn empty_object_deserialises_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.style.muted, Rgb::new(0.827, 0.827, 0.827));
    }

    #[test]
    fn overrides_apply() {
        let config: Config = serde_json::from_str(
            r#"{
                "style": {"highlight": {"r": 0.8, "g": 0.0, "b": 0.0}},
                "logging": {"level": "debug"}
            }"#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.style.highlight, Rgb::new(0.8, 0.0, 0.0));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn out_of_range_tone_fails_validation() {
        let config: Config = serde_json::from_str(
            r#"{"style": {"muted": {"r": 1.5, "g": 0.0, "b": 0.0}}}"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_band_ratio_fails_validation() {
        let config: Config =
            serde_json::from_str(r#"{"style": {"heading_band_ratio": 0.0}}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{"styles": {}}"#).is_err());
    }
}
