//! User configuration.
//!
//! Settings are read from TOML. Every field is optional; missing fields
//! take the defaults below.
//!
//! ```toml
//! # Overrides system locale detection.
//! locale = "de-DE"
//!
//! [announcement]
//! politeness = "assertive"  # or "polite"
//! force = true              # announce sections regardless of platform
//!
//! [color_wheel]
//! track_thickness = 24.0
//! page_step = 15.0
//! ```

use std::path::{Path, PathBuf};

use horizon_aria_core::logging::targets;
use serde::Deserialize;

use crate::accessibility::Politeness;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text is malformed or has wrongly typed fields.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AriaConfig {
    /// Locale for announcements and labels; `None` detects the system locale.
    pub locale: Option<String>,
    /// Live announcement settings.
    pub announcement: AnnouncementConfig,
    /// Color wheel defaults.
    pub color_wheel: ColorWheelConfig,
}

/// Live announcement settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnnouncementConfig {
    /// Politeness of section announcements.
    pub politeness: Politeness,
    /// Force section announcements on (`true`) or off (`false`) instead of
    /// deciding by platform.
    pub force: Option<bool>,
}

/// Color wheel defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorWheelConfig {
    /// Width of the hue ring in logical pixels.
    pub track_thickness: f32,
    /// Degrees moved by Page Up/Down and Shift+Arrow.
    pub page_step: f64,
}

impl Default for ColorWheelConfig {
    fn default() -> Self {
        Self {
            track_thickness: 24.0,
            page_step: 15.0,
        }
    }
}

impl AriaConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded configuration");
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
