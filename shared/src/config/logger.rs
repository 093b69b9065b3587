//! Logger configuration.
//!
//! A `LoggerConfig` is the serializable form of the options a
//! [`crate::logger::LoggerBuilder`] accepts, so a logger can be set up from
//! a JSON file.

use crate::format::{Font, FontMap, FontSlot, FormatError};
use crate::logger::Verbosity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use validator::Validate;

/// How log entries are timestamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampMode {
    /// Seconds elapsed since the logger's start time.
    #[default]
    Elapsed,
    /// Absolute local time; the logger has no start time.
    WallClock,
}

/// Errors that can occur while loading a logger configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for this structure.
    #[error("Failed to parse logger config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field is out of range.
    #[error("Invalid logger config: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    /// A font override names an unknown slot.
    #[error(transparent)]
    Font(#[from] FormatError),
}

/// Serializable logger settings.
///
/// Font overrides are keyed by slot name (`time`, `msg`, or a level name or
/// alias) and give an RGB foreground color.
///
/// # Examples
///
/// ```
/// use shared::config::{LoggerConfig, TimestampMode};
///
/// let config = LoggerConfig::from_json(r#"{"verbosity": 2}"#).unwrap();
/// assert_eq!(config.verbosity, 2);
/// assert_eq!(config.timestamps, TimestampMode::Elapsed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggerConfig {
    /// Console threshold: a level prints when its priority is at most this.
    #[validate(range(max = 4, message = "Verbosity cannot exceed 4 (debug)"))]
    pub verbosity: u8,

    /// Elapsed or wall-clock timestamps.
    pub timestamps: TimestampMode,

    /// RGB font overrides applied on top of the defaults.
    pub fonts: BTreeMap<String, [u8; 3]>,
}

impl LoggerConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the verbosity is out of
    /// range, or a font slot is unknown.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate_config()?;
        Ok(config)
    }

    /// Validates ranges and font slot names.
    ///
    /// # Errors
    ///
    /// Returns an error if the verbosity is out of range or a font slot is
    /// unknown.
    pub fn validate_config(&self) -> Result<(), ConfigError> {
        self.validate()?;
        self.font_overrides()?;
        Ok(())
    }

    /// The font overrides as a [`FontMap`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Font`] if a slot name is unknown.
    pub fn font_overrides(&self) -> Result<FontMap, ConfigError> {
        self.fonts
            .iter()
            .map(|(slot, [r, g, b])| -> Result<(FontSlot, Font), ConfigError> {
                Ok((slot.parse()?, Font::rgb(*r, *g, *b)))
            })
            .collect()
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::DEFAULT.get(),
            timestamps: TimestampMode::default(),
            fonts: BTreeMap::new(),
        }
    }
}
