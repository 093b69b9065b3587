//! Log data model.
//!
//! Defines the `LogEntry` recorded by every log call, together with the
//! `LogLevel`, `Timestamp` and `Message` values it is built from.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Log severity level.
///
/// Each level carries a numeric priority used by the verbosity filter:
/// lower numbers are more important and survive lower thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Informational messages.
    Info,
    /// Warning conditions.
    Warning,
    /// Error conditions.
    Error,
    /// Debug information.
    Debug,
}

/// Errors that can occur while resolving a level name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelParseError {
    /// The name is neither a canonical level nor a known alias.
    #[error("Unknown log level '{0}'")]
    UnknownLevel(String),
}

impl LogLevel {
    /// Every level, in priority order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Warning, Self::Error, Self::Debug];

    /// Numeric priority compared against the verbosity threshold.
    ///
    /// ```
    /// use shared::models::LogLevel;
    ///
    /// assert_eq!(LogLevel::Info.priority(), 1);
    /// assert_eq!(LogLevel::Debug.priority(), 4);
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Info => 1,
            Self::Warning => 2,
            Self::Error => 3,
            Self::Debug => 4,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Debug => "debug",
        }
    }

    /// Name shown in the formatted log line.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        }
    }

    /// Resolves a level name or short alias to its canonical level.
    ///
    /// Accepted aliases are `i`, `w`, `warn`, `e`, `err`, `d` and `dbg`.
    /// Matching ignores ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`LevelParseError::UnknownLevel`] for any other name.
    ///
    /// ```
    /// use shared::models::LogLevel;
    ///
    /// assert_eq!(LogLevel::resolve("warn").unwrap(), LogLevel::Warning);
    /// assert!(LogLevel::resolve("loud").is_err());
    /// ```
    pub fn resolve(name: &str) -> Result<Self, LevelParseError> {
        match name.to_ascii_lowercase().as_str() {
            "i" | "info" => Ok(Self::Info),
            "w" | "warn" | "warning" => Ok(Self::Warning),
            "e" | "err" | "error" => Ok(Self::Error),
            "d" | "dbg" | "debug" => Ok(Self::Debug),
            _ => Err(LevelParseError::UnknownLevel(name.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

/// When a log entry was recorded.
///
/// Loggers with a start time record elapsed seconds; loggers without one
/// record the local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Seconds elapsed since the logger's start time.
    Elapsed(f64),
    /// Absolute local time.
    WallClock(DateTime<Local>),
}

impl Timestamp {
    /// Returns the elapsed seconds, if this is an elapsed timestamp.
    #[must_use]
    pub fn elapsed_secs(&self) -> Option<f64> {
        match self {
            Self::Elapsed(secs) => Some(*secs),
            Self::WallClock(_) => None,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elapsed(secs) => write!(f, "{secs:9.6}"),
            Self::WallClock(at) => write!(f, "{}", at.format("%Y-%m-%d %H:%M:%S%.6f")),
        }
    }
}

/// The payload of a log call.
///
/// Plain text defaults to [`LogLevel::Info`]; a captured failure defaults
/// to [`LogLevel::Error`] and keeps only its textual description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A plain text message.
    Text(String),
    /// The description of a captured error.
    Failure(String),
}

impl Message {
    /// Captures an error as a failure message.
    ///
    /// ```
    /// use shared::models::{LogLevel, Message};
    ///
    /// let err = std::io::Error::other("disk full");
    /// let msg = Message::failure(&err);
    /// assert_eq!(msg.default_level(), LogLevel::Error);
    /// assert_eq!(msg.text(), "disk full");
    /// ```
    pub fn failure<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::Failure(err.to_string())
    }

    /// Level used when the caller does not name one.
    #[must_use]
    pub fn default_level(&self) -> LogLevel {
        match self {
            Self::Text(_) => LogLevel::Info,
            Self::Failure(_) => LogLevel::Error,
        }
    }

    /// The message text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Failure(text) => text,
        }
    }

    /// Consumes the message, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) | Self::Failure(text) => text,
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

/// A single recorded log event.
///
/// Entries are immutable once appended to a log.
///
/// # Example
///
/// ```
/// use shared::models::{LogEntry, LogLevel, Timestamp};
///
/// let entry = LogEntry::new(Timestamp::Elapsed(0.5), LogLevel::Warning, "low fuel");
/// assert_eq!(entry.level, LogLevel::Warning);
/// assert_eq!(entry.message, "low fuel");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the entry was recorded.
    pub timestamp: Timestamp,

    /// Severity level of the entry.
    #[serde(default)]
    pub level: LogLevel,

    /// The log message content.
    pub message: String,
}

impl LogEntry {
    /// Creates a new log entry.
    #[must_use]
    pub fn new(timestamp: Timestamp, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
        }
    }
}
