//! Console verbosity threshold.

use crate::models::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The highest level priority still written to the console.
///
/// A level is shown when `level.priority() <= threshold`; entries are
/// recorded in every destination regardless.
///
/// Priorities are info 1, warning 2, error 3, debug 4, so the threshold is
/// not a severity cutoff: at 2 only info and warning print, and at 1
/// (`LogLevel::Info.into()`) only info prints while errors stay silent.
///
/// ```
/// use shared::logger::Verbosity;
/// use shared::models::LogLevel;
///
/// assert!(Verbosity::DEFAULT.shows(LogLevel::Error));
/// assert!(!Verbosity::DEFAULT.shows(LogLevel::Debug));
/// assert!(!Verbosity::SILENT.shows(LogLevel::Info));
///
/// let info_only = Verbosity::from(LogLevel::Info);
/// assert!(info_only.shows(LogLevel::Info));
/// assert!(!info_only.shows(LogLevel::Error));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verbosity(u8);

impl Verbosity {
    /// Nothing reaches the console.
    pub const SILENT: Self = Self(0);
    /// Everything except debug output.
    pub const DEFAULT: Self = Self(LogLevel::Error.priority());
    /// Every level, including debug.
    pub const ALL: Self = Self(LogLevel::Debug.priority());

    /// Creates a threshold from a raw priority.
    #[must_use]
    pub const fn new(threshold: u8) -> Self {
        Self(threshold)
    }

    /// The raw threshold.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether messages at `level` are written to the console.
    #[must_use]
    pub const fn shows(self, level: LogLevel) -> bool {
        level.priority() <= self.0
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Verbosity {
    fn from(threshold: u8) -> Self {
        Self(threshold)
    }
}

impl From<LogLevel> for Verbosity {
    fn from(level: LogLevel) -> Self {
        Self(level.priority())
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let verbosity = Verbosity::new(2);
        assert!(verbosity.shows(LogLevel::Info));
        assert!(verbosity.shows(LogLevel::Warning));
        assert!(!verbosity.shows(LogLevel::Error));
        assert!(!verbosity.shows(LogLevel::Debug));
    }

    #[test]
    fn test_info_threshold_hides_errors() {
        let verbosity = Verbosity::from(LogLevel::Info);
        assert!(verbosity.shows(LogLevel::Info));
        assert!(!verbosity.shows(LogLevel::Warning));
        assert!(!verbosity.shows(LogLevel::Error));
    }

    #[test]
    fn test_silent_shows_nothing() {
        for level in LogLevel::ALL {
            assert!(!Verbosity::SILENT.shows(level), "{level}");
        }
    }

    #[test]
    fn test_all_shows_everything() {
        for level in LogLevel::ALL {
            assert!(Verbosity::ALL.shows(level), "{level}");
        }
    }

    #[test]
    fn test_from_level() {
        assert_eq!(Verbosity::from(LogLevel::Warning), Verbosity::new(2));
    }
}
