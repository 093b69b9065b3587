//! Instance-scoped logger.

use super::state::LoggerState;
use super::{LogError, LoggerBuilder, Verbosity};
use crate::destination::LogDestination;
use crate::format::FontMap;
use crate::models::{LogEntry, LogLevel, Message};
use chrono::{DateTime, Local};

/// A logger whose entries, log text, verbosity, start time and fonts are
/// private to this instance.
///
/// With elapsed timestamps (the default) the start time is fixed when the
/// logger is built.
///
/// # Example
///
/// ```
/// use shared::logger::Logger;
/// use shared::models::LogLevel;
///
/// let mut logger = Logger::builder().console(std::io::sink()).build();
/// logger.error("boom").unwrap();
///
/// assert_eq!(logger.entries()[0].level, LogLevel::Error);
/// assert!(logger.log_text().contains("boom"));
/// ```
#[derive(Debug)]
pub struct Logger {
    state: LoggerState,
}

impl Logger {
    /// Creates a logger with default settings, printing to standard output.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Returns a builder for a customized logger.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_state(state: LoggerState) -> Self {
        Self { state }
    }

    /// Logs a message, optionally at a named level or alias.
    ///
    /// Without a level, text is logged as info and failures as error.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is unknown, a font is missing, or the
    /// console write fails.
    pub fn log(
        &mut self,
        message: impl Into<Message>,
        level: Option<&str>,
    ) -> Result<LogEntry, LogError> {
        self.state.log(message.into(), level, &mut [])
    }

    /// Logs a message and also records it in `destinations`.
    ///
    /// # Errors
    ///
    /// As [`Logger::log`], plus any destination write error.
    pub fn log_to(
        &mut self,
        message: impl Into<Message>,
        level: Option<&str>,
        destinations: &mut [&mut dyn LogDestination],
    ) -> Result<LogEntry, LogError> {
        self.state.log(message.into(), level, destinations)
    }

    /// Logs a captured error at error level, using its description.
    ///
    /// # Errors
    ///
    /// As [`Logger::log`].
    pub fn log_failure<E: std::error::Error + ?Sized>(
        &mut self,
        err: &E,
    ) -> Result<LogEntry, LogError> {
        self.log(Message::failure(err), None)
    }

    /// Logs at info level.
    ///
    /// # Errors
    ///
    /// As [`Logger::log`].
    pub fn info(&mut self, message: impl Into<Message>) -> Result<LogEntry, LogError> {
        self.log(message, Some(LogLevel::Info.as_str()))
    }

    /// Logs at warning level.
    ///
    /// # Errors
    ///
    /// As [`Logger::log`].
    pub fn warning(&mut self, message: impl Into<Message>) -> Result<LogEntry, LogError> {
        self.log(message, Some(LogLevel::Warning.as_str()))
    }

    /// Logs at error level.
    ///
    /// # Errors
    ///
    /// As [`Logger::log`].
    pub fn error(&mut self, message: impl Into<Message>) -> Result<LogEntry, LogError> {
        self.log(message, Some(LogLevel::Error.as_str()))
    }

    /// Logs at debug level.
    ///
    /// # Errors
    ///
    /// As [`Logger::log`].
    pub fn debug(&mut self, message: impl Into<Message>) -> Result<LogEntry, LogError> {
        self.log(message, Some(LogLevel::Debug.as_str()))
    }

    /// Changes the console threshold for all later calls.
    pub fn set_verbosity(&mut self, verbosity: impl Into<Verbosity>) {
        self.state.set_verbosity(verbosity.into());
    }

    /// The current console threshold.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        self.state.verbosity()
    }

    /// Every entry logged through this instance, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        self.state.entries()
    }

    /// The formatted lines and separators logged so far.
    #[must_use]
    pub fn log_text(&self) -> &str {
        self.state.text()
    }

    /// When the elapsed clock started, if timestamps are elapsed.
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Local>> {
        self.state.start_time()
    }

    /// The fonts used for each line segment.
    #[must_use]
    pub fn fonts(&self) -> &FontMap {
        self.state.fonts()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
