//! Process-wide logger handle.

use super::state::LoggerState;
use super::{LogError, LoggerBuilder, Verbosity};
use crate::destination::LogDestination;
use crate::models::{LogEntry, LogLevel, Message};
use chrono::{DateTime, Local};
use std::sync::{Arc, Mutex, MutexGuard};

/// A cloneable handle onto one shared log.
///
/// Construct it once at process start and pass clones to every call site
/// that should accumulate into the same log. All clones share the entries,
/// the log text, the verbosity and the start time. With elapsed timestamps
/// the start time is set by the first log call through any clone.
///
/// A `SharedLogger` never shares state with a [`super::Logger`].
///
/// # Example
///
/// ```
/// use shared::logger::SharedLogger;
///
/// let log = SharedLogger::builder().console(std::io::sink()).build_shared();
/// let elsewhere = log.clone();
///
/// elsewhere.info("from another call site").unwrap();
///
/// assert_eq!(log.entries().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SharedLogger {
    state: Arc<Mutex<LoggerState>>,
}

impl SharedLogger {
    /// Creates a shared logger with default settings, printing to
    /// standard output.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build_shared()
    }

    /// Returns a builder for a customized logger.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_state(state: LoggerState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, LoggerState>, LogError> {
        self.state.lock().map_err(|_| LogError::LockPoisoned)
    }

    /// Logs a message, optionally at a named level or alias.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is unknown, a font is missing, the
    /// console write fails, or the lock is poisoned.
    pub fn log(
        &self,
        message: impl Into<Message>,
        level: Option<&str>,
    ) -> Result<LogEntry, LogError> {
        self.lock()?.log(message.into(), level, &mut [])
    }

    /// Logs a message and also records it in `destinations`.
    ///
    /// # Errors
    ///
    /// As [`SharedLogger::log`], plus any destination write error.
    pub fn log_to(
        &self,
        message: impl Into<Message>,
        level: Option<&str>,
        destinations: &mut [&mut dyn LogDestination],
    ) -> Result<LogEntry, LogError> {
        self.lock()?.log(message.into(), level, destinations)
    }

    /// Logs a captured error at error level, using its description.
    ///
    /// # Errors
    ///
    /// As [`SharedLogger::log`].
    pub fn log_failure<E: std::error::Error + ?Sized>(
        &self,
        err: &E,
    ) -> Result<LogEntry, LogError> {
        self.log(Message::failure(err), None)
    }

    /// Logs at info level.
    ///
    /// # Errors
    ///
    /// As [`SharedLogger::log`].
    pub fn info(&self, message: impl Into<Message>) -> Result<LogEntry, LogError> {
        self.log(message, Some(LogLevel::Info.as_str()))
    }

    /// Logs at warning level.
    ///
    /// # Errors
    ///
    /// As [`SharedLogger::log`].
    pub fn warning(&self, message: impl Into<Message>) -> Result<LogEntry, LogError> {
        self.log(message, Some(LogLevel::Warning.as_str()))
    }

    /// Logs at error level.
    ///
    /// # Errors
    ///
    /// As [`SharedLogger::log`].
    pub fn error(&self, message: impl Into<Message>) -> Result<LogEntry, LogError> {
        self.log(message, Some(LogLevel::Error.as_str()))
    }

    /// Logs at debug level.
    ///
    /// # Errors
    ///
    /// As [`SharedLogger::log`].
    pub fn debug(&self, message: impl Into<Message>) -> Result<LogEntry, LogError> {
        self.log(message, Some(LogLevel::Debug.as_str()))
    }

    /// Changes the console threshold for every clone.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LockPoisoned`] if the lock is poisoned.
    pub fn set_verbosity(&self, verbosity: impl Into<Verbosity>) -> Result<(), LogError> {
        self.lock()?.set_verbosity(verbosity.into());
        Ok(())
    }

    /// The shared console threshold.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LockPoisoned`] if the lock is poisoned.
    pub fn verbosity(&self) -> Result<Verbosity, LogError> {
        Ok(self.lock()?.verbosity())
    }

    /// A snapshot of every shared entry, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LockPoisoned`] if the lock is poisoned.
    pub fn entries(&self) -> Result<Vec<LogEntry>, LogError> {
        Ok(self.lock()?.entries().to_vec())
    }

    /// A snapshot of the shared log text.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LockPoisoned`] if the lock is poisoned.
    pub fn log_text(&self) -> Result<String, LogError> {
        Ok(self.lock()?.text().to_string())
    }

    /// When the shared elapsed clock started; `None` before the first call
    /// or when timestamps are wall-clock.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LockPoisoned`] if the lock is poisoned.
    pub fn start_time(&self) -> Result<Option<DateTime<Local>>, LogError> {
        Ok(self.lock()?.start_time())
    }

    /// Whether any call has been made through this log yet.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LockPoisoned`] if the lock is poisoned.
    pub fn is_started(&self) -> Result<bool, LogError> {
        Ok(self.lock()?.is_started())
    }

    /// Whether two handles refer to the same log.
    #[must_use]
    pub fn same_log(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for SharedLogger {
    fn default() -> Self {
        Self::new()
    }
}
