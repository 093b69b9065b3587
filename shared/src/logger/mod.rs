//! Colorized, leveled logging with shared and per-instance scopes.
//!
//! Three ways in:
//!
//! - [`log`]: a free function taking every option explicitly and an owned
//!   list of destinations, which it returns updated.
//! - [`Logger`]: an instance with its own entries, log text, verbosity,
//!   start time and fonts. Nothing is shared with any other logger.
//! - [`SharedLogger`]: a cloneable handle. Every clone sees the same
//!   entries, log text, verbosity and start time.
//!
//! # Example
//!
//! ```
//! use shared::logger::{Logger, Verbosity};
//!
//! let mut logger = Logger::builder()
//!     .verbosity(Verbosity::SILENT)
//!     .console(std::io::sink())
//!     .build();
//!
//! logger.warning("disk almost full").unwrap();
//! logger.log("checked", Some("i")).unwrap();
//!
//! assert_eq!(logger.entries().len(), 2);
//! ```

pub mod builder;
pub mod instance;
pub mod shared;
mod state;
pub mod verbosity;

pub use builder::LoggerBuilder;
pub use instance::Logger;
pub use shared::SharedLogger;
pub use verbosity::Verbosity;

use crate::config::TimestampMode;
use crate::destination::{Destination, DestinationError, LogDestination};
use crate::format::{block, format_line, FontMap, FormatError};
use crate::models::{LevelParseError, LogEntry, LogLevel, Message, Timestamp};
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::time::Instant;
use thiserror::Error;

/// Errors that can occur during a log call.
#[derive(Debug, Error)]
pub enum LogError {
    /// The requested level is not a level or alias.
    #[error(transparent)]
    Level(#[from] LevelParseError),

    /// A font needed for the line is missing.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Writing to the console failed.
    #[error("Failed to write to console: {0}")]
    Console(#[source] io::Error),

    /// A destination rejected the entry.
    #[error(transparent)]
    Destination(#[from] DestinationError),

    /// The shared logger's lock was poisoned by a panicking holder.
    #[error("Failed to acquire lock on shared logger")]
    LockPoisoned,
}

/// A failed call to [`log`].
///
/// Carries the destinations back so their earlier history survives the
/// error. Destinations before the failing one may already hold the entry.
#[derive(Debug, Error)]
#[error("Log call failed: {error}")]
pub struct LogFailure {
    /// What went wrong.
    #[source]
    pub error: LogError,
    /// The destinations passed to the call.
    pub destinations: Vec<Destination>,
}

impl LogFailure {
    /// Splits the failure into the error and the returned destinations.
    #[must_use]
    pub fn into_parts(self) -> (LogError, Vec<Destination>) {
        (self.error, self.destinations)
    }
}

/// Options for a single call to [`log`].
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Highest priority written to the console.
    pub verbosity: Verbosity,
    /// When set, timestamps are seconds elapsed since this time;
    /// otherwise the wall-clock time is recorded.
    pub start_time: Option<DateTime<Local>>,
    /// Fonts for each segment of the line.
    pub fonts: FontMap,
}

/// Logs one message with explicit options.
///
/// The level defaults to the message's own default (info for text, error for
/// a captured failure) and accepts aliases such as `w` or `err`. The block is
/// written to `console` only if the verbosity allows the level; the entry is
/// recorded in every destination either way. The destinations are returned
/// updated.
///
/// # Errors
///
/// Every error comes back as a [`LogFailure`] holding the destinations.
/// [`LogError::Level`] and [`LogError::Format`] are returned before any
/// output is written. Console and destination errors propagate as they
/// happen.
///
/// # Example
///
/// ```
/// use shared::destination::Destination;
/// use shared::logger::{log, LogOptions};
///
/// let mut console = Vec::<u8>::new();
/// let dests = vec![Destination::Text(String::new()), Destination::Entries(Vec::new())];
///
/// let dests = log("ready", Some("warn"), &LogOptions::default(), &mut console, dests).unwrap();
///
/// assert!(dests[0].as_text().unwrap().contains("WARNING"));
/// assert_eq!(dests[1].as_entries().unwrap()[0].message, "ready");
/// ```
pub fn log(
    message: impl Into<Message>,
    level: Option<&str>,
    options: &LogOptions,
    console: &mut dyn Write,
    mut destinations: Vec<Destination>,
) -> Result<Vec<Destination>, LogFailure> {
    match log_into(message.into(), level, options, console, &mut destinations) {
        Ok(()) => Ok(destinations),
        Err(error) => Err(LogFailure {
            error,
            destinations,
        }),
    }
}

fn log_into(
    message: Message,
    level: Option<&str>,
    options: &LogOptions,
    console: &mut dyn Write,
    destinations: &mut [Destination],
) -> Result<(), LogError> {
    let level = resolve_level(&message, level)?;
    let timestamp = match options.start_time {
        Some(start) => elapsed_since(start),
        None => Timestamp::WallClock(Local::now()),
    };

    let (entry, line) = render(message, level, timestamp, &options.fonts)?;
    print_block(console, options.verbosity, &entry, &line)?;
    for destination in destinations.iter_mut() {
        destination.record(&entry, &line)?;
    }
    Ok(())
}

/// Picks the level for a message: the resolved alias if given, otherwise
/// the message's default.
pub(crate) fn resolve_level(message: &Message, level: Option<&str>) -> Result<LogLevel, LogError> {
    match level {
        Some(name) => Ok(LogLevel::resolve(name)?),
        None => Ok(message.default_level()),
    }
}

/// Builds the entry and its formatted line.
pub(crate) fn render(
    message: Message,
    level: LogLevel,
    timestamp: Timestamp,
    fonts: &FontMap,
) -> Result<(LogEntry, String), LogError> {
    let entry = LogEntry::new(timestamp, level, message.into_text());
    let line = format_line(&entry, fonts)?;
    Ok((entry, line))
}

/// Writes the line and separator to the console if the level is shown.
pub(crate) fn print_block(
    console: &mut dyn Write,
    verbosity: Verbosity,
    entry: &LogEntry,
    line: &str,
) -> Result<(), LogError> {
    if verbosity.shows(entry.level) {
        console
            .write_all(block(line).as_bytes())
            .and_then(|()| console.flush())
            .map_err(LogError::Console)?;
    }
    Ok(())
}

/// Appends the entry to every extra destination.
pub(crate) fn record_all(
    destinations: &mut [&mut dyn LogDestination],
    entry: &LogEntry,
    line: &str,
) -> Result<(), LogError> {
    for destination in destinations.iter_mut() {
        destination.record(entry, line)?;
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn elapsed_since(start: DateTime<Local>) -> Timestamp {
    let delta = Local::now().signed_duration_since(start);
    let micros = delta.num_microseconds().unwrap_or(i64::MAX);
    Timestamp::Elapsed(micros as f64 / 1_000_000.0)
}

/// Source of timestamps for one logger.
///
/// An elapsed clock measures on a monotonic clock so consecutive entries
/// never go backwards.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Clock {
    Elapsed {
        started_at: DateTime<Local>,
        origin: Instant,
    },
    WallClock,
}

impl Clock {
    pub(crate) fn start(mode: TimestampMode) -> Self {
        match mode {
            TimestampMode::Elapsed => Self::Elapsed {
                started_at: Local::now(),
                origin: Instant::now(),
            },
            TimestampMode::WallClock => Self::WallClock,
        }
    }

    pub(crate) fn now(&self) -> Timestamp {
        match self {
            Self::Elapsed { origin, .. } => Timestamp::Elapsed(origin.elapsed().as_secs_f64()),
            Self::WallClock => Timestamp::WallClock(Local::now()),
        }
    }

    pub(crate) fn started_at(&self) -> Option<DateTime<Local>> {
        match self {
            Self::Elapsed { started_at, .. } => Some(*started_at),
            Self::WallClock => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// A console that can be read back after the logger took ownership.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
