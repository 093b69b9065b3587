//! Log destinations.
//!
//! Every log call appends to a list of destinations. The `LogDestination`
//! trait covers borrowed targets; the owned [`Destination`] enum lets a
//! caller hand a list over by value and get the updated list back.
//!
//! - `String` text buffers receive the formatted line plus separator.
//! - `Vec<LogEntry>` lists receive the structured entry.
//! - [`Lines`] wraps anything that can write a line.
//! - [`JsonLines`] writes each entry as one JSON document per line.

pub mod sink;

pub use sink::{JsonLines, LineSink, Lines};

use crate::format::block;
use crate::models::LogEntry;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while appending to a destination.
#[derive(Debug, Error)]
pub enum DestinationError {
    /// Writing to the underlying sink failed.
    #[error("Failed to write to destination: {0}")]
    Io(#[from] std::io::Error),

    /// An entry could not be serialized.
    #[error("Failed to serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A target that receives every log call.
pub trait LogDestination {
    /// Appends one log call, given as the structured entry and its
    /// formatted line (without separator).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink rejects the write.
    fn record(&mut self, entry: &LogEntry, line: &str) -> Result<(), DestinationError>;
}

impl LogDestination for String {
    fn record(&mut self, _entry: &LogEntry, line: &str) -> Result<(), DestinationError> {
        self.push_str(&block(line));
        Ok(())
    }
}

impl LogDestination for Vec<LogEntry> {
    fn record(&mut self, entry: &LogEntry, _line: &str) -> Result<(), DestinationError> {
        self.push(entry.clone());
        Ok(())
    }
}

impl<T: LogDestination + ?Sized> LogDestination for &mut T {
    fn record(&mut self, entry: &LogEntry, line: &str) -> Result<(), DestinationError> {
        (**self).record(entry, line)
    }
}

impl<T: LogDestination + ?Sized> LogDestination for Box<T> {
    fn record(&mut self, entry: &LogEntry, line: &str) -> Result<(), DestinationError> {
        (**self).record(entry, line)
    }
}

/// An owned destination, passed by value to [`crate::logger::log`].
pub enum Destination {
    /// A text buffer; receives the formatted line and separator.
    Text(String),
    /// A structured list; receives the entry.
    Entries(Vec<LogEntry>),
    /// A line sink; receives the formatted line.
    Lines(Box<dyn LineSink>),
}

impl Destination {
    /// A line sink destination.
    pub fn lines(sink: impl LineSink + 'static) -> Self {
        Self::Lines(Box::new(sink))
    }

    /// The text buffer, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The entry list, if this is one.
    #[must_use]
    pub fn as_entries(&self) -> Option<&[LogEntry]> {
        match self {
            Self::Entries(entries) => Some(entries),
            _ => None,
        }
    }
}

impl LogDestination for Destination {
    fn record(&mut self, entry: &LogEntry, line: &str) -> Result<(), DestinationError> {
        match self {
            Self::Text(text) => text.record(entry, line),
            Self::Entries(entries) => entries.record(entry, line),
            Self::Lines(sink) => Ok(sink.write_line(line)?),
        }
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Entries(entries) => f.debug_tuple("Entries").field(entries).finish(),
            Self::Lines(_) => f.debug_tuple("Lines").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::SEPARATOR;
    use crate::models::{LogLevel, Timestamp};

    fn create_test_entry(message: &str) -> LogEntry {
        LogEntry::new(Timestamp::Elapsed(0.0), LogLevel::Info, message)
    }

    #[test]
    fn test_text_buffer_receives_block() {
        let mut text = String::new();

        text.record(&create_test_entry("a"), "line a").unwrap();
        text.record(&create_test_entry("b"), "line b").unwrap();

        assert_eq!(text, format!("line a\n{SEPARATOR}\nline b\n{SEPARATOR}\n"));
    }

    #[test]
    fn test_entry_list_receives_entry() {
        let mut entries: Vec<LogEntry> = Vec::new();

        entries.record(&create_test_entry("a"), "ignored").unwrap();

        assert_eq!(entries, vec![create_test_entry("a")]);
    }

    #[test]
    fn test_owned_destinations_dispatch() {
        let mut text = Destination::Text(String::new());
        let mut entries = Destination::Entries(Vec::new());
        let mut lines = Destination::lines(Vec::<u8>::new());
        let entry = create_test_entry("hello");

        for dest in [&mut text, &mut entries, &mut lines] {
            dest.record(&entry, "formatted").unwrap();
        }

        assert_eq!(text.as_text(), Some(format!("formatted\n{SEPARATOR}\n").as_str()));
        assert_eq!(entries.as_entries().map(<[LogEntry]>::len), Some(1));
        assert!(lines.as_text().is_none());
        assert!(format!("{lines:?}").starts_with("Lines"));
    }
}
