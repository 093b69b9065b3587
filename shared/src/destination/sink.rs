//! Line-oriented sinks.

use super::{DestinationError, LogDestination};
use crate::models::LogEntry;
use std::io::{self, Write};

/// Anything that can take one formatted log line at a time.
///
/// Every [`io::Write`] is a line sink.
pub trait LineSink {
    /// Writes one line, adding the line terminator.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<W: Write + ?Sized> LineSink for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{line}")
    }
}

/// Adapts a [`LineSink`] into a [`LogDestination`] that receives the
/// formatted line of each call.
#[derive(Debug, Default)]
pub struct Lines<S>(pub S);

impl<S> Lines<S> {
    /// Unwraps the sink.
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: LineSink> LogDestination for Lines<S> {
    fn record(&mut self, _entry: &LogEntry, line: &str) -> Result<(), DestinationError> {
        self.0.write_line(line)?;
        Ok(())
    }
}

/// Writes each entry as one JSON document per line.
#[derive(Debug, Default)]
pub struct JsonLines<W>(pub W);

impl<W> JsonLines<W> {
    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> LogDestination for JsonLines<W> {
    fn record(&mut self, entry: &LogEntry, _line: &str) -> Result<(), DestinationError> {
        serde_json::to_writer(&mut self.0, entry)?;
        self.0.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogLevel, Timestamp};

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_lines_writes_formatted_line() {
        let mut dest = Lines(Vec::<u8>::new());
        let entry = LogEntry::new(Timestamp::Elapsed(0.0), LogLevel::Info, "x");

        dest.record(&entry, "first").unwrap();
        dest.record(&entry, "second").unwrap();

        assert_eq!(String::from_utf8(dest.into_inner()).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_lines_propagates_write_errors() {
        let mut dest = Lines(FailingWriter);
        let entry = LogEntry::new(Timestamp::Elapsed(0.0), LogLevel::Info, "x");

        let err = dest.record(&entry, "line").unwrap_err();

        assert!(matches!(err, DestinationError::Io(_)));
    }

    #[test]
    fn test_json_lines_writes_one_document_per_entry() {
        let mut dest = JsonLines(Vec::<u8>::new());
        dest.record(
            &LogEntry::new(Timestamp::Elapsed(1.0), LogLevel::Warning, "a"),
            "ignored",
        )
        .unwrap();
        dest.record(
            &LogEntry::new(Timestamp::Elapsed(2.0), LogLevel::Error, "b"),
            "ignored",
        )
        .unwrap();

        let output = String::from_utf8(dest.into_inner()).unwrap();
        let parsed: Vec<LogEntry> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].level, LogLevel::Warning);
        assert_eq!(parsed[1].message, "b");
    }
}
