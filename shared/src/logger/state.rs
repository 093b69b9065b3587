use super::{print_block, record_all, render, resolve_level, Clock, LogError, Verbosity};
use crate::config::TimestampMode;
use crate::destination::LogDestination;
use crate::format::FontMap;
use crate::models::{LogEntry, Message};
use chrono::{DateTime, Local};
use std::fmt;
use std::io::Write;
use tracing::{debug, trace};

/// Everything one logging scope accumulates and is configured with.
///
/// `Logger` owns one directly; `SharedLogger` holds one behind a lock.
pub(crate) struct LoggerState {
    mode: TimestampMode,
    clock: Option<Clock>,
    verbosity: Verbosity,
    fonts: FontMap,
    entries: Vec<LogEntry>,
    text: String,
    console: Box<dyn Write + Send>,
}

impl LoggerState {
    pub(crate) fn new(
        mode: TimestampMode,
        clock: Option<Clock>,
        verbosity: Verbosity,
        fonts: FontMap,
        console: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            mode,
            clock,
            verbosity,
            fonts,
            entries: Vec::new(),
            text: String::new(),
            console,
        }
    }

    /// Records one message.
    ///
    /// The clock is started on the first successful call if it was not
    /// started at construction; a call that fails on level or font lookup
    /// leaves no trace.
    pub(crate) fn log(
        &mut self,
        message: Message,
        level: Option<&str>,
        extra: &mut [&mut dyn LogDestination],
    ) -> Result<LogEntry, LogError> {
        let level = resolve_level(&message, level)?;
        let clock = self.clock.unwrap_or_else(|| Clock::start(self.mode));

        let (entry, line) = render(message, level, clock.now(), &self.fonts)?;
        self.clock.get_or_insert(clock);

        print_block(self.console.as_mut(), self.verbosity, &entry, &line)?;
        self.entries.record(&entry, &line)?;
        self.text.record(&entry, &line)?;
        record_all(extra, &entry, &line)?;

        trace!(level = %entry.level, extra = extra.len(), "recorded log entry");
        Ok(entry)
    }

    pub(crate) fn set_verbosity(&mut self, verbosity: Verbosity) {
        debug!(from = %self.verbosity, to = %verbosity, "verbosity changed");
        self.verbosity = verbosity;
    }

    pub(crate) fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub(crate) fn fonts(&self) -> &FontMap {
        &self.fonts
    }

    pub(crate) fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn start_time(&self) -> Option<DateTime<Local>> {
        self.clock.as_ref().and_then(Clock::started_at)
    }

    pub(crate) fn is_started(&self) -> bool {
        self.clock.is_some()
    }
}

impl fmt::Debug for LoggerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerState")
            .field("mode", &self.mode)
            .field("clock", &self.clock)
            .field("verbosity", &self.verbosity)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}
