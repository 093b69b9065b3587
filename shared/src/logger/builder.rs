//! Logger construction.

use super::state::LoggerState;
use super::{Clock, Logger, SharedLogger, Verbosity};
use crate::config::{ConfigError, LoggerConfig, TimestampMode};
use crate::format::{Font, FontMap, FontSlot};
use std::io::{self, Write};
use tracing::debug;

/// Configures and builds a [`Logger`] or a [`SharedLogger`].
///
/// # Example
///
/// ```
/// use shared::format::{Font, FontSlot};
/// use shared::logger::{LoggerBuilder, Verbosity};
///
/// let logger = LoggerBuilder::new()
///     .verbosity(Verbosity::ALL)
///     .font(FontSlot::Time, Font::rgb(90, 90, 90))
///     .console(std::io::sink())
///     .build();
///
/// assert_eq!(logger.verbosity(), Verbosity::ALL);
/// ```
pub struct LoggerBuilder {
    verbosity: Verbosity,
    fonts: FontMap,
    timestamps: TimestampMode,
    console: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// A builder with default verbosity, default fonts, elapsed timestamps
    /// and standard output as the console.
    #[must_use]
    pub fn new() -> Self {
        Self {
            verbosity: Verbosity::default(),
            fonts: FontMap::default(),
            timestamps: TimestampMode::default(),
            console: None,
        }
    }

    /// A builder preloaded from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or names an
    /// unknown font slot.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, ConfigError> {
        config.validate_config()?;
        Ok(Self::new()
            .verbosity(config.verbosity)
            .timestamps(config.timestamps)
            .fonts(config.font_overrides()?))
    }

    /// Sets the console threshold.
    #[must_use]
    pub fn verbosity(mut self, verbosity: impl Into<Verbosity>) -> Self {
        self.verbosity = verbosity.into();
        self
    }

    /// Applies font overrides on top of the current fonts.
    #[must_use]
    pub fn fonts(mut self, overrides: FontMap) -> Self {
        self.fonts.merge(overrides);
        self
    }

    /// Sets a single font.
    #[must_use]
    pub fn font(mut self, slot: FontSlot, font: Font) -> Self {
        self.fonts.set(slot, font);
        self
    }

    /// Replaces the whole font map, defaults included.
    #[must_use]
    pub fn replace_fonts(mut self, fonts: FontMap) -> Self {
        self.fonts = fonts;
        self
    }

    /// Chooses elapsed or wall-clock timestamps.
    #[must_use]
    pub fn timestamps(mut self, mode: TimestampMode) -> Self {
        self.timestamps = mode;
        self
    }

    /// Shorthand for wall-clock timestamps.
    #[must_use]
    pub fn wall_clock(self) -> Self {
        self.timestamps(TimestampMode::WallClock)
    }

    /// Sends console output to `console` instead of standard output.
    #[must_use]
    pub fn console(mut self, console: impl Write + Send + 'static) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    /// Builds an instance logger; an elapsed clock starts now.
    #[must_use]
    pub fn build(self) -> Logger {
        debug!(timestamps = ?self.timestamps, verbosity = %self.verbosity, "building logger");
        let clock = Clock::start(self.timestamps);
        Logger::from_state(self.into_state(Some(clock)))
    }

    /// Builds a shared logger; an elapsed clock starts at the first call.
    #[must_use]
    pub fn build_shared(self) -> SharedLogger {
        debug!(timestamps = ?self.timestamps, verbosity = %self.verbosity, "building shared logger");
        SharedLogger::from_state(self.into_state(None))
    }

    fn into_state(self, clock: Option<Clock>) -> LoggerState {
        let console = self
            .console
            .unwrap_or_else(|| Box::new(io::stdout()) as Box<dyn Write + Send>);
        LoggerState::new(self.timestamps, clock, self.verbosity, self.fonts, console)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
