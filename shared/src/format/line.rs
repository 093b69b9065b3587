//! Log line layout.

use super::font::{FontMap, FontSlot, FormatError};
use crate::models::LogEntry;
use crossterm::style::ResetColor;

/// Visual separator written after every log line.
pub const SEPARATOR: &str = "--- --- --- --- --- --- --- --- --- ---";

/// Formats an entry as a single colorized line.
///
/// The timestamp, level name and message each get their own font and are
/// reset after their segment:
///
/// ```text
/// {time}{timestamp}ESC[0m - {level}{LEVEL}ESC[0m - {msg}{message}ESC[0m
/// ```
///
/// # Errors
///
/// Returns [`FormatError::MissingFont`] if any of the three fonts is absent.
pub fn format_line(entry: &LogEntry, fonts: &FontMap) -> Result<String, FormatError> {
    let time_font = fonts.require(FontSlot::Time)?;
    let level_font = fonts.require(FontSlot::Level(entry.level))?;
    let msg_font = fonts.require(FontSlot::Message)?;

    Ok(format!(
        "{time_font}{timestamp}{reset} - {level_font}{level}{reset} - {msg_font}{message}{reset}",
        reset = ResetColor,
        timestamp = entry.timestamp,
        level = entry.level.display_name(),
        message = entry.message,
    ))
}

/// The line followed by the separator, newline terminated.
///
/// This is what the console and text buffers receive.
#[must_use]
pub fn block(line: &str) -> String {
    format!("{line}\n{SEPARATOR}\n")
}
