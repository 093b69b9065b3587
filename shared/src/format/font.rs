//! ANSI fonts and the per-slot font map.

use crate::models::LogLevel;
use crossterm::style::{Color, SetForegroundColor};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An ANSI escape prefix applied to one segment of a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font(String);

impl Font {
    /// A 24-bit foreground color.
    ///
    /// ```
    /// use shared::format::Font;
    ///
    /// assert_eq!(Font::rgb(255, 50, 0).as_str(), "\x1b[38;2;255;50;0m");
    /// ```
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(SetForegroundColor(Color::Rgb { r, g, b }).to_string())
    }

    /// An arbitrary escape sequence, used verbatim.
    #[must_use]
    pub fn raw(escape: impl Into<String>) -> Self {
        Self(escape.into())
    }

    /// The escape sequence.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The segment of a log line a font applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontSlot {
    /// The timestamp segment.
    Time,
    /// The message segment.
    Message,
    /// The level segment, colored per level.
    Level(LogLevel),
}

impl fmt::Display for FontSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => f.write_str("time"),
            Self::Message => f.write_str("msg"),
            Self::Level(level) => write!(f, "{level}"),
        }
    }
}

impl FromStr for FontSlot {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(Self::Time),
            "msg" | "message" => Ok(Self::Message),
            other => LogLevel::resolve(other)
                .map(Self::Level)
                .map_err(|_| FormatError::UnknownSlot(other.to_string())),
        }
    }
}

/// Errors raised while formatting a log line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The font map has no font for a segment that needs one.
    #[error("No font configured for '{0}'")]
    MissingFont(FontSlot),

    /// A font slot name could not be parsed.
    #[error("Unknown font slot '{0}'")]
    UnknownSlot(String),
}

/// Fonts for every segment of a log line.
///
/// The default map colors the timestamp grey, the message white and each
/// level with its own color. Overrides replace defaults slot by slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMap {
    fonts: BTreeMap<FontSlot, Font>,
}

impl FontMap {
    /// A map with no fonts at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            fonts: BTreeMap::new(),
        }
    }

    /// Sets the font for a slot, returning the map.
    #[must_use]
    pub fn with_font(mut self, slot: FontSlot, font: Font) -> Self {
        self.set(slot, font);
        self
    }

    /// Sets the font for a slot.
    pub fn set(&mut self, slot: FontSlot, font: Font) {
        self.fonts.insert(slot, font);
    }

    /// Removes the font for a slot.
    pub fn remove(&mut self, slot: FontSlot) -> Option<Font> {
        self.fonts.remove(&slot)
    }

    /// Returns the font for a slot, if any.
    #[must_use]
    pub fn get(&self, slot: FontSlot) -> Option<&Font> {
        self.fonts.get(&slot)
    }

    /// Returns the font for a slot.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingFont`] if the slot has no font.
    pub fn require(&self, slot: FontSlot) -> Result<&Font, FormatError> {
        self.get(slot).ok_or(FormatError::MissingFont(slot))
    }

    /// Applies every font from `overrides` on top of this map.
    pub fn merge(&mut self, overrides: FontMap) {
        self.fonts.extend(overrides.fonts);
    }
}

impl Default for FontMap {
    fn default() -> Self {
        Self::empty()
            .with_font(FontSlot::Time, Font::rgb(128, 128, 128))
            .with_font(FontSlot::Message, Font::rgb(255, 255, 255))
            .with_font(FontSlot::Level(LogLevel::Info), Font::rgb(255, 255, 255))
            .with_font(FontSlot::Level(LogLevel::Warning), Font::rgb(255, 255, 0))
            .with_font(FontSlot::Level(LogLevel::Error), Font::rgb(255, 50, 0))
            .with_font(FontSlot::Level(LogLevel::Debug), Font::rgb(0, 191, 255))
    }
}

impl FromIterator<(FontSlot, Font)> for FontMap {
    fn from_iter<I: IntoIterator<Item = (FontSlot, Font)>>(iter: I) -> Self {
        Self {
            fonts: iter.into_iter().collect(),
        }
    }
}
