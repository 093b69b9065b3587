//! Colorized line formatting.
//!
//! Log lines are built from three segments (timestamp, level, message),
//! each wrapped in its own 24-bit ANSI foreground color and reset after.

pub mod font;
pub mod line;

pub use font::{Font, FontMap, FontSlot, FormatError};
pub use line::{block, format_line, SEPARATOR};
