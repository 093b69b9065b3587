//! Data models for the WeissTools logger.
//!
//! This module contains the log entry and the values it is built from.

pub mod log;

pub use log::{LevelParseError, LogEntry, LogLevel, Message, Timestamp};
