//! Configuration module for WeissTools.
//!
//! This module contains the serializable logger settings.

pub mod logger;

pub use logger::{ConfigError, LoggerConfig, TimestampMode};
