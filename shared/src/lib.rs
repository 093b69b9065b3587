//! WeissTools Shared Library
//!
//! This crate contains the colorized, leveled logger and the small math
//! helpers used across the WeissTools utilities.
//!
//! # Modules
//!
//! - [`models`] - Log entries, levels, timestamps and messages
//! - [`format`] - Fonts and the colorized line layout
//! - [`destination`] - Targets that receive each log call
//! - [`logger`] - Free `log` function, instance and shared loggers
//! - [`config`] - Serializable logger settings
//! - [`rotations`] - Elementary 3×3 rotation matrices
//!
//! # Example
//!
//! ```
//! use shared::logger::{Logger, SharedLogger};
//! use shared::models::LogLevel;
//!
//! let shared = SharedLogger::builder().console(std::io::sink()).build_shared();
//! let mut local = Logger::builder().console(std::io::sink()).build();
//!
//! shared.clone().warning("seen by every clone").unwrap();
//! local.error("only here").unwrap();
//!
//! assert_eq!(shared.entries().unwrap()[0].level, LogLevel::Warning);
//! assert_eq!(local.entries().len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod destination;
pub mod format;
pub mod logger;
pub mod models;
pub mod rotations;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use nalgebra;
pub use serde_json;
