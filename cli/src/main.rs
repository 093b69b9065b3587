//! WeissTools CLI
//!
//! Command-line front end for the WeissTools logger and rotation helpers.
//!
//! # Usage
//!
//! ```bash
//! weisstools --help
//! weisstools demo
//! weisstools --verbosity 4 log "calibration done" --level w --jsonl run.jsonl
//! weisstools rotate z 1.5708
//! ```

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::config::{LoggerConfig, TimestampMode};
use shared::destination::{JsonLines, LogDestination};
use shared::logger::{LoggerBuilder, SharedLogger};
use shared::models::LogLevel;
use shared::rotations::Axis;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing::info;

/// WeissTools CLI - colorized logging and rotation helpers
#[derive(Parser)]
#[command(name = "weisstools")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Console verbosity threshold (0 silences the console, 4 shows debug)
    #[arg(short, long, env = "WEISSTOOLS_VERBOSITY")]
    verbosity: Option<u8>,

    /// Record wall-clock timestamps instead of elapsed seconds
    #[arg(long, env = "WEISSTOOLS_WALL_CLOCK")]
    wall_clock: bool,

    /// JSON logger configuration file
    #[arg(short, long, env = "WEISSTOOLS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log one message per level alias and per convenience method
    Demo,
    /// Log a single message
    Log {
        /// The message text
        message: String,

        /// Level name or alias (i, w, e, d, warn, err)
        #[arg(short, long)]
        level: Option<String>,

        /// Also append the entry as a JSON line to this file
        #[arg(long)]
        jsonl: Option<PathBuf>,
    },
    /// Print the rotation matrix about an axis
    Rotate {
        /// Axis to rotate about (x, y or z)
        axis: Axis,

        /// Angle in radians
        #[arg(allow_negative_numbers = true)]
        theta: f64,
    },
}

/// Resolves the logger configuration: file first, then flags on top.
fn logger_config(cli: &Cli) -> Result<LoggerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            LoggerConfig::from_json(&json)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => LoggerConfig::default(),
    };

    if let Some(verbosity) = cli.verbosity {
        config.verbosity = verbosity;
    }
    if cli.wall_clock {
        config.timestamps = TimestampMode::WallClock;
    }

    config.validate_config()?;
    Ok(config)
}

/// Logs one message per alias, then one per convenience method.
fn run_demo(log: &SharedLogger) -> Result<()> {
    for alias in ["i", "w", "e", "d"] {
        let level = LogLevel::resolve(alias)?;
        log.log(format!("this is a {level} test"), Some(alias))?;
    }

    log.info("This is a info method test")?;
    log.warning("This is a warning method test")?;
    log.error("This is a error method test")?;
    log.debug("This is a debug method test")?;

    if let Err(err) = "not-a-number".parse::<f64>() {
        log.log_failure(&err)?;
    }

    info!(entries = log.entries()?.len(), "demo finished");
    Ok(())
}

/// Logs a single message, optionally appending it to a JSON lines file.
fn run_log(
    log: &SharedLogger,
    message: &str,
    level: Option<&str>,
    jsonl: Option<&PathBuf>,
) -> Result<()> {
    match jsonl {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let mut sink = JsonLines(file);
            let mut extra: [&mut dyn LogDestination; 1] = [&mut sink];
            log.log_to(message, level, &mut extra)?;
        }
        None => {
            log.log(message, level)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so they never mix with the colorized log on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = logger_config(&cli)?;
    let log = LoggerBuilder::from_config(&config)?.build_shared();

    match cli.command {
        Some(Commands::Demo) => run_demo(&log)?,
        Some(Commands::Log {
            message,
            level,
            jsonl,
        }) => run_log(&log, &message, level.as_deref(), jsonl.as_ref())?,
        Some(Commands::Rotate { axis, theta }) => {
            println!("R{axis}({theta}) ={}", axis.rotation(theta));
        }
        None => {
            println!("WeissTools CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
