//! Integration tests for per-call destinations.
//!
//! Tests cover:
//! - Owned destinations passed through the free `log` function
//! - Owned destinations handed back when a call fails
//! - Borrowed destinations passed to a logger
//! - JSON lines output readable back as entries

use shared::destination::{Destination, JsonLines, LogDestination, Lines};
use shared::format::SEPARATOR;
use shared::logger::{log, LogError, LogOptions, Verbosity};
use shared::models::{LogEntry, LogLevel};

use super::common::{test_logger, Broken};

#[test]
fn test_free_log_returns_updated_destinations() {
    let options = LogOptions {
        verbosity: Verbosity::SILENT,
        ..LogOptions::default()
    };
    let mut console = Vec::<u8>::new();
    let mut dests = vec![
        Destination::Text(String::new()),
        Destination::Entries(Vec::new()),
    ];

    for (message, level) in [("first", "i"), ("second", "err")] {
        dests = log(message, Some(level), &options, &mut console, dests).unwrap();
    }

    assert!(console.is_empty());
    let text = dests[0].as_text().unwrap();
    assert_eq!(text.matches(SEPARATOR).count(), 2);
    let entries = dests[1].as_entries().unwrap();
    assert_eq!(entries[1].level, LogLevel::Error);
}

#[test]
fn test_free_log_failure_keeps_history() {
    let options = LogOptions {
        verbosity: Verbosity::SILENT,
        ..LogOptions::default()
    };
    let mut console = Vec::<u8>::new();
    let mut dests = vec![
        Destination::Text(String::new()),
        Destination::Entries(Vec::new()),
    ];
    for message in ["history 1", "history 2"] {
        dests = log(message, None, &options, &mut console, dests).unwrap();
    }

    let failure = log("x", Some("loud"), &options, &mut console, dests).unwrap_err();
    assert!(matches!(failure.error, LogError::Level(_)));
    let mut dests = failure.destinations;
    assert_eq!(dests[0].as_text().unwrap().matches(SEPARATOR).count(), 2);
    let entries = dests[1].as_entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].message, "history 2");

    dests.push(Destination::lines(Broken));
    let (err, dests) = log("y", None, &options, &mut console, dests)
        .unwrap_err()
        .into_parts();
    assert!(matches!(err, LogError::Destination(_)));
    assert_eq!(dests.len(), 3);
    let entries = dests[1].as_entries().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].message, "history 1");
    assert_eq!(entries[2].message, "y");
}

#[test]
fn test_logger_fans_out_to_extra_destinations() {
    let (mut logger, _console) = test_logger();
    let mut lines = Lines(Vec::<u8>::new());
    let mut json = JsonLines(Vec::<u8>::new());

    {
        let mut extra: [&mut dyn LogDestination; 2] = [&mut lines, &mut json];
        logger.log_to("saved", Some("w"), &mut extra).unwrap();
        logger.log_to("saved again", None, &mut extra).unwrap();
    }

    let written = String::from_utf8(lines.into_inner()).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.contains("WARNING"));

    let parsed: Vec<LogEntry> = String::from_utf8(json.into_inner())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, logger.entries());
}
