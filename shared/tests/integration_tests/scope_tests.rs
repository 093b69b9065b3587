//! Integration tests for shared and instance scopes.
//!
//! Tests cover:
//! - Shared entries visible through every handle
//! - Instance isolation
//! - Verbosity filtering per scope
//! - Monotonic elapsed timestamps

use shared::logger::{SharedLogger, Verbosity};
use shared::models::LogLevel;

use super::common::{test_logger, test_shared_logger};

/// A component that only knows about the shared handle it was given.
struct Worker {
    log: SharedLogger,
    name: &'static str,
}

impl Worker {
    fn run(&self) {
        self.log.info(format!("{} started", self.name)).unwrap();
        self.log.debug(format!("{} details", self.name)).unwrap();
    }
}

#[test]
fn test_shared_log_seen_by_every_call_site() {
    let (log, _console) = test_shared_logger();
    let workers = [
        Worker { log: log.clone(), name: "reader" },
        Worker { log: log.clone(), name: "writer" },
    ];

    for worker in &workers {
        worker.run();
    }

    let entries = log.entries().unwrap();
    assert_eq!(entries.len(), 4);
    for worker in &workers {
        assert_eq!(worker.log.entries().unwrap(), entries);
    }
    assert_eq!(entries[2].message, "writer started");
}

#[test]
fn test_shared_verbosity_applies_to_every_call_site() {
    let (log, console) = test_shared_logger();
    let worker = Worker { log: log.clone(), name: "quiet" };

    log.set_verbosity(LogLevel::Info).unwrap();
    worker.run();

    let printed = console.contents();
    assert!(printed.contains("quiet started"));
    assert!(!printed.contains("quiet details"));
    assert_eq!(log.entries().unwrap().len(), 2);
}

#[test]
fn test_instances_never_share_entries() {
    let (mut a, _) = test_logger();
    let (mut b, _) = test_logger();

    a.error("boom").unwrap();
    b.info("calm").unwrap();
    b.info("still calm").unwrap();

    assert_eq!(a.entries().len(), 1);
    assert_eq!(b.entries().len(), 2);
    assert!(b.entries().iter().all(|e| e.message != "boom"));
    assert!(!b.log_text().contains("boom"));
}

#[test]
fn test_instance_and_shared_scopes_never_mix() {
    let (shared, _) = test_shared_logger();
    let (mut instance, _) = test_logger();

    shared.warning("shared only").unwrap();
    instance.warning("instance only").unwrap();

    assert!(shared
        .entries()
        .unwrap()
        .iter()
        .all(|e| e.message == "shared only"));
    assert!(instance
        .entries()
        .iter()
        .all(|e| e.message == "instance only"));
}

#[test]
fn test_suppressed_output_still_recorded() {
    let (mut logger, console) = test_logger();
    logger.set_verbosity(Verbosity::SILENT);

    for level in ["i", "w", "e", "d"] {
        logger.log("hidden", Some(level)).unwrap();
    }

    assert!(console.contents().is_empty());
    assert_eq!(logger.entries().len(), 4);
}

#[test]
fn test_error_scenario_prints_error_color() {
    let (mut logger, console) = test_logger();

    logger.error("boom").unwrap();

    assert_eq!(logger.entries().len(), 1);
    assert_eq!(logger.entries()[0].level, LogLevel::Error);
    assert_eq!(logger.entries()[0].message, "boom");
    let printed = console.contents();
    assert!(printed.contains("boom"));
    assert!(printed.contains("\x1b[38;2;255;50;0m"));
}

#[test]
fn test_failure_object_logged_as_error() {
    let (log, _console) = test_shared_logger();
    let err = "abc".parse::<u32>().unwrap_err();

    log.log_failure(&err).unwrap();

    let entry = &log.entries().unwrap()[0];
    assert_eq!(entry.level, LogLevel::Error);
    assert_eq!(entry.message, err.to_string());
}

#[test]
fn test_elapsed_timestamps_non_decreasing_for_shared_log() {
    let (log, _console) = test_shared_logger();

    for i in 0..20 {
        log.clone().info(format!("step {i}")).unwrap();
    }

    let times: Vec<f64> = log
        .entries()
        .unwrap()
        .iter()
        .map(|e| e.timestamp.elapsed_secs().unwrap())
        .collect();
    assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
}
