//! Common test utilities for integration tests.
//!
//! Provides a console writer that can be read back after a logger has taken
//! ownership of it, and constructors for loggers that write to one.

use shared::logger::{Logger, SharedLogger};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A console that records everything written to it.
#[derive(Debug, Clone, Default)]
pub struct Console(Arc<Mutex<Vec<u8>>>);

impl Console {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer that rejects every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct Broken;

impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates an instance logger writing to a fresh console.
pub fn test_logger() -> (Logger, Console) {
    let console = Console::default();
    let logger = Logger::builder().console(console.clone()).build();
    (logger, console)
}

/// Creates a shared logger writing to a fresh console.
pub fn test_shared_logger() -> (SharedLogger, Console) {
    let console = Console::default();
    let logger = SharedLogger::builder()
        .console(console.clone())
        .build_shared();
    (logger, console)
}
