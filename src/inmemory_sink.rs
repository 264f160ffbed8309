// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! This module provides an in-memory sink for testing and debugging purposes.
//! The `InMemorySink` captures log records in memory rather than sending them to the platform,
//! making it ideal for:
//!
//! - Unit testing code that logs through an [`AppLogger`](crate::AppLogger)
//! - Checking which level and privacy annotation a message was logged with
//! - Capturing logs in environments where the platform log is unavailable
//!
//! The sink keeps records in a `Mutex<Vec<LogRecord>>`, held only for a single push or drain, so
//! several threads may log into it concurrently.

use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, MutexGuard};

/// A sink that stores log records in memory, in the order they were emitted.
///
/// # Example
///
/// ```rust
/// use applogger::{AppLogger, InMemorySink, Level, LoggerHandle, Privacy};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let logger = AppLogger::from_handle(LoggerHandle::with_sink("com.example", "tests", sink.clone()));
///
/// logger.log("hello");
/// logger.log_with(Level::Error, "card number 4111", true);
///
/// let records = sink.drain_records();
/// assert_eq!(records[0].level(), Level::Debug);
/// assert_eq!(records[1].privacy(), Privacy::Private);
/// assert!(sink.is_empty());
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    records: Mutex<Vec<LogRecord>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived, required by Sink
// - Default: Implemented with obvious zero-value (empty buffer)
// - Clone: NOT implemented, share it with Arc instead
// - PartialEq/Eq/Hash: NOT implemented, mutex state comparison is problematic
// - Send/Sync: Automatic due to Mutex (required for Sink)

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        //a panic while holding the lock can't leave a Vec half-pushed
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// A copy of the records emitted so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Removes and returns all records.
    pub fn drain_records(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.lock())
    }

    /// Removes all records and returns them rendered, one per line.
    ///
    /// Private messages appear as `<private>`.
    pub fn drain_logs(&self) -> String {
        let records = self.drain_records();
        records
            .iter()
            .map(LogRecord::rendered)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Sink for InMemorySink {
    fn emit(&self, record: LogRecord) {
        self.lock().push(record);
    }

    fn emit_async<'s>(
        &'s self,
        record: LogRecord,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 's>> {
        // Simple async wrapper around the synchronous implementation
        Box::pin(async move {
            self.emit(record);
        })
    }

    fn flush(&self) {
        // No-op since we're storing in memory, no flushing needed
    }
}
