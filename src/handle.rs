// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::sink::Sink;
use crate::{Level, Privacy};
use std::future::Future;

/**
A logging destination, named by a subsystem and a category.

The handle exclusively owns the sink bound to its pair.  Neither coordinate can change after
construction; to log somewhere else, make a new handle.

```rust
use applogger::LoggerHandle;
let handle = LoggerHandle::new("com.example.app", "network");
assert_eq!(handle.subsystem(), "com.example.app");
assert_eq!(handle.category(), "network");
```
*/
#[derive(Debug)]
pub struct LoggerHandle {
    subsystem: String,
    category: String,
    sink: Box<dyn Sink>,
}

impl LoggerHandle {
    /**
    Binds the platform logging facility for `(subsystem, category)`.

    No validation is performed: empty strings are passed through and the platform decides how
    to name such a channel.
    */
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        let subsystem = subsystem.into();
        let category = category.into();
        let sink = crate::sys::platform_sink(&subsystem, &category);
        Self {
            subsystem,
            category,
            sink,
        }
    }

    /**
    Binds an explicit sink, for example an [crate::InMemorySink] in tests.
    */
    pub fn with_sink(
        subsystem: impl Into<String>,
        category: impl Into<String>,
        sink: impl Sink + 'static,
    ) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
            sink: Box::new(sink),
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /**
    Forwards a public message at `level`.
    */
    pub fn emit(&self, level: Level, message: &str) {
        self.emit_record(LogRecord::new(level, Privacy::Public, message));
    }

    /**
    Forwards an annotated record to the sink.
    */
    pub fn emit_record(&self, record: LogRecord) {
        self.sink.emit(record);
    }

    pub fn emit_record_async(&self, record: LogRecord) -> impl Future<Output = ()> + Send + '_ {
        self.sink.emit_async(record)
    }

    pub fn flush(&self) {
        self.sink.flush();
    }
}

/*
Boilerplate notes for LoggerHandle:

- Clone: NOT implemented.  The handle owns its sink exclusively.
- PartialEq/Eq/Hash: NOT implemented, two handles with equal coordinates may still own different sinks
- Default: see AppLogger::default, which picks the default coordinates
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemorySink;
    use std::sync::Arc;

    #[test]
    fn emit_is_public() {
        let sink = Arc::new(InMemorySink::new());
        let handle = LoggerHandle::with_sink("sub", "cat", sink.clone());
        handle.emit(Level::Info, "hello");
        let records = sink.drain_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level(), Level::Info);
        assert_eq!(records[0].privacy(), Privacy::Public);
        assert_eq!(records[0].message(), "hello");
    }

    #[test]
    fn emit_record_keeps_annotation() {
        let sink = Arc::new(InMemorySink::new());
        let handle = LoggerHandle::with_sink("sub", "cat", sink.clone());
        handle.emit_record(LogRecord::new(Level::Error, Privacy::Private, "token"));
        handle.flush();
        assert_eq!(sink.drain_logs(), "<private>");
    }

    #[test]
    fn platform_handle_accepts_empty_coordinates() {
        let handle = LoggerHandle::new("", "");
        assert_eq!(handle.subsystem(), "");
        assert_eq!(handle.category(), "");
        handle.emit(Level::Debug, "");
    }

    #[test_executors::async_test]
    async fn emit_record_async() {
        let sink = Arc::new(InMemorySink::new());
        let handle = LoggerHandle::with_sink("sub", "cat", sink.clone());
        handle
            .emit_record_async(LogRecord::new(Level::Notice, Privacy::Public, "later"))
            .await;
        assert_eq!(sink.drain_logs(), "later");
    }
}
