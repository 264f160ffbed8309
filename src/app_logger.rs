// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`AppLogger`] facade and its [`Defaults`].

use crate::handle::LoggerHandle;
use crate::log_record::LogRecord;
use crate::{Level, Privacy};
use std::sync::OnceLock;

static DEFAULT_SUBSYSTEM: OnceLock<String> = OnceLock::new();

/**
Default values used by [AppLogger].
*/
#[derive(Debug, Clone, Copy)]
pub struct Defaults;

impl Defaults {
    /// Used as the subsystem when the host application has no identifier.
    pub const FALLBACK_SUBSYSTEM: &'static str = "AppLogger";
    pub const CATEGORY: &'static str = "default";
    pub const IS_PRIVATE: bool = false;
    pub const PRIVACY: Privacy = Privacy::Public;
    pub const LEVEL: Level = Level::Debug;

    /**
    The host application's bundle identifier, or [Self::FALLBACK_SUBSYSTEM].

    Looked up once per process.
    */
    pub fn subsystem() -> &'static str {
        DEFAULT_SUBSYSTEM.get_or_init(|| {
            crate::sys::bundle_identifier()
                .unwrap_or_else(|| Self::FALLBACK_SUBSYSTEM.to_string())
        })
    }
}

/**
Logs messages to the platform's unified logging facility.

Each logger is bound to one subsystem and one category.  A subsystem organizes large topic areas,
for example one per process.  Categories distinguish parts of a subsystem, such as model code and
user-interface code.

```rust
use applogger::{AppLogger, Level};

let logger = AppLogger::new("com.example.game", "physics");
logger.log("step");                                  // debug, public
logger.log_with(Level::Error, "user@example.com", true); // private
```

Every call is independent.  The logger holds no state besides its handle, so it can be kept for
the life of the process or made per call site, and shared between threads.
*/
#[derive(Debug)]
pub struct AppLogger {
    handle: LoggerHandle,
}

impl AppLogger {
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self::from_handle(LoggerHandle::new(subsystem, category))
    }

    /**
    A logger for `category` in the default subsystem.
    */
    pub fn with_category(category: impl Into<String>) -> Self {
        Self::new(Defaults::subsystem(), category)
    }

    pub fn from_handle(handle: LoggerHandle) -> Self {
        Self { handle }
    }

    pub fn subsystem(&self) -> &str {
        self.handle.subsystem()
    }

    pub fn category(&self) -> &str {
        self.handle.category()
    }

    pub fn handle(&self) -> &LoggerHandle {
        &self.handle
    }

    /**
    Logs `message` at `level`.

    `privacy` may be a [Privacy] or a `bool`, where `true` means private.  A private message is only
    annotated; the platform decides how to hide it.
    */
    pub fn log_with(&self, level: Level, message: &str, privacy: impl Into<Privacy>) {
        self.handle
            .emit_record(LogRecord::new(level, privacy.into(), message));
    }

    /**
    Logs a public message at [Level::Debug].

    Debug messages may not be shown for simulators.
    */
    pub fn log(&self, message: &str) {
        self.log_with(Defaults::LEVEL, message, Defaults::PRIVACY);
    }

    pub fn log_at(&self, level: Level, message: &str) {
        self.log_with(level, message, Defaults::PRIVACY);
    }

    /// Logs a private message at [Level::Debug].
    pub fn log_private(&self, message: &str) {
        self.log_with(Defaults::LEVEL, message, Privacy::Private);
    }

    pub fn debug(&self, message: &str) {
        self.log_at(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log_at(Level::Info, message);
    }

    pub fn notice(&self, message: &str) {
        self.log_at(Level::Notice, message);
    }

    pub fn error(&self, message: &str) {
        self.log_at(Level::Error, message);
    }

    pub fn fault(&self, message: &str) {
        self.log_at(Level::Fault, message);
    }

    /**
    Like [Self::log_with], but lets the sink use the caller's executor.
    */
    pub async fn log_async(&self, level: Level, message: &str, privacy: impl Into<Privacy>) {
        let record = LogRecord::new(level, privacy.into(), message);
        self.handle.emit_record_async(record).await;
    }

    /**
    The application may imminently exit.  Flushes the sink.
    */
    pub fn flush(&self) {
        self.handle.flush();
    }
}

impl Default for AppLogger {
    /// A logger for [Defaults::subsystem] and [Defaults::CATEGORY].
    fn default() -> Self {
        Self::new(Defaults::subsystem(), Defaults::CATEGORY)
    }
}
