// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for applogger.
//!
//! A [`LogRecord`] is what the facade hands to a [`Sink`](crate::Sink): one message, its
//! [`Level`], and the [`Privacy`] annotation that tells the sink how the message may be shown.
//!
//! # Example
//!
//! ```rust
//! use applogger::{Level, LogRecord, Privacy};
//!
//! let record = LogRecord::new(Level::Info, Privacy::Private, "Completed job 'Gift for Alice'");
//! assert_eq!(record.message(), "Completed job 'Gift for Alice'");
//! // Display never shows private text
//! assert_eq!(record.to_string(), "<private>");
//! ```

use crate::{Level, Privacy};
use std::fmt::Display;
use std::sync::OnceLock;
use std::time::Duration;

static INITIAL_TIMESTAMP: OnceLock<crate::sys::Instant> = OnceLock::new();

fn initial_timestamp() -> crate::sys::Instant {
    *INITIAL_TIMESTAMP.get_or_init(crate::sys::Instant::now)
}

/**
A single annotated log message.

The message is kept as written.  Redaction is applied only when the record is rendered, see
[LogRecord::rendered].
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    level: Level,
    privacy: Privacy,
    message: String,
    created_at: crate::sys::Instant,
}

impl LogRecord {
    pub fn new(level: Level, privacy: Privacy, message: impl Into<String>) -> Self {
        //pin the process start before taking our own timestamp
        initial_timestamp();
        Self {
            level,
            privacy,
            message: message.into(),
            created_at: crate::sys::Instant::now(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn privacy(&self) -> Privacy {
        self.privacy
    }

    /**
    The message exactly as logged, including private text.
    */
    pub fn message(&self) -> &str {
        &self.message
    }

    /**
    The message as an unprivileged viewer would see it.
    */
    pub fn rendered(&self) -> &str {
        self.privacy.render(&self.message)
    }

    /**
    Time between the first record created in this process and this one.
    */
    pub fn elapsed_since_start(&self) -> Duration {
        self.created_at.duration_since(initial_timestamp())
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.rendered())
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug: Derived.  Note this shows private text, as Debug is for the developer.
- Clone, PartialEq/Eq, Hash: Derived
- Display: the rendered message

NOT IMPLEMENTED:
- Default: there is no sensible default message or privacy
- Copy: owns a String
- Ord/PartialOrd: no meaningful ordering for log records
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_record_renders_message() {
        let record = LogRecord::new(Level::Notice, Privacy::Public, "hello");
        assert_eq!(record.level(), Level::Notice);
        assert_eq!(record.privacy(), Privacy::Public);
        assert_eq!(record.rendered(), "hello");
        assert_eq!(record.to_string(), "hello");
    }

    #[test]
    fn private_record_hides_message() {
        let record = LogRecord::new(Level::Error, Privacy::Private, "secret token");
        assert_eq!(record.message(), "secret token");
        assert!(!record.to_string().contains("secret"));
        assert_eq!(record.rendered(), crate::privacy::REDACTED);
    }

    #[test]
    fn empty_message_is_kept() {
        let record = LogRecord::new(Level::Debug, Privacy::Public, "");
        assert_eq!(record.message(), "");
        assert_eq!(record.to_string(), "");
    }

    #[test]
    fn timestamps_are_monotonic() {
        let first = LogRecord::new(Level::Debug, Privacy::Public, "a");
        let second = LogRecord::new(Level::Debug, Privacy::Public, "b");
        assert!(second.elapsed_since_start() >= first.elapsed_since_start());
    }
}
