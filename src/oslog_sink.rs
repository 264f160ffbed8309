// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Logging Sink
//!
//! On Apple platforms records go to the unified logging system through `os_log`, where they can be
//! read with Console.app or `log stream --predicate 'subsystem == "..."'`.
//!
//! Public messages are logged with `%{public}s` and private ones with `%{private}s`.  The unified
//! log keeps the private text, and shows it as `<private>` unless the viewer has a private-data
//! profile installed.
//!
//! Note that `.debug` records are not shown for simulators in Console.app, but are for physical
//! devices.

use crate::log_record::LogRecord;
use crate::sink::Sink;
use crate::{Level, Privacy};
use std::ffi::{CString, c_char, c_void};

type OsLogT = *mut c_void;

//os_log_type_t
const OS_LOG_TYPE_DEFAULT: u8 = 0x00;
const OS_LOG_TYPE_INFO: u8 = 0x01;
const OS_LOG_TYPE_DEBUG: u8 = 0x02;
const OS_LOG_TYPE_ERROR: u8 = 0x10;
const OS_LOG_TYPE_FAULT: u8 = 0x11;

// src/oslog_shim.c, built by build.rs
unsafe extern "C" {
    fn applogger_log_create(subsystem: *const c_char, category: *const c_char) -> OsLogT;
    fn applogger_log_release(log: OsLogT);
    fn applogger_log_with_type(log: OsLogT, log_type: u8, is_private: u8, message: *const c_char);
}

#[cfg(test)]
unsafe extern "C" {
    fn applogger_log_format(is_private: u8) -> *const c_char;
}

/**
A sink that writes to one `os_log_t`, created for a `(subsystem, category)` pair.

The message is passed through unchanged; the record's [Privacy] picks the format it is logged
with, and the unified log enforces the redaction.
*/
pub struct OsLogSink {
    log: OsLogT,
    subsystem: String,
    category: String,
}

// SAFETY: os_log_t is an immutable, thread-safe os_object.
unsafe impl Send for OsLogSink {}
unsafe impl Sync for OsLogSink {}

/// C strings end at the first NUL, so interior NULs are dropped.
fn to_cstring(s: &str) -> CString {
    CString::new(s.replace('\0', "")).unwrap_or_default()
}

impl OsLogSink {
    pub fn new(subsystem: &str, category: &str) -> Self {
        let c_subsystem = to_cstring(subsystem);
        let c_category = to_cstring(category);
        // SAFETY: both pointers are valid C strings for the duration of the call.
        let log = unsafe { applogger_log_create(c_subsystem.as_ptr(), c_category.as_ptr()) };
        Self {
            log,
            subsystem: subsystem.to_string(),
            category: category.to_string(),
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Drop for OsLogSink {
    fn drop(&mut self) {
        // SAFETY: we own the reference returned by os_log_create.
        unsafe { applogger_log_release(self.log) }
    }
}

fn os_log_type(level: Level) -> u8 {
    match level {
        Level::Debug => OS_LOG_TYPE_DEBUG,
        Level::Info => OS_LOG_TYPE_INFO,
        Level::Notice => OS_LOG_TYPE_DEFAULT,
        Level::Error => OS_LOG_TYPE_ERROR,
        Level::Fault => OS_LOG_TYPE_FAULT,
    }
}

fn is_private_flag(privacy: Privacy) -> u8 {
    privacy.is_private() as u8
}

/**
The `os_log` format string the shim uses for `privacy`.
*/
#[cfg(test)]
fn format_for(privacy: Privacy) -> &'static str {
    // SAFETY: the shim returns pointers to static string literals.
    let format = unsafe { std::ffi::CStr::from_ptr(applogger_log_format(is_private_flag(privacy))) };
    format.to_str().unwrap_or_default()
}

impl std::fmt::Debug for OsLogSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsLogSink")
            .field("subsystem", &self.subsystem)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

impl Sink for OsLogSink {
    fn emit(&self, record: LogRecord) {
        let message = to_cstring(record.message());
        // SAFETY: self.log lives as long as self, and message is a valid C string.
        unsafe {
            applogger_log_with_type(
                self.log,
                os_log_type(record.level()),
                is_private_flag(record.privacy()),
                message.as_ptr(),
            )
        }
    }

    fn emit_async<'s>(
        &'s self,
        record: LogRecord,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + 's>> {
        Box::pin(async move { self.emit(record) })
    }

    fn flush(&self) {
        //os_log owns its buffers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_os_log_types() {
        assert_eq!(os_log_type(Level::Debug), OS_LOG_TYPE_DEBUG);
        assert_eq!(os_log_type(Level::Info), OS_LOG_TYPE_INFO);
        assert_eq!(os_log_type(Level::Notice), OS_LOG_TYPE_DEFAULT);
        assert_eq!(os_log_type(Level::Error), OS_LOG_TYPE_ERROR);
        assert_eq!(os_log_type(Level::Fault), OS_LOG_TYPE_FAULT);
    }

    #[test]
    fn privacy_selects_format() {
        assert_eq!(format_for(Privacy::Public), "%{public}s");
        assert_eq!(format_for(Privacy::Private), "%{private}s");
        assert_eq!(format_for(Privacy::from(true)), "%{private}s");
    }

    #[test]
    fn private_text_is_passed_through() {
        let record = LogRecord::new(Level::Error, Privacy::Private, "token=abc");
        assert_eq!(to_cstring(record.message()).to_str(), Ok("token=abc"));
        assert_eq!(is_private_flag(record.privacy()), 1);
        assert_eq!(is_private_flag(Privacy::Public), 0);
    }

    #[test]
    fn interior_nul_is_dropped() {
        assert_eq!(to_cstring("nul\0byte").to_str(), Ok("nulbyte"));
    }

    #[test]
    fn emits_every_level_and_privacy() {
        let sink = OsLogSink::new("com.example.applogger.tests", "oslog_sink");
        for level in Level::ALL {
            sink.emit(LogRecord::new(level, Privacy::Public, "public"));
            sink.emit(LogRecord::new(level, Privacy::Private, "private"));
        }
        sink.emit(LogRecord::new(Level::Info, Privacy::Public, "nul\0byte"));
        sink.flush();
        assert_eq!(sink.subsystem(), "com.example.applogger.tests");
        assert!(format!("{sink:?}").contains("oslog_sink"));
    }
}
