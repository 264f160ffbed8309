// SPDX-License-Identifier: MIT OR Apache-2.0

//! Behavior of the facade as seen through a recording sink.

use applogger::{AppLogger, Defaults, InMemorySink, Level, LoggerHandle, Privacy};
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn recording(subsystem: &str, category: &str) -> (AppLogger, Arc<InMemorySink>) {
    let sink = Arc::new(InMemorySink::new());
    let logger = AppLogger::from_handle(LoggerHandle::with_sink(subsystem, category, sink.clone()));
    (logger, sink)
}

#[test]
fn construction_never_fails() {
    let pairs = [
        ("", ""),
        ("com.example.app", ""),
        ("", "network"),
        ("com.example.app", "network"),
        ("spaces in subsystem", "ünïcödé"),
    ];
    for (subsystem, category) in pairs {
        let logger = AppLogger::new(subsystem, category);
        assert_eq!(logger.subsystem(), subsystem);
        assert_eq!(logger.category(), category);
    }
}

#[test]
fn default_construction() {
    let logger = AppLogger::default();
    assert_eq!(logger.category(), "default");
    // test binaries are not bundled
    assert_eq!(logger.subsystem(), "AppLogger");
    assert_eq!(logger.subsystem(), Defaults::FALLBACK_SUBSYSTEM);
}

#[test]
fn public_log_produces_one_public_record() {
    for level in Level::ALL {
        for message in ["", "hello", "multi\nline", "percent %s %{public}@"] {
            let (logger, sink) = recording("com.example", "public");
            logger.log_with(level, message, false);
            let records = sink.drain_records();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].level(), level);
            assert_eq!(records[0].privacy(), Privacy::Public);
            assert_eq!(records[0].message(), message);
            assert_eq!(records[0].to_string(), message);
        }
    }
}

#[test]
fn private_log_produces_one_private_record() {
    for level in Level::ALL {
        let (logger, sink) = recording("com.example", "private");
        logger.log_with(level, "Gift for Alice", true);
        let records = sink.drain_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].privacy(), Privacy::Private);
        assert_eq!(records[0].message(), "Gift for Alice");
        assert!(!records[0].to_string().contains("Alice"));
    }
}

#[test]
fn log_with_defaults_is_debug_public() {
    let (logger, sink) = recording("com.example", "defaults");
    logger.log("hello");
    let records = sink.drain_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level(), Defaults::LEVEL);
    assert_eq!(records[0].level(), Level::Debug);
    assert_eq!(records[0].privacy(), Privacy::Public);
    assert_eq!(records[0].message(), "hello");
}

#[test]
fn sequential_calls_are_independent() {
    let (logger, sink) = recording("com.example", "order");
    logger.log_with(Level::Info, "secret", Privacy::Private);
    logger.log("a");
    logger.log("b");
    let records = sink.drain_records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].message(), "a");
    assert_eq!(records[2].message(), "b");
    assert_eq!(records[1].privacy(), Privacy::Public);
    assert_eq!(records[2].privacy(), Privacy::Public);
    assert_eq!(records[2].level(), Level::Debug);
}

#[test]
fn platform_logger_accepts_any_message() {
    let logger = AppLogger::new("com.example.applogger.tests", "platform");
    for level in Level::ALL {
        logger.log_with(level, "", false);
        logger.log_with(level, "private", true);
    }
    logger.log_at(Level::Info, "interior\0nul");
    logger.flush();
}
