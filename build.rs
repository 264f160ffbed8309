// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compiles the os_log shim on Apple targets.
//!
//! `os_log` is a C macro that needs its format string at compile time, so the public and private
//! formats live in C.

fn main() {
    println!("cargo:rerun-if-changed=src/oslog_shim.c");
    if std::env::var("CARGO_CFG_TARGET_VENDOR").as_deref() == Ok("apple") {
        cc::Build::new()
            .file("src/oslog_shim.c")
            .compile("applogger_oslog_shim");
    }
}
