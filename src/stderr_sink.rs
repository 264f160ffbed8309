// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::sink::Sink;

/**
A fallback sink for targets without a unified logging facility.

On native targets it writes one line per record to stderr:

```text
[1.2ms] com.example.app:network notice connected
```

On WASM it writes to the browser console, picking the console method by level.

Private messages are written as `<private>`, since stderr has no notion of privileged viewers.
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StdErrSink {
    subsystem: String,
    category: String,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Clone/PartialEq/Eq/Hash: Derived; the sink is just its coordinates
// - Copy: NOT implemented, owns Strings
// - Default: NOT implemented, a sink must be told its destination
// - Send/Sync: Automatic

impl StdErrSink {
    pub fn new(subsystem: &str, category: &str) -> Self {
        Self {
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

    /**
    The line this sink writes for `record`, without the trailing newline.
    */
    pub fn format_line(&self, record: &LogRecord) -> String {
        format!(
            "[{:?}] {}:{} {} {}",
            record.elapsed_since_start(),
            self.subsystem,
            self.category,
            record.level(),
            record.rendered()
        )
    }
}

impl Sink for StdErrSink {
    fn emit(&self, record: LogRecord) {
        let line = self.format_line(&record);
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut lock = std::io::stderr().lock();
            //nowhere to report a failed write to stderr
            let _ = lock.write_all(line.as_bytes());
            let _ = lock.write_all(b"\n");
        }
        #[cfg(target_arch = "wasm32")]
        {
            use crate::Level;
            match record.level() {
                Level::Debug => {
                    web_sys::console::debug_1(&line.into());
                }
                Level::Info | Level::Notice => {
                    web_sys::console::info_1(&line.into());
                }
                Level::Error | Level::Fault => {
                    web_sys::console::error_1(&line.into());
                }
            }
        }
    }

    fn emit_async<'s>(
        &'s self,
        record: LogRecord,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + 's>> {
        Box::pin(async move { self.emit(record) })
    }

    fn flush(&self) {
        //nothing to do since we are unbuffered
    }
}
