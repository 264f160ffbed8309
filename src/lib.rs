//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# applogger

applogger is a small facade over the platform's unified logging facility.

# The API

Make an [AppLogger] for a subsystem and a category, then log strings with it:

```rust
use applogger::{AppLogger, Level};

let logger = AppLogger::new("com.example.app", "network");
logger.log("connecting");                                 // debug, public
logger.log_at(Level::Notice, "connected");
logger.log_with(Level::Error, "token rejected: abc123", true); // private
```

[AppLogger::default] uses the host application's bundle identifier as the subsystem (or
`"AppLogger"` when there is none) and `"default"` as the category.  See [Defaults].

# Privacy

Each message is annotated either [Privacy::Public] or [Privacy::Private].  The facade never edits the
message; the annotation tells the destination whether the text may be shown to unprivileged log
viewers.

# The implementation

| Target          | Destination                                    |
|-----------------|------------------------------------------------|
| Apple platforms | the unified log, via `os_log`                  |
| wasm32          | the browser console                            |
| everything else | stderr                                         |

Logging never fails from the caller's point of view.  If the destination is unavailable, the
message is dropped.

For tests, bind an [InMemorySink] with [LoggerHandle::with_sink] and inspect what was logged.
Any type implementing [Sink] can be bound the same way.

# Multithreading

[AppLogger] is `Send + Sync` and holds no mutable state, so it can be shared between threads
without locking.
*/

mod app_logger;
mod handle;
mod inmemory_sink;
mod level;
mod log_record;
#[cfg(target_vendor = "apple")]
mod oslog_sink;
pub mod privacy;
mod sink;
mod stderr_sink;
mod sys;

pub use app_logger::{AppLogger, Defaults};
pub use handle::LoggerHandle;
pub use inmemory_sink::InMemorySink;
pub use level::{Level, ParseLevelError};
pub use log_record::LogRecord;
#[cfg(target_vendor = "apple")]
pub use oslog_sink::OsLogSink;
pub use privacy::Privacy;
pub use sink::Sink;
pub use stderr_sink::StdErrSink;
