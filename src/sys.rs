// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform-specific glue.
//!
//! This module picks the time source and the default [`Sink`] for the current target, and looks up
//! the host application's bundle identifier.  On Apple targets the default sink is the unified log;
//! every other target falls back to [`StdErrSink`](crate::StdErrSink), which on WASM writes to the
//! browser console.

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

use crate::sink::Sink;

/**
Creates the sink for the platform logging facility, keyed by `(subsystem, category)`.
*/
#[cfg(target_vendor = "apple")]
pub(crate) fn platform_sink(subsystem: &str, category: &str) -> Box<dyn Sink> {
    Box::new(crate::oslog_sink::OsLogSink::new(subsystem, category))
}

#[cfg(not(target_vendor = "apple"))]
pub(crate) fn platform_sink(subsystem: &str, category: &str) -> Box<dyn Sink> {
    Box::new(crate::stderr_sink::StdErrSink::new(subsystem, category))
}

/**
The identifier of the main bundle, if the process has one.

Command-line tools without an embedded Info.plist have none.
*/
#[cfg(target_vendor = "apple")]
pub(crate) fn bundle_identifier() -> Option<String> {
    bundle::main_bundle_identifier()
}

#[cfg(not(target_vendor = "apple"))]
pub(crate) fn bundle_identifier() -> Option<String> {
    None
}

#[cfg(target_vendor = "apple")]
mod bundle {
    use ::core_foundation::base::TCFType;
    use ::core_foundation::bundle::CFBundle;
    use ::core_foundation::string::CFString;
    use core_foundation_sys::bundle::CFBundleGetIdentifier;

    pub(super) fn main_bundle_identifier() -> Option<String> {
        let bundle = CFBundle::main_bundle();
        // SAFETY: the bundle is a valid CFBundleRef; the result follows the Get rule.
        let identifier = unsafe { CFBundleGetIdentifier(bundle.as_concrete_TypeRef()) };
        if identifier.is_null() {
            return None;
        }
        // SAFETY: non-null CFStringRef owned by the main bundle, retained by the wrapper.
        let identifier = unsafe { CFString::wrap_under_get_rule(identifier) };
        Some(identifier.to_string()).filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_identifier_is_never_empty() {
        if let Some(id) = bundle_identifier() {
            assert!(!id.is_empty());
        }
    }

    #[cfg(not(target_vendor = "apple"))]
    #[test]
    fn no_bundle_off_apple() {
        assert_eq!(bundle_identifier(), None);
    }
}
