//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Privacy annotations for log messages.

A message is either [Privacy::Public], which viewers always show, or [Privacy::Private], which the
platform facility hides from unprivileged viewers.  The facade never edits the message itself; it only
attaches the annotation and leaves enforcement to the sink.
*/

/// The placeholder shown in place of a private message.
pub const REDACTED: &str = "<private>";

/**
How a message may be rendered by log viewers.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Privacy {
    /// Always visible.
    #[default]
    Public,
    /// Hidden unless the viewer has elevated diagnostic privileges.
    Private,
}

impl Privacy {
    pub const fn is_private(&self) -> bool {
        matches!(self, Privacy::Private)
    }

    /**
    Renders the message as an unprivileged viewer would see it.

    Sinks that cannot hand the annotation to their destination use this so that private text never
    leaves the process.
    */
    #[inline]
    pub fn render<'a>(&self, message: &'a str) -> &'a str {
        match self {
            Privacy::Public => message,
            Privacy::Private => REDACTED,
        }
    }
}

/**
`true` means private.
*/
impl From<bool> for Privacy {
    #[inline]
    fn from(is_private: bool) -> Self {
        if is_private {
            Privacy::Private
        } else {
            Privacy::Public
        }
    }
}

impl From<Privacy> for bool {
    #[inline]
    fn from(privacy: Privacy) -> Self {
        privacy.is_private()
    }
}
