//! Error types for the input decoder and TTY adapter.
//!
//! Malformed escape sequences are not modeled as errors: an unrecognized
//! sequence degrades to an [`escaped`](crate::input::Character::Escaped)
//! event carrying its raw bytes, and the decode never fails on that
//! account. These types cover the two ways a caller's request genuinely
//! cannot be satisfied: invalid input bytes, and OS-level failures from
//! the TTY adapter.

use std::fmt;

/// The input chunk handed to [`decode`](crate::input::decode) was not
/// valid UTF-8.
#[derive(Debug)]
pub struct DecodeError {
    pub(crate) source: std::str::Utf8Error,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid UTF-8 in input chunk: {}", self.source)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A TTY adapter operation failed at the OS level.
#[derive(Debug)]
pub enum TtyError {
    /// A `nix`/libc call returned an error.
    Os {
        /// Name of the failing operation, for diagnostics (`"tcgetattr"`,
        /// `"tcsetattr"`, `"ioctl(TIOCGWINSZ)"`, ...).
        call: &'static str,
        source: nix::Error,
    },
}

impl fmt::Display for TtyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TtyError::Os { call, source } => {
                write!(f, "{call} failed: {source}")
            }
        }
    }
}

impl std::error::Error for TtyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TtyError::Os { source, .. } => Some(source),
        }
    }
}
