//! Error types for pincode_tui.

use std::fmt;

/// Result type alias for pincode_tui operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pincode_tui operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A whole-control animation was requested while animations are off.
    AnimationsDisabled,
    /// Animation name that does not match any known animation.
    UnknownAnimation(String),
    /// Pass-through option rejected by the hidden field.
    InvalidInputOption { key: String, reason: String },
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnimationsDisabled => write!(f, "animations are disabled"),
            Self::UnknownAnimation(name) => write!(f, "unknown animation: {name}"),
            Self::InvalidInputOption { key, reason } => {
                write!(f, "invalid input option `{key}`: {reason}")
            }
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
        }
    }
}

impl std::error::Error for Error {}
