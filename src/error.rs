//! Error type shared by synthesis, sequencing and audio output.

use std::fmt;

/// Errors produced while synthesizing or playing tones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A note name that is not present in the note table
    UnknownNote(String),
    /// A parameter outside of its valid range (zero sample rate, non-positive duration, ...)
    InvalidArgument(String),
    /// The audio device could not be opened, written to or stopped
    Device(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownNote(s) => write!(f, "unknown note: '{}'", s),
            Error::InvalidArgument(s) => write!(f, "invalid argument: {}", s),
            Error::Device(s) => write!(f, "audio device error: {}", s),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
