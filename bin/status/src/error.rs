//! Error types for the status tool.
//!
//! Each variant describes what the tool was doing. The underlying cause
//! stays attached as a child of the `Report` through `.context()`.

use std::fmt;
use std::path::PathBuf;
use voc_streaming_core::ConferenceSlug;

/// Errors from producing a status report.
#[derive(Debug)]
pub enum StatusError {
    /// The conference configuration file could not be read.
    ConfigFile { path: PathBuf },
    /// The conference configuration is invalid.
    Conference { slug: ConferenceSlug },
    /// The requested instant is not a valid Unix timestamp.
    InvalidInstant { seconds: i64 },
    /// The report could not be serialized.
    Output,
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFile { path } => write!(f, "failed to read '{}'", path.display()),
            Self::Conference { slug } => write!(f, "invalid configuration for conference '{slug}'"),
            Self::InvalidInstant { seconds } => {
                write!(f, "{seconds} is not a valid Unix timestamp")
            }
            Self::Output => write!(f, "failed to write report"),
        }
    }
}

impl std::error::Error for StatusError {}
