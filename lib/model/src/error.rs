//! Error types for the model crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `StoreError`: Errors from configuration lookups
//! - `ConferenceError`: Errors from building the conference model

use std::fmt;

/// Errors from configuration store lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The key exists but its value has the wrong shape.
    InvalidValue { key: String, reason: String },
    /// The key was expected to hold a table.
    NotATable { key: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { key, reason } => {
                write!(f, "invalid value for '{key}': {reason}")
            }
            Self::NotATable { key } => write!(f, "'{key}' is not a table"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Errors from building or querying the conference model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConferenceError {
    /// A boundary timestamp is not a valid Unix timestamp.
    InvalidTimestamp { key: String, reason: String },
    /// A configuration lookup failed.
    Lookup { source: StoreError },
    /// A room key in the configuration is not a valid slug.
    InvalidRoom { slug: String, reason: String },
}

impl fmt::Display for ConferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimestamp { key, reason } => {
                write!(f, "invalid timestamp for '{key}': {reason}")
            }
            Self::Lookup { source } => write!(f, "configuration lookup failed: {source}"),
            Self::InvalidRoom { slug, reason } => {
                write!(f, "invalid room '{slug}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConferenceError {}

impl From<StoreError> for ConferenceError {
    fn from(source: StoreError) -> Self {
        Self::Lookup { source }
    }
}
