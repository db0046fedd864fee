//! Error types for the configuration layer.
//!
//! Board and gesture operations never fail; only reading settings can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is out of range
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
