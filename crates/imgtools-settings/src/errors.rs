//! Settings error types.

use std::path::PathBuf;

use thiserror::Error;

/// Why telemetry settings could not be loaded.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("cannot read telemetry settings {}: {source}", path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The settings file is not valid JSON, or does not fit [`TelemetrySettings`](crate::TelemetrySettings).
    #[error("malformed telemetry settings: {0}")]
    Json(#[from] serde_json::Error),
    /// A field has a value the collector envelope cannot carry.
    #[error("invalid telemetry setting `{field}`: {reason}")]
    InvalidValue {
        /// camelCase name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
