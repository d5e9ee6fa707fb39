//! Telemetry error types.
//!
//! The event model and the patcher are total; only JSON encoding and
//! decoding at the wire boundary can fail.

use thiserror::Error;

/// Errors raised while encoding or decoding telemetry payloads.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// JSON encode/decode failure.
    #[error("telemetry JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err: TelemetryError = json_err.into();
        assert!(matches!(err, TelemetryError::Json(_)));
        assert!(err.to_string().starts_with("telemetry JSON error"));
    }
}
