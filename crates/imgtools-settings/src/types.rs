//! Settings type definitions.
//!
//! Field names are camelCase on disk. `#[serde(default)]` allows partial
//! files: missing fields keep their compiled default.

use serde::{Deserialize, Serialize};

/// Output format of the stderr log subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human readable output.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

/// Telemetry client settings.
///
/// `client_type` and `log_source` are the fixed envelope fields the
/// collector uses to route requests; they are agreed with the server side
/// and rarely change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TelemetrySettings {
    /// Master switch. When false no requests should be built.
    pub enabled: bool,
    /// `client_info.client_type` sent with every request.
    pub client_type: String,
    /// `log_source` sent with every request.
    pub log_source: i64,
    /// Minimum level for the stderr subscriber.
    pub log_level: String,
    /// Format for the stderr subscriber.
    pub log_format: LogFormat,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            client_type: "DESKTOP".to_string(),
            log_source: 1024,
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl TelemetrySettings {
    /// Check cross-field constraints the type system cannot express.
    pub fn validate(&self) -> crate::Result<()> {
        if self.client_type.trim().is_empty() {
            return Err(crate::SettingsError::InvalidValue {
                field: "clientType",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_source <= 0 {
            return Err(crate::SettingsError::InvalidValue {
                field: "logSource",
                reason: format!("must be positive, got {}", self.log_source),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings: TelemetrySettings =
            serde_json::from_str(r#"{"logSource": 7}"#).unwrap();
        assert_eq!(settings.log_source, 7);
        assert_eq!(settings.client_type, "DESKTOP");
        assert!(settings.enabled);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(TelemetrySettings::default()).unwrap();
        assert_eq!(json["clientType"], "DESKTOP");
        assert_eq!(json["logSource"], 1024);
        assert_eq!(json["logFormat"], "compact");
    }

    #[test]
    fn validate_rejects_empty_client_type() {
        let settings = TelemetrySettings {
            client_type: "  ".to_string(),
            ..TelemetrySettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_log_source() {
        let settings = TelemetrySettings {
            log_source: 0,
            ..TelemetrySettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("logSource"));
    }

    #[test]
    fn defaults_validate() {
        TelemetrySettings::default().validate().unwrap();
    }
}
