//! Output summary written once a tool finishes.

use serde::{Deserialize, Serialize};

use crate::types::params::is_false;

/// Values produced by a tool run.
///
/// Attached to the event at completion and never modified afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputInfo {
    /// Size of each import/export source, in GB.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources_size_gb: Vec<i64>,
    /// Size of each import/export target, in GB.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets_size_gb: Vec<i64>,
    /// Failure message of the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
    /// Failure message with user identifiers stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message_without_privacy_info: Option<String>,
    /// Detected format of the imported file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_file_format: Option<String>,
    /// Serial console output of worker instances. Only captured on failure.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub serial_outputs: Vec<String>,
    /// Inflation method (`qemu`, `api`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflation_type: Option<String>,
    /// Inflation durations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inflation_time_ms: Vec<i64>,
    /// Inflation durations of the shadow disk.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shadow_inflation_time_ms: Vec<i64>,
    /// Comparison result between the main and shadow disks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_disk_match_result: Option<String>,
    /// `UEFI_COMPATIBLE` was added to the image's guest OS features.
    #[serde(skip_serializing_if = "is_false")]
    pub is_uefi_compatible_image: bool,
    /// Inspection detected UEFI support.
    #[serde(skip_serializing_if = "is_false")]
    pub is_uefi_detected: bool,
}

impl OutputInfo {
    /// Summary of a failed run.
    ///
    /// `scrubbed` is the same message with user identifiers removed; it is the
    /// only form that may be aggregated across projects.
    pub fn failure(message: impl Into<String>, scrubbed: impl Into<String>) -> Self {
        Self {
            failure_message: Some(message.into()),
            failure_message_without_privacy_info: Some(scrubbed.into()),
            ..Self::default()
        }
    }

    /// Whether this summary describes a failed run.
    pub fn is_failure(&self) -> bool {
        self.failure_message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_serializes_empty() {
        let json = serde_json::to_string(&OutputInfo::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn failure_sets_both_messages() {
        let info = OutputInfo::failure("disk proj-a/d1 not found", "disk not found");
        assert!(info.is_failure());
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["failure_message"], "disk proj-a/d1 not found");
        assert_eq!(json["failure_message_without_privacy_info"], "disk not found");
        assert!(json.get("serial_outputs").is_none());
    }

    #[test]
    fn uefi_flags_emitted_only_when_set() {
        let info = OutputInfo {
            is_uefi_detected: true,
            inflation_time_ms: vec![1200],
            ..OutputInfo::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["is_uefi_detected"], true);
        assert!(json.get("is_uefi_compatible_image").is_none());
        assert_eq!(json["inflation_time_ms"][0], 1200);
    }
}
