//! Response envelope.
//!
//! `NextRequestWaitMillis` is an integer encoded as a JSON string.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::Result;

/// Server instruction for a request the client sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseAction {
    /// Retry the request later, via normal scheduling.
    RetryRequestLater,
    /// Delete the request: it succeeded or cannot be retried.
    DeleteRequest,
    /// Action the client does not understand. Delete the request rather
    /// than retry, so an outdated client cannot loop forever.
    // serde requires the catch-all to be the last variant
    #[serde(rename = "RESPONSE_ACTION_UNKNOWN", other)]
    Unknown,
}

impl ResponseAction {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "RESPONSE_ACTION_UNKNOWN",
            Self::RetryRequestLater => "RETRY_REQUEST_LATER",
            Self::DeleteRequest => "DELETE_REQUEST",
        }
    }

    /// Whether the pending request should be kept for a later attempt.
    pub fn should_retry(self) -> bool {
        matches!(self, Self::RetryRequestLater)
    }
}

impl fmt::Display for ResponseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request detail in a [`LogResponse`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResponseDetails {
    /// What to do with the request.
    #[serde(rename = "ResponseAction")]
    pub response_action: ResponseAction,
}

/// Collector reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResponse {
    /// Minimum wait before the next request, in milliseconds.
    #[serde(rename = "NextRequestWaitMillis", with = "string_i64")]
    pub next_request_wait_millis: i64,
    /// Instructions for the request just sent.
    #[serde(rename = "LogResponseDetails", default)]
    pub log_response_details: Vec<LogResponseDetails>,
}

impl LogResponse {
    /// Decode a response body.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode a response body.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Wait before the next request. Negative values mean no wait.
    pub fn next_request_wait(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.next_request_wait_millis).unwrap_or(0))
    }

    /// Actions in server order.
    pub fn actions(&self) -> impl Iterator<Item = ResponseAction> + '_ {
        self.log_response_details.iter().map(|d| d.response_action)
    }

    /// Whether any detail asks for the request to be retried.
    pub fn should_retry(&self) -> bool {
        self.actions().any(ResponseAction::should_retry)
    }
}

mod string_i64 {
    use super::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        Str(String),
        Int(i64),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(super) fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match StringOrInt::deserialize(deserializer)? {
            StringOrInt::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
            StringOrInt::Int(n) => Ok(n),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
