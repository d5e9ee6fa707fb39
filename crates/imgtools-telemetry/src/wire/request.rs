//! Request envelope.

use chrono::Utc;
use imgtools_settings::TelemetrySettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;
use crate::patch::SharedEvent;
use crate::types::ToolEvent;

/// Identifies the client library to the collector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Client library type, agreed with the server side.
    pub client_type: String,
}

/// One event inside a [`LogRequest`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Event timestamp, milliseconds since the Unix epoch.
    pub event_time_ms: i64,
    /// Process uptime when the event was recorded.
    pub event_uptime_ms: i64,
    /// The [`ToolEvent`] serialized as JSON.
    pub source_extension_json: String,
}

impl LogEvent {
    /// Wrap `event`, serializing it into `source_extension_json`.
    pub fn from_event(event: &ToolEvent, event_uptime_ms: i64) -> Result<Self> {
        Ok(Self {
            event_time_ms: i64::try_from(event.event_time_ms()).unwrap_or(i64::MAX),
            event_uptime_ms,
            source_extension_json: event.to_json()?,
        })
    }

    /// Decode the carried [`ToolEvent`].
    pub fn decode_event(&self) -> Result<ToolEvent> {
        ToolEvent::from_json(&self.source_extension_json)
    }
}

/// Body of a request to the log collector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRequest {
    /// Client identification.
    pub client_info: ClientInfo,
    /// Log source the collector files these events under.
    pub log_source: i64,
    /// Time the request was built, milliseconds since the Unix epoch.
    pub request_time_ms: i64,
    /// Carried events.
    pub log_event: Vec<LogEvent>,
}

impl LogRequest {
    /// Empty request stamped with the current time.
    pub fn new(client_type: impl Into<String>, log_source: i64) -> Self {
        Self {
            client_info: ClientInfo {
                client_type: client_type.into(),
            },
            log_source,
            request_time_ms: Utc::now().timestamp_millis(),
            log_event: Vec::new(),
        }
    }

    /// Empty request using the envelope constants from `settings`.
    ///
    /// Returns `None` when telemetry is disabled.
    pub fn from_settings(settings: &TelemetrySettings) -> Option<Self> {
        if !settings.enabled {
            debug!("telemetry disabled, not building log request");
            return None;
        }
        Some(Self::new(settings.client_type.clone(), settings.log_source))
    }

    /// Append `event`.
    pub fn push_event(&mut self, event: &ToolEvent, event_uptime_ms: i64) -> Result<()> {
        self.log_event.push(LogEvent::from_event(event, event_uptime_ms)?);
        Ok(())
    }

    /// Append a consistent snapshot of a shared event.
    pub fn push_shared(&mut self, event: &SharedEvent, event_uptime_ms: i64) -> Result<()> {
        self.push_event(&event.snapshot(), event_uptime_ms)
    }

    /// Number of carried events.
    pub fn len(&self) -> usize {
        self.log_event.len()
    }

    /// Whether the request carries no events.
    pub fn is_empty(&self) -> bool {
        self.log_event.is_empty()
    }

    /// Encode the request body.
    pub fn to_json(&self) -> Result<String> {
        let body = serde_json::to_string(self)?;
        debug!(events = self.log_event.len(), bytes = body.len(), "encoded log request");
        Ok(body)
    }

    /// Decode a request body.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
