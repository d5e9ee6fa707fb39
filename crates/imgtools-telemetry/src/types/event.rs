//! The [`ToolEvent`] record.
//!
//! One event describes one invocation of a tool. It is serialized as JSON
//! and carried as a string inside the collector's request envelope (see
//! [`crate::wire`]).

use std::time::Duration;

use chrono::Utc;
use imgtools_core::CorrelationId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::{InputParams, OutputInfo};
use crate::errors::Result;

/// Telemetry record of a single tool invocation.
///
/// Built with [`ToolEvent::new`] and the consuming `with_*` methods. Once
/// built, the only mutation is project patching through
/// [`SharedEvent`](crate::SharedEvent) or [`update_project`](crate::update_project).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEvent {
    id: CorrelationId,
    #[serde(default)]
    cloud_build_id: String,
    tool_action: String,
    status: String,
    elapsed_time_ms: u64,
    event_time_ms: u64,
    #[serde(
        default,
        deserialize_with = "empty_params_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    input_params: Option<InputParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output_info: Option<OutputInfo>,
}

impl ToolEvent {
    /// Start an event for `tool_action` with a fresh correlation ID.
    ///
    /// `event_time_ms` is the current wall clock; everything else is empty.
    pub fn new(tool_action: impl Into<String>) -> Self {
        Self {
            id: CorrelationId::new(),
            cloud_build_id: String::new(),
            tool_action: tool_action.into(),
            status: String::new(),
            elapsed_time_ms: 0,
            event_time_ms: u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0),
            input_params: None,
            output_info: None,
        }
    }

    /// Set the status (e.g. `Start`, `Success`, `Failure`).
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the ID of the build running the tool.
    #[must_use]
    pub fn with_cloud_build_id(mut self, cloud_build_id: impl Into<String>) -> Self {
        self.cloud_build_id = cloud_build_id.into();
        self
    }

    /// Set the elapsed time in milliseconds.
    #[must_use]
    pub fn with_elapsed_time_ms(mut self, elapsed_time_ms: u64) -> Self {
        self.elapsed_time_ms = elapsed_time_ms;
        self
    }

    /// Set the elapsed time from a [`Duration`], saturating at `u64::MAX` ms.
    #[must_use]
    pub fn with_elapsed(self, elapsed: Duration) -> Self {
        let ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.with_elapsed_time_ms(ms)
    }

    /// Override the event timestamp (milliseconds since the Unix epoch).
    #[must_use]
    pub fn with_event_time_ms(mut self, event_time_ms: u64) -> Self {
        self.event_time_ms = event_time_ms;
        self
    }

    /// Attach the tool's input parameters.
    #[must_use]
    pub fn with_input_params(mut self, params: impl Into<InputParams>) -> Self {
        self.input_params = Some(params.into());
        self
    }

    /// Attach the output summary.
    #[must_use]
    pub fn with_output_info(mut self, output: OutputInfo) -> Self {
        self.output_info = Some(output);
        self
    }

    /// Correlation ID shared by all log lines of this invocation.
    pub fn id(&self) -> &CorrelationId {
        &self.id
    }

    /// Build ID, empty when not running under a build.
    pub fn cloud_build_id(&self) -> &str {
        &self.cloud_build_id
    }

    /// Tool action this event describes.
    pub fn tool_action(&self) -> &str {
        &self.tool_action
    }

    /// Status string.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_time_ms(&self) -> u64 {
        self.elapsed_time_ms
    }

    /// Event timestamp in milliseconds since the Unix epoch.
    pub fn event_time_ms(&self) -> u64 {
        self.event_time_ms
    }

    /// Input parameters, if any.
    pub fn input_params(&self) -> Option<&InputParams> {
        self.input_params.as_ref()
    }

    /// Output summary, if the tool has completed.
    pub fn output_info(&self) -> Option<&OutputInfo> {
        self.output_info.as_ref()
    }

    /// Write `project` into the active parameter variant.
    ///
    /// Returns the wire key of the patched variant, or `None` when the event
    /// carries no parameters. Callers must hold the event's lock.
    pub(crate) fn apply_project(&mut self, project: &str) -> Option<&'static str> {
        let params = self.input_params.as_mut()?;
        params.common_mut().set_project(project);
        Some(params.wire_key())
    }

    /// Serialize to the canonical JSON carried in `source_extension_json`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse an event from its canonical JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// `null` and `{}` both mean "no parameter variant".
fn empty_params_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<InputParams>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => InputParams::deserialize(value)
            .map(Some)
            .map_err(D::Error::custom),
    }
}
