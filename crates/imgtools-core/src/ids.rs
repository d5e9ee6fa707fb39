//! Correlation IDs.
//!
//! Every event a tool invocation emits carries the same [`CorrelationId`], so
//! the collector can group them. New values are UUID v7, which sort by
//! creation time.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Correlates every log line emitted by a single tool invocation.
///
/// Serialized as a bare string. IDs read back from the wire are kept
/// verbatim and are not required to be UUIDs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Fresh time-ordered ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// The ID as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
