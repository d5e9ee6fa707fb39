//! Project back-filling for events already under construction.
//!
//! The project a tool operates on is often resolved after the event was
//! created (from flags, metadata server, or credentials). [`update_project`]
//! writes it, and its obfuscated form, into whichever parameter variant the
//! event carries.
//!
//! Locking is per event: [`SharedEvent`] wraps one [`ToolEvent`] in its own
//! mutex, so patching one event never contends with another. The whole
//! check-and-write runs under that lock, and [`SharedEvent::snapshot`] reads
//! under it too, so no reader can observe `project` without its matching
//! `obfuscated_project`.

use std::sync::Arc;

use imgtools_core::CorrelationId;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::errors::Result;
use crate::types::ToolEvent;

/// Set the project of `event`'s active parameter variant.
///
/// - `None` or an empty string is a no-op and does not take the lock;
///   previously set values stay.
/// - An event without input parameters is left unchanged.
/// - Otherwise `project` and `obfuscated_project` are written together.
///
/// Applying the same project again leaves the event unchanged. A different
/// project overwrites the previous one.
pub fn update_project(event: &Mutex<ToolEvent>, project: Option<&str>) {
    let Some(project) = project.filter(|p| !p.is_empty()) else {
        trace!("project unknown, skipping event patch");
        return;
    };

    let mut guard = event.lock();
    let patched = guard.apply_project(project);
    match patched {
        Some(variant) => debug!(event_id = %guard.id(), variant, "patched project into input params"),
        None => trace!(event_id = %guard.id(), "event has no input params, nothing to patch"),
    }
}

/// A [`ToolEvent`] shared between threads.
///
/// Cloning is cheap and every clone refers to the same event.
#[derive(Clone, Debug)]
pub struct SharedEvent {
    inner: Arc<Mutex<ToolEvent>>,
}

impl SharedEvent {
    /// Wrap `event` for shared access.
    pub fn new(event: ToolEvent) -> Self {
        Self {
            inner: Arc::new(Mutex::new(event)),
        }
    }

    /// Correlation ID of the wrapped event.
    pub fn id(&self) -> CorrelationId {
        self.inner.lock().id().clone()
    }

    /// See [`update_project`].
    pub fn update_project(&self, project: Option<&str>) {
        update_project(&self.inner, project);
    }

    /// Consistent copy of the event.
    pub fn snapshot(&self) -> ToolEvent {
        self.inner.lock().clone()
    }

    /// Serialize the event while holding its lock.
    pub fn to_json(&self) -> Result<String> {
        self.inner.lock().to_json()
    }

    /// Recover the event, cloning it if other handles are still alive.
    pub fn into_inner(self) -> ToolEvent {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner(),
            Err(shared) => shared.lock().clone(),
        }
    }
}

impl From<ToolEvent> for SharedEvent {
    fn from(event: ToolEvent) -> Self {
        Self::new(event)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
