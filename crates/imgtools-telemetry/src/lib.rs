//! # imgtools-telemetry
//!
//! Client-side telemetry for the image import/export tools.
//!
//! - **Event model**: [`ToolEvent`] describes one tool invocation, with an
//!   optional [`InputParams`] union (one variant per tool action) and an
//!   optional [`OutputInfo`] summary.
//! - **Patching**: [`SharedEvent`] and [`update_project`] back-fill the
//!   project (and its obfuscated form) into whichever parameter variant is
//!   active, under a lock scoped to that one event.
//! - **Wire envelope**: [`wire::LogRequest`] wraps events for the collector,
//!   [`wire::LogResponse`] decodes its reply.
//!
//! ## Crate Position
//!
//! Depends on `imgtools-core` (IDs, hashing) and `imgtools-settings`
//! (envelope constants). Transport and retry scheduling live with the caller.

#![deny(unsafe_code)]

pub mod errors;
pub mod patch;
pub mod types;
pub mod wire;

pub use errors::{Result, TelemetryError};
pub use patch::{SharedEvent, update_project};
pub use types::{
    CommonParams, ImageExportParams, ImageImportParams, InputParams, InspectionResults,
    InstanceExportParams, InstanceImportParams, MachineImageExportParams,
    MachineImageImportParams, OnestepImageImportParams, OutputInfo, ToolEvent,
    WindowsUpgradeParams,
};
