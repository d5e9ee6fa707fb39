//! Telemetry event type definitions.
//!
//! - [`ToolEvent`]: one record per tool invocation.
//! - [`InputParams`]: per-action parameter union, one variant per tool.
//! - [`CommonParams`]: fields shared by every parameter variant.
//! - [`OutputInfo`]: summary written once the tool completes.
//!
//! Field names on the wire are snake_case and fixed by the collector's
//! schema. Absent optional fields are omitted rather than sent as `null`.

pub mod event;
pub mod output;
pub mod params;
#[cfg(test)]
mod tests;

pub use event::ToolEvent;
pub use output::OutputInfo;
pub use params::{
    CommonParams, ImageExportParams, ImageImportParams, InputParams, InspectionResults,
    InstanceExportParams, InstanceImportParams, MachineImageExportParams,
    MachineImageImportParams, OnestepImageImportParams, WindowsUpgradeParams,
};
