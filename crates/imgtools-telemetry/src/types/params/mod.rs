//! Per-action input parameters.
//!
//! [`InputParams`] holds exactly one action's parameters. It serializes
//! externally tagged, so the wire form is a single-key object such as
//! `{"image_import_input_params": {...}}`.

mod common;
mod image;
mod instance;
mod windows;

pub use common::CommonParams;
pub use image::{ImageExportParams, ImageImportParams, InspectionResults, OnestepImageImportParams};
pub use instance::{
    InstanceExportParams, InstanceImportParams, MachineImageExportParams,
    MachineImageImportParams,
};
pub use windows::WindowsUpgradeParams;

use serde::{Deserialize, Serialize};

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Input parameters of the tool action an event describes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputParams {
    /// Disk image import.
    #[serde(rename = "image_import_input_params")]
    ImageImport(ImageImportParams),
    /// Disk image export.
    #[serde(rename = "image_export_input_params")]
    ImageExport(ImageExportParams),
    /// OVF/OVA instance import.
    #[serde(rename = "instance_import_input_params")]
    InstanceImport(InstanceImportParams),
    /// OVF/OVA machine image import.
    #[serde(rename = "machine_image_import_input_params")]
    MachineImageImport(MachineImageImportParams),
    /// In-place Windows upgrade.
    #[serde(rename = "windows_upgrade_input_params")]
    WindowsUpgrade(WindowsUpgradeParams),
    /// Single-step import from another cloud.
    #[serde(rename = "onestep_image_import_input_params")]
    OnestepImageImport(OnestepImageImportParams),
    /// Instance export to OVF.
    #[serde(rename = "instance_export_input_params")]
    InstanceExport(InstanceExportParams),
    /// Machine image export to OVF.
    #[serde(rename = "machine_image_export_input_params")]
    MachineImageExport(MachineImageExportParams),
}

impl InputParams {
    /// Wire key of the active variant.
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::ImageImport(_) => "image_import_input_params",
            Self::ImageExport(_) => "image_export_input_params",
            Self::InstanceImport(_) => "instance_import_input_params",
            Self::MachineImageImport(_) => "machine_image_import_input_params",
            Self::WindowsUpgrade(_) => "windows_upgrade_input_params",
            Self::OnestepImageImport(_) => "onestep_image_import_input_params",
            Self::InstanceExport(_) => "instance_export_input_params",
            Self::MachineImageExport(_) => "machine_image_export_input_params",
        }
    }

    /// Common parameters of the active variant.
    pub fn common(&self) -> &CommonParams {
        match self {
            Self::ImageImport(p) => &p.common,
            Self::ImageExport(p) => &p.common,
            Self::InstanceImport(p) => &p.common,
            Self::MachineImageImport(p) => &p.common,
            Self::WindowsUpgrade(p) => &p.common,
            Self::OnestepImageImport(p) => &p.common,
            Self::InstanceExport(p) => &p.common,
            Self::MachineImageExport(p) => &p.common,
        }
    }

    pub(crate) fn common_mut(&mut self) -> &mut CommonParams {
        match self {
            Self::ImageImport(p) => &mut p.common,
            Self::ImageExport(p) => &mut p.common,
            Self::InstanceImport(p) => &mut p.common,
            Self::MachineImageImport(p) => &mut p.common,
            Self::WindowsUpgrade(p) => &mut p.common,
            Self::OnestepImageImport(p) => &mut p.common,
            Self::InstanceExport(p) => &mut p.common,
            Self::MachineImageExport(p) => &mut p.common,
        }
    }
}

impl From<ImageImportParams> for InputParams {
    fn from(p: ImageImportParams) -> Self {
        Self::ImageImport(p)
    }
}

impl From<ImageExportParams> for InputParams {
    fn from(p: ImageExportParams) -> Self {
        Self::ImageExport(p)
    }
}

impl From<InstanceImportParams> for InputParams {
    fn from(p: InstanceImportParams) -> Self {
        Self::InstanceImport(p)
    }
}

impl From<MachineImageImportParams> for InputParams {
    fn from(p: MachineImageImportParams) -> Self {
        Self::MachineImageImport(p)
    }
}

impl From<WindowsUpgradeParams> for InputParams {
    fn from(p: WindowsUpgradeParams) -> Self {
        Self::WindowsUpgrade(p)
    }
}

impl From<OnestepImageImportParams> for InputParams {
    fn from(p: OnestepImageImportParams) -> Self {
        Self::OnestepImageImport(p)
    }
}

impl From<InstanceExportParams> for InputParams {
    fn from(p: InstanceExportParams) -> Self {
        Self::InstanceExport(p)
    }
}

impl From<MachineImageExportParams> for InputParams {
    fn from(p: MachineImageExportParams) -> Self {
        Self::MachineImageExport(p)
    }
}
