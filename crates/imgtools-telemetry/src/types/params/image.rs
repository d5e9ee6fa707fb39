//! Image import/export parameters.

use serde::{Deserialize, Serialize};

use super::CommonParams;

/// Metadata determined by automated inspection of an imported disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionResults {
    /// Disk is bootable with BIOS.
    #[serde(skip_serializing_if = "super::is_false")]
    pub bios_bootable: bool,
    /// Disk is bootable with UEFI.
    #[serde(skip_serializing_if = "super::is_false")]
    pub uefi_bootable: bool,
    /// File system of the partition containing `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_fs: Option<String>,
}

/// Parameters of an image import.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageImportParams {
    /// Shared parameters.
    #[serde(flatten)]
    pub common: CommonParams,
    /// Name of the image to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    /// Import as a data disk, no OS translation.
    pub data_disk: bool,
    /// Target OS for translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    /// Source file URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    /// Source image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_image: Option<String>,
    /// Skip guest environment installation.
    pub no_guest_environment: bool,
    /// Image family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Image description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Worker instances run without an external IP.
    pub no_external_ip: bool,
    /// A KMS key was supplied.
    pub has_kms_key: bool,
    /// A KMS keyring was supplied.
    pub has_kms_keyring: bool,
    /// A KMS location was supplied.
    pub has_kms_location: bool,
    /// A KMS project was supplied.
    pub has_kms_project: bool,
    /// Storage location of the resulting image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    /// Disk inspection results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection_results: Option<InspectionResults>,
    /// Service account used by worker instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_service_account: Option<String>,
}

/// Parameters of an image export.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageExportParams {
    /// Shared parameters.
    #[serde(flatten)]
    pub common: CommonParams,
    /// Destination URI of the exported file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_uri: Option<String>,
    /// Image being exported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_image: Option<String>,
    /// Output disk format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Service account used by worker instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_service_account: Option<String>,
    /// Snapshot being exported instead of an image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_disk_snapshot: Option<String>,
}

/// Parameters of a single-step import from another cloud.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnestepImageImportParams {
    /// Shared parameters.
    #[serde(flatten)]
    pub common: CommonParams,
    /// Name of the image to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    /// Target OS for translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    /// Skip guest environment installation.
    pub no_guest_environment: bool,
    /// Image family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Image description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Worker instances run without an external IP.
    pub no_external_ip: bool,
    /// A KMS key was supplied.
    pub has_kms_key: bool,
    /// A KMS keyring was supplied.
    pub has_kms_keyring: bool,
    /// A KMS location was supplied.
    pub has_kms_location: bool,
    /// A KMS project was supplied.
    pub has_kms_project: bool,
    /// Storage location of the resulting image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    /// Service account used by worker instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_service_account: Option<String>,
    /// Source AMI ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_ami_id: Option<String>,
    /// Bucket the AMI is exported to before transfer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_ami_export_location: Option<String>,
    /// Path of an already exported AMI file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_source_ami_file_path: Option<String>,
}
