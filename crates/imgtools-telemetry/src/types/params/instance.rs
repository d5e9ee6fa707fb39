//! Instance and machine image import/export parameters.

use serde::{Deserialize, Serialize};

use super::CommonParams;

/// Parameters of an OVF instance import.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceImportParams {
    /// Shared parameters.
    #[serde(flatten)]
    pub common: CommonParams,
    /// Name of the instance to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    /// Location of the OVF package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ovf_gcs_path: Option<String>,
    /// IP forwarding enabled.
    pub can_ip_forward: bool,
    /// Deletion protection enabled.
    pub deletion_protection: bool,
    /// Machine type override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,
    /// Network interface spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface: Option<String>,
    /// Network tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_tier: Option<String>,
    /// Static private IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_network_ip: Option<String>,
    /// Instance created without an external IP.
    #[serde(skip_serializing_if = "super::is_false")]
    pub no_external_ip: bool,
    /// Automatic restart disabled.
    pub no_restart_on_failure: bool,
    /// Target OS for translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    /// Shielded VM integrity monitoring.
    pub shielded_integrity_monitoring: bool,
    /// Shielded VM secure boot.
    pub shielded_secure_boot: bool,
    /// Shielded VM vTPM.
    pub shielded_vtpm: bool,
    /// Network tags, comma separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Boot disk KMS key supplied.
    pub has_boot_disk_kms_key: bool,
    /// Boot disk KMS keyring supplied.
    pub has_boot_disk_kms_keyring: bool,
    /// Boot disk KMS location supplied.
    pub has_boot_disk_kms_location: bool,
    /// Boot disk KMS project supplied.
    pub has_boot_disk_kms_project: bool,
    /// Skip guest environment installation.
    pub no_guest_environment: bool,
    /// Sole-tenant node affinity label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_affinity_label: Option<String>,
    /// Service account used by worker instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_service_account: Option<String>,
}

/// Parameters of an OVF machine image import.
///
/// Same shape as [`InstanceImportParams`] with a machine image target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineImageImportParams {
    /// Shared parameters.
    #[serde(flatten)]
    pub common: CommonParams,
    /// Name of the machine image to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_image_name: Option<String>,
    /// Location of the OVF package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ovf_gcs_path: Option<String>,
    /// IP forwarding enabled.
    pub can_ip_forward: bool,
    /// Deletion protection enabled.
    pub deletion_protection: bool,
    /// Machine type override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,
    /// Network interface spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface: Option<String>,
    /// Network tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_tier: Option<String>,
    /// Static private IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_network_ip: Option<String>,
    /// Created without an external IP.
    #[serde(skip_serializing_if = "super::is_false")]
    pub no_external_ip: bool,
    /// Automatic restart disabled.
    pub no_restart_on_failure: bool,
    /// Target OS for translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    /// Shielded VM integrity monitoring.
    pub shielded_integrity_monitoring: bool,
    /// Shielded VM secure boot.
    pub shielded_secure_boot: bool,
    /// Shielded VM vTPM.
    pub shielded_vtpm: bool,
    /// Network tags, comma separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Boot disk KMS key supplied.
    pub has_boot_disk_kms_key: bool,
    /// Boot disk KMS keyring supplied.
    pub has_boot_disk_kms_keyring: bool,
    /// Boot disk KMS location supplied.
    pub has_boot_disk_kms_location: bool,
    /// Boot disk KMS project supplied.
    pub has_boot_disk_kms_project: bool,
    /// Skip guest environment installation.
    pub no_guest_environment: bool,
    /// Sole-tenant node affinity label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_affinity_label: Option<String>,
    /// Hostname of the source machine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Storage location of the machine image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_image_storage_location: Option<String>,
    /// Service account used by worker instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_service_account: Option<String>,
}

/// Parameters of an instance export to OVF.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceExportParams {
    /// Shared parameters.
    #[serde(flatten)]
    pub common: CommonParams,
    /// Destination URI of the OVF package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_uri: Option<String>,
    /// Instance being exported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    /// OVF format (`ovf` or `ova`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ovf_format: Option<String>,
    /// Disk file format inside the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_export_format: Option<String>,
    /// Worker instances run without an external IP.
    #[serde(skip_serializing_if = "super::is_false")]
    pub no_external_ip: bool,
    /// OS of the exported instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}

/// Parameters of a machine image export to OVF.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineImageExportParams {
    /// Shared parameters.
    #[serde(flatten)]
    pub common: CommonParams,
    /// Destination URI of the OVF package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_uri: Option<String>,
    /// Machine image being exported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_image_name: Option<String>,
    /// OVF format (`ovf` or `ova`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ovf_format: Option<String>,
    /// Disk file format inside the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_export_format: Option<String>,
    /// Worker instances run without an external IP.
    #[serde(skip_serializing_if = "super::is_false")]
    pub no_external_ip: bool,
    /// OS of the exported machine image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}
