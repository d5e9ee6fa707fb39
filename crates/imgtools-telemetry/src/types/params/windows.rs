//! Windows in-place upgrade parameters.

use serde::{Deserialize, Serialize};

use super::CommonParams;

/// Parameters of a Windows upgrade.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsUpgradeParams {
    /// Shared parameters.
    #[serde(flatten)]
    pub common: CommonParams,
    /// OS version before the upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_os: Option<String>,
    /// OS version after the upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_os: Option<String>,
    /// Instance being upgraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Snapshot the machine before upgrading.
    pub create_machine_backup: bool,
    /// Restore the backup if the upgrade fails.
    pub auto_rollback: bool,
    /// Use pre-release install media.
    pub use_staging_install_media: bool,
}
