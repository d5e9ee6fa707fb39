//! Fields shared by every tool action's parameters.

use imgtools_core::obfuscate;
use serde::{Deserialize, Serialize};

/// Parameters common to all tool actions.
///
/// Embedded in each action's parameter struct and flattened into the same
/// JSON object on the wire.
///
/// `project` and `obfuscated_project` are private: they can only be written
/// together through [`set_project`](Self::set_project), so the obfuscated
/// value always matches the raw one. Decoding goes through the same path:
/// a received `obfuscated_project` is discarded and recomputed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DecodedCommonParams")]
pub struct CommonParams {
    /// Calling client (e.g. `gcloud`, `api`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Version of the calling client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_version: Option<String>,
    /// VPC network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// VPC subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
    /// Compute zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// Workflow timeout as passed by the user (e.g. `2h`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    obfuscated_project: Option<String>,
    /// User supplied labels, serialized as `k=v,...`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    /// Scratch storage location for intermediate files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratch_bucket_gcs_path: Option<String>,
    /// Credential file reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth: Option<String>,
    /// Compute API endpoint override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_endpoint_override: Option<String>,
    /// Storage logging disabled.
    pub disable_gcs_logging: bool,
    /// Cloud logging disabled.
    pub disable_cloud_logging: bool,
    /// Stdout logging disabled.
    pub disable_stdout_logging: bool,
}

impl CommonParams {
    /// Project identifier, if known.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Obfuscated form of [`project`](Self::project).
    pub fn obfuscated_project(&self) -> Option<&str> {
        self.obfuscated_project.as_deref()
    }

    /// Set the project and recompute its obfuscated form.
    ///
    /// An empty `project` means "unknown" and leaves both fields untouched.
    pub fn set_project(&mut self, project: &str) {
        if project.is_empty() {
            return;
        }
        self.obfuscated_project = Some(obfuscate(project));
        self.project = Some(project.to_owned());
    }

    /// Builder form of [`set_project`](Self::set_project).
    #[must_use]
    pub fn with_project(mut self, project: &str) -> Self {
        self.set_project(project);
        self
    }
}

/// Wire form accepted when decoding [`CommonParams`].
///
/// Has no `obfuscated_project`: that key is ignored on input and derived
/// from `project` in the `From` conversion.
#[derive(Default, Deserialize)]
#[serde(default)]
struct DecodedCommonParams {
    client_id: Option<String>,
    client_version: Option<String>,
    network: Option<String>,
    subnet: Option<String>,
    zone: Option<String>,
    timeout: Option<String>,
    project: Option<String>,
    labels: Option<String>,
    scratch_bucket_gcs_path: Option<String>,
    oauth: Option<String>,
    compute_endpoint_override: Option<String>,
    disable_gcs_logging: bool,
    disable_cloud_logging: bool,
    disable_stdout_logging: bool,
}

impl From<DecodedCommonParams> for CommonParams {
    fn from(wire: DecodedCommonParams) -> Self {
        let mut common = Self {
            client_id: wire.client_id,
            client_version: wire.client_version,
            network: wire.network,
            subnet: wire.subnet,
            zone: wire.zone,
            timeout: wire.timeout,
            project: None,
            obfuscated_project: None,
            labels: wire.labels,
            scratch_bucket_gcs_path: wire.scratch_bucket_gcs_path,
            oauth: wire.oauth,
            compute_endpoint_override: wire.compute_endpoint_override,
            disable_gcs_logging: wire.disable_gcs_logging,
            disable_cloud_logging: wire.disable_cloud_logging,
            disable_stdout_logging: wire.disable_stdout_logging,
        };
        if let Some(project) = wire.project.as_deref() {
            common.set_project(project);
        }
        common
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_project() {
        let common = CommonParams::default();
        assert_eq!(common.project(), None);
        assert_eq!(common.obfuscated_project(), None);
    }

    #[test]
    fn set_project_writes_both_fields() {
        let mut common = CommonParams::default();
        common.set_project("proj-1");
        assert_eq!(common.project(), Some("proj-1"));
        assert_eq!(common.obfuscated_project(), Some(obfuscate("proj-1").as_str()));
    }

    #[test]
    fn set_project_overwrites() {
        let mut common = CommonParams::default().with_project("old");
        common.set_project("new");
        assert_eq!(common.project(), Some("new"));
        assert_eq!(common.obfuscated_project(), Some(obfuscate("new").as_str()));
    }

    #[test]
    fn empty_fields_are_omitted() {
        let json = serde_json::to_value(CommonParams::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(json["disable_gcs_logging"], false);
        assert_eq!(json["disable_cloud_logging"], false);
        assert_eq!(json["disable_stdout_logging"], false);
    }

    #[test]
    fn empty_project_is_ignored() {
        let mut common = CommonParams::default();
        common.set_project("");
        assert_eq!(common.project(), None);
        assert_eq!(common.obfuscated_project(), None);

        common.set_project("kept");
        common.set_project("");
        assert_eq!(common.project(), Some("kept"));
        assert_eq!(common.obfuscated_project(), Some(obfuscate("kept").as_str()));
    }

    #[test]
    fn decoded_obfuscated_project_without_project_is_dropped() {
        let common: CommonParams =
            serde_json::from_str(r#"{"obfuscated_project": "forged", "zone": "z1"}"#).unwrap();
        assert_eq!(common.project(), None);
        assert_eq!(common.obfuscated_project(), None);
        assert_eq!(common.zone.as_deref(), Some("z1"));
    }

    #[test]
    fn decoded_obfuscated_project_is_recomputed() {
        let common: CommonParams = serde_json::from_str(
            r#"{"project": "proj-9", "obfuscated_project": "forged", "disable_gcs_logging": true}"#,
        )
        .unwrap();
        assert_eq!(common.project(), Some("proj-9"));
        assert_eq!(common.obfuscated_project(), Some(obfuscate("proj-9").as_str()));
        assert!(common.disable_gcs_logging);
    }

    #[test]
    fn decoded_empty_project_is_absent() {
        let common: CommonParams = serde_json::from_str(r#"{"project": ""}"#).unwrap();
        assert_eq!(common, CommonParams::default());
    }
}
