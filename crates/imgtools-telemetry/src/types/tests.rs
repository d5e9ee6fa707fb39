//! Tests for ToolEvent construction, serialization and the parameter union.

#[cfg(test)]
mod tool_event_tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use crate::types::{
        CommonParams, ImageExportParams, ImageImportParams, InputParams, InspectionResults,
        InstanceImportParams, OutputInfo, ToolEvent, WindowsUpgradeParams,
    };

    fn image_import(name: &str) -> ImageImportParams {
        ImageImportParams {
            image_name: Some(name.into()),
            ..ImageImportParams::default()
        }
    }

    #[test]
    fn new_event_has_fresh_id_and_empty_optionals() {
        let a = ToolEvent::new("ImageImport");
        let b = ToolEvent::new("ImageImport");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.tool_action(), "ImageImport");
        assert_eq!(a.status(), "");
        assert_eq!(a.elapsed_time_ms(), 0);
        assert!(a.event_time_ms() > 0);
        assert!(a.input_params().is_none());
        assert!(a.output_info().is_none());
    }

    #[test]
    fn top_level_fields_always_emitted() {
        let event = ToolEvent::new("ImageExport").with_event_time_ms(42);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], event.id().as_str());
        assert_eq!(json["cloud_build_id"], "");
        assert_eq!(json["tool_action"], "ImageExport");
        assert_eq!(json["status"], "");
        assert_eq!(json["elapsed_time_ms"], 0);
        assert_eq!(json["event_time_ms"], 42);
        assert!(json.get("input_params").is_none());
        assert!(json.get("output_info").is_none());
    }

    #[test]
    fn input_params_wire_shape_is_single_key() {
        let event = ToolEvent::new("ImageImport").with_input_params(image_import("disk1"));
        let json = serde_json::to_value(&event).unwrap();
        let params = json["input_params"].as_object().unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(
            params["image_import_input_params"]["image_name"],
            json!("disk1")
        );
    }

    #[test]
    fn common_params_are_flattened() {
        let mut common = CommonParams::default().with_project("proj-7");
        common.zone = Some("us-central1-a".into());
        let params = ImageExportParams {
            common,
            destination_uri: Some("gs://bucket/out.vmdk".into()),
            ..ImageExportParams::default()
        };
        let json = serde_json::to_value(InputParams::from(params)).unwrap();
        let inner = &json["image_export_input_params"];
        assert_eq!(inner["zone"], "us-central1-a");
        assert_eq!(inner["project"], "proj-7");
        assert!(inner["obfuscated_project"].is_string());
        assert_eq!(inner["destination_uri"], "gs://bucket/out.vmdk");
        assert!(inner.get("common").is_none());
    }

    #[test]
    fn absent_optionals_are_omitted_not_null() {
        let event = ToolEvent::new("WindowsUpgrade").with_input_params(WindowsUpgradeParams::default());
        let text = event.to_json().unwrap();
        assert!(!text.contains("null"));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let inner = json["input_params"]["windows_upgrade_input_params"]
            .as_object()
            .unwrap();
        assert!(!inner.contains_key("source_os"));
        assert!(!inner.contains_key("project"));
        assert_eq!(inner["auto_rollback"], false);
    }

    #[test]
    fn omit_if_false_bools() {
        let mut params = InstanceImportParams::default();
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("no_external_ip").is_none());
        assert_eq!(json["can_ip_forward"], false);

        params.no_external_ip = true;
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["no_external_ip"], true);
    }

    #[test]
    fn roundtrip_preserves_set_fields() {
        let event = ToolEvent::new("ImageImport")
            .with_status("Success")
            .with_cloud_build_id("build-9")
            .with_elapsed_time_ms(1500)
            .with_input_params(ImageImportParams {
                common: CommonParams::default().with_project("p"),
                data_disk: true,
                inspection_results: Some(InspectionResults {
                    uefi_bootable: true,
                    root_fs: Some("ext4".into()),
                    ..InspectionResults::default()
                }),
                ..image_import("disk1")
            })
            .with_output_info(OutputInfo {
                sources_size_gb: vec![10],
                targets_size_gb: vec![10],
                import_file_format: Some("vmdk".into()),
                ..OutputInfo::default()
            });

        let text = event.to_json().unwrap();
        let back = ToolEvent::from_json(&text).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn from_json_accepts_collector_shape() {
        let text = json!({
            "id": "evt-1",
            "cloud_build_id": "",
            "tool_action": "InstanceExport",
            "status": "Start",
            "elapsed_time_ms": 0,
            "event_time_ms": 1_700_000_000_000_u64,
            "input_params": {
                "instance_export_input_params": {
                    "instance_name": "vm-1",
                    "ovf_format": "ova",
                    "disable_gcs_logging": true
                }
            }
        })
        .to_string();
        let event = ToolEvent::from_json(&text).unwrap();
        assert_eq!(event.id().as_str(), "evt-1");
        assert_matches!(
            event.input_params(),
            Some(InputParams::InstanceExport(p)) if p.instance_name.as_deref() == Some("vm-1")
                && p.common.disable_gcs_logging
        );
    }

    #[test]
    fn from_json_empty_input_params_is_none() {
        for params in [json!({}), serde_json::Value::Null] {
            let text = json!({
                "id": "evt-2",
                "tool_action": "ImageImport",
                "status": "Start",
                "elapsed_time_ms": 0,
                "event_time_ms": 0,
                "input_params": params
            })
            .to_string();
            let event = ToolEvent::from_json(&text).unwrap();
            assert!(event.input_params().is_none(), "{text}");
            assert!(!event.to_json().unwrap().contains("input_params"));
        }
    }

    #[test]
    fn from_json_recomputes_obfuscated_project() {
        let text = json!({
            "id": "evt-3",
            "tool_action": "ImageExport",
            "status": "Success",
            "elapsed_time_ms": 5,
            "event_time_ms": 0,
            "input_params": {
                "image_export_input_params": {
                    "obfuscated_project": "forged",
                    "zone": "us-east1-b"
                }
            }
        })
        .to_string();
        let event = ToolEvent::from_json(&text).unwrap();
        let common = event.input_params().unwrap().common();
        assert_eq!(common.project(), None);
        assert_eq!(common.obfuscated_project(), None);
        assert_eq!(common.zone.as_deref(), Some("us-east1-b"));
    }

    #[test]
    fn from_json_rejects_unknown_variant() {
        let text = json!({
            "id": "evt-1",
            "tool_action": "x",
            "status": "",
            "elapsed_time_ms": 0,
            "event_time_ms": 0,
            "input_params": { "disk_resize_input_params": {} }
        })
        .to_string();
        assert!(ToolEvent::from_json(&text).is_err());
    }

    #[test]
    fn wire_keys_match_serialized_tag() {
        let all: Vec<InputParams> = vec![
            ImageImportParams::default().into(),
            ImageExportParams::default().into(),
            InstanceImportParams::default().into(),
            crate::types::MachineImageImportParams::default().into(),
            WindowsUpgradeParams::default().into(),
            crate::types::OnestepImageImportParams::default().into(),
            crate::types::InstanceExportParams::default().into(),
            crate::types::MachineImageExportParams::default().into(),
        ];
        for params in all {
            let json = serde_json::to_value(&params).unwrap();
            let obj = json.as_object().unwrap();
            assert_eq!(obj.len(), 1);
            assert!(obj.contains_key(params.wire_key()), "{}", params.wire_key());
        }
    }
}
