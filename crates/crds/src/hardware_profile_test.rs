//! Unit tests for the HardwareProfile CRD types

#[cfg(test)]
mod tests {
    use crate::annotations;
    use crate::hardware_profile::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn profile_with_annotations(pairs: &[(&str, &str)]) -> HardwareProfile {
        let annotations: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        HardwareProfile {
            metadata: ObjectMeta {
                name: Some("gpu-small".to_string()),
                namespace: Some("opendatahub".to_string()),
                annotations: Some(annotations),
                ..Default::default()
            },
            spec: HardwareProfileSpec::default(),
        }
    }

    #[test]
    fn test_scheduling_queue_roundtrip_wire_format() {
        let scheduling = SchedulingSpec::Queue(KueueSchedulingSpec {
            local_queue_name: "default".to_string(),
            priority_class: None,
        });

        let value = serde_json::to_value(&scheduling).unwrap();
        assert_eq!(value, json!({"type": "Queue", "kueue": {"localQueueName": "default"}}));
    }

    #[test]
    fn test_scheduling_node_always_writes_selector_and_tolerations() {
        let scheduling = SchedulingSpec::Node(NodeSchedulingSpec::default());

        let value = serde_json::to_value(&scheduling).unwrap();
        assert_eq!(value, json!({"type": "Node", "node": {"nodeSelector": {}, "tolerations": []}}));
    }

    #[test]
    fn test_scheduling_type_wins_over_stale_block() {
        let scheduling: SchedulingSpec = serde_json::from_value(json!({
            "type": "Queue",
            "kueue": {"localQueueName": "team-a"},
            "node": {"nodeSelector": {"zone": "a"}}
        }))
        .unwrap();

        assert_eq!(scheduling.kueue().map(|k| k.local_queue_name.as_str()), Some("team-a"));
        assert!(scheduling.node().is_none(), "Node block must be dropped when type is Queue");
    }

    #[test]
    fn test_scheduling_inferred_without_type() {
        let scheduling: SchedulingSpec = serde_json::from_value(json!({
            "node": {"nodeSelector": {"zone": "a"}, "tolerations": []}
        }))
        .unwrap();

        assert_eq!(scheduling.scheduling_type(), SchedulingType::Node);
        assert_eq!(scheduling.node().unwrap().node_selector.get("zone").map(String::as_str), Some("a"));
    }

    #[test]
    fn test_scheduling_node_type_without_block_is_empty_node() {
        let scheduling: SchedulingSpec = serde_json::from_value(json!({"type": "Node"})).unwrap();
        assert_eq!(scheduling, SchedulingSpec::Node(NodeSchedulingSpec::default()));
    }

    #[test]
    fn test_scheduling_rejects_ambiguous_blocks() {
        let result: Result<SchedulingSpec, _> = serde_json::from_value(json!({
            "kueue": {"localQueueName": "q"},
            "node": {}
        }));
        assert!(result.is_err(), "Both strategies without a type must be rejected");
    }

    #[test]
    fn test_scheduling_rejects_queue_without_kueue() {
        let result: Result<SchedulingSpec, _> = serde_json::from_value(json!({"type": "Queue"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_spec_deserializes_identifiers() {
        let spec: HardwareProfileSpec = serde_json::from_value(json!({
            "identifiers": [
                {
                    "displayName": "CPU",
                    "identifier": "cpu",
                    "minCount": 1,
                    "maxCount": "4",
                    "defaultCount": 2,
                    "resourceType": "CPU"
                },
                {
                    "displayName": "GPU",
                    "identifier": "nvidia.com/gpu",
                    "minCount": 1,
                    "defaultCount": 1,
                    "resourceType": "Accelerator"
                }
            ]
        }))
        .unwrap();

        assert_eq!(spec.identifiers.len(), 2);
        assert_eq!(spec.identifiers[0].resource_type, Some(IdentifierResourceType::Cpu));
        assert!(spec.identifiers[1].max_count.is_none());
        assert!(spec.scheduling.is_none());
    }

    #[test]
    fn test_is_enabled_reads_inverted_annotation() {
        assert!(profile_with_annotations(&[]).is_enabled());
        assert!(profile_with_annotations(&[(annotations::DISABLED, "false")]).is_enabled());
        assert!(!profile_with_annotations(&[(annotations::DISABLED, "true")]).is_enabled());
    }

    #[test]
    fn test_visibility_parses_json_list() {
        let profile = profile_with_annotations(&[(
            annotations::DASHBOARD_FEATURE_VISIBILITY,
            r#"["workbench","model-serving"]"#,
        )]);
        assert_eq!(profile.visibility(), vec!["workbench".to_string(), "model-serving".to_string()]);

        let broken = profile_with_annotations(&[(annotations::DASHBOARD_FEATURE_VISIBILITY, "not json")]);
        assert!(broken.visibility().is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        assert_eq!(profile_with_annotations(&[]).display_name(), "gpu-small");
        let named = profile_with_annotations(&[(annotations::DISPLAY_NAME, "GPU small")]);
        assert_eq!(named.display_name(), "GPU small");
        assert_eq!(named.description(), None);
    }
}
