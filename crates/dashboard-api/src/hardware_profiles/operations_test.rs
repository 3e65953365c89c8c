//! Unit tests for HardwareProfile operations against the mock client

#[cfg(test)]
mod tests {
    use crate::error::K8sApiError;
    use crate::hardware_profiles::*;
    use crate::options::K8sApiOptions;
    use crds::*;
    use serde_json::json;

    const NAMESPACE: &str = "opendatahub";

    fn form(display_name: &str, enabled: bool, scheduling: Option<SchedulingSpec>) -> HardwareProfileForm {
        HardwareProfileForm {
            display_name: display_name.to_string(),
            enabled,
            description: Some("Small GPU profile".to_string()),
            spec: HardwareProfileSpec {
                identifiers: Vec::new(),
                scheduling,
            },
        }
    }

    fn node(zone: &str) -> SchedulingSpec {
        SchedulingSpec::Node(NodeSchedulingSpec {
            node_selector: [("zone".to_string(), zone.to_string())].into(),
            tolerations: Vec::new(),
        })
    }

    fn api() -> HardwareProfileApi<MockHardwareProfileClient> {
        HardwareProfileApi::new(MockHardwareProfileClient::new())
    }

    #[test]
    fn test_assemble_sets_annotations() {
        let visibility = vec!["workbench".to_string()];
        let profile = assemble_hardware_profile("", &form("GPU Small", false, None), NAMESPACE, &visibility).unwrap();

        assert_eq!(profile.metadata.name.as_deref(), Some("gpu-small"));
        assert_eq!(profile.metadata.namespace.as_deref(), Some(NAMESPACE));
        let map = profile.metadata.annotations.as_ref().unwrap();
        assert_eq!(map[annotations::DISPLAY_NAME], "GPU Small");
        assert_eq!(map[annotations::DESCRIPTION], "Small GPU profile");
        assert_eq!(map[annotations::DISABLED], "true");
        assert_eq!(map[annotations::DASHBOARD_FEATURE_VISIBILITY], r#"["workbench"]"#);
        let modified = &map[annotations::MODIFIED_DATE];
        assert!(chrono::DateTime::parse_from_rfc3339(modified).is_ok(), "Bad timestamp {}", modified);
        assert!(modified.ends_with('Z'));
        assert!(!profile.is_enabled());
    }

    #[test]
    fn test_assemble_keeps_explicit_name_and_skips_empty_description() {
        let mut data = form("GPU Small", true, None);
        data.description = Some(String::new());
        let profile = assemble_hardware_profile("custom", &data, NAMESPACE, &[]).unwrap();

        assert_eq!(profile.metadata.name.as_deref(), Some("custom"));
        let map = profile.metadata.annotations.as_ref().unwrap();
        assert!(!map.contains_key(annotations::DESCRIPTION));
        assert_eq!(map[annotations::DISABLED], "false");
        assert_eq!(map[annotations::DASHBOARD_FEATURE_VISIBILITY], "[]");
    }

    #[test]
    fn test_assemble_sets_type_meta() {
        let profile = assemble_hardware_profile("gpu", &form("GPU", true, None), NAMESPACE, &[]).unwrap();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["apiVersion"], "infrastructure.opendatahub.io/v1");
        assert_eq!(value["kind"], "HardwareProfile");
    }

    #[test]
    fn test_enablement_patch_body() {
        let patch = enablement_patch(false).unwrap();
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!([{"op": "replace", "path": "/metadata/annotations/opendatahub.io~1disabled", "value": "true"}])
        );
    }

    #[test]
    fn test_form_deserializes_flattened_spec() {
        let data: HardwareProfileForm = serde_json::from_value(json!({
            "displayName": "Queue profile",
            "enabled": true,
            "scheduling": {"type": "Queue", "kueue": {"localQueueName": "default"}}
        }))
        .unwrap();
        assert!(data.spec.scheduling.as_ref().and_then(SchedulingSpec::kueue).is_some());
        assert!(data.description.is_none());
    }

    #[tokio::test]
    async fn test_create_list_get() {
        let api = api();
        let created = api
            .create_hardware_profile("", &form("GPU Small", true, None), NAMESPACE, &[], &K8sApiOptions::default())
            .await
            .unwrap();
        assert_eq!(created.metadata.name.as_deref(), Some("gpu-small"));

        let listed = api.list_hardware_profiles(NAMESPACE).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(api.list_hardware_profiles("other").await.unwrap().is_empty());

        let fetched = api.get_hardware_profile("gpu-small", NAMESPACE).await.unwrap();
        assert_eq!(fetched.display_name(), "GPU Small");
    }

    #[tokio::test]
    async fn test_get_seeded_profile() {
        let api = api();
        let profile = assemble_hardware_profile("seeded", &form("Seeded", false, None), NAMESPACE, &[]).unwrap();
        api.client().add_profile(profile);
        assert_eq!(api.client().len(), 1);

        let fetched = api.get_hardware_profile("seeded", NAMESPACE).await.unwrap();
        assert!(!fetched.is_enabled());
        assert!(fetched.metadata.resource_version.is_some());
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let api = api();
        let data = form("GPU Small", true, None);
        api.create_hardware_profile("", &data, NAMESPACE, &[], &K8sApiOptions::default())
            .await
            .unwrap();
        let result = api
            .create_hardware_profile("", &data, NAMESPACE, &[], &K8sApiOptions::default())
            .await;
        assert!(matches!(result, Err(K8sApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_dry_run_create_does_not_persist() {
        let api = api();
        api.create_hardware_profile("", &form("GPU", true, None), NAMESPACE, &[], &K8sApiOptions::dry_run())
            .await
            .unwrap();
        assert!(api.client().is_empty());
    }

    #[tokio::test]
    async fn test_update_reconciles_against_existing() {
        let api = api();
        let existing = api
            .create_hardware_profile("gpu", &form("GPU", true, Some(node("a"))), NAMESPACE, &[], &K8sApiOptions::default())
            .await
            .unwrap();

        let updated = api
            .update_hardware_profile(
                &form("GPU renamed", true, None),
                &existing,
                NAMESPACE,
                &["pipelines".to_string()],
                &K8sApiOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(updated.display_name(), "GPU renamed");
        assert_eq!(updated.visibility(), vec!["pipelines".to_string()]);
        let node = updated.spec.scheduling.as_ref().and_then(SchedulingSpec::node).unwrap();
        assert!(node.node_selector.is_empty(), "Node selector is reset when not re-specified");

        let stored = api.client().stored(NAMESPACE, "gpu").unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_with_stale_copy_conflicts() {
        let api = api();
        let existing = api
            .create_hardware_profile("gpu", &form("GPU", true, None), NAMESPACE, &[], &K8sApiOptions::default())
            .await
            .unwrap();
        api.toggle_hardware_profile_enablement("gpu", NAMESPACE, false, &K8sApiOptions::default())
            .await
            .unwrap();

        let result = api
            .update_hardware_profile(&form("GPU", true, None), &existing, NAMESPACE, &[], &K8sApiOptions::default())
            .await;
        assert!(matches!(result, Err(K8sApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_toggle_enablement() {
        let api = api();
        api.create_hardware_profile("gpu", &form("GPU", true, None), NAMESPACE, &[], &K8sApiOptions::default())
            .await
            .unwrap();

        let disabled = api
            .toggle_hardware_profile_enablement("gpu", NAMESPACE, false, &K8sApiOptions::default())
            .await
            .unwrap();
        assert!(!disabled.is_enabled());

        let enabled = api
            .toggle_hardware_profile_enablement("gpu", NAMESPACE, true, &K8sApiOptions::default())
            .await
            .unwrap();
        assert!(enabled.is_enabled());
        assert_eq!(enabled.display_name(), "GPU", "Other annotations are untouched");
    }

    #[tokio::test]
    async fn test_delete() {
        let api = api();
        api.create_hardware_profile("gpu", &form("GPU", true, None), NAMESPACE, &[], &K8sApiOptions::default())
            .await
            .unwrap();

        let outcome = api
            .delete_hardware_profile("gpu", NAMESPACE, &K8sApiOptions::default())
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(matches!(
            api.get_hardware_profile("gpu", NAMESPACE).await,
            Err(K8sApiError::NotFound(_))
        ));
        assert!(matches!(
            api.delete_hardware_profile("gpu", NAMESPACE, &K8sApiOptions::default()).await,
            Err(K8sApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_with_finalizer_is_in_progress() {
        let api = api();
        let mut profile = assemble_hardware_profile("gpu", &form("GPU", true, None), NAMESPACE, &[]).unwrap();
        profile.metadata.finalizers = Some(vec!["opendatahub.io/cleanup".to_string()]);
        api.client().add_profile(profile);

        let outcome = api
            .delete_hardware_profile("gpu", NAMESPACE, &K8sApiOptions::default())
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::InProgress);
        assert!(api.get_hardware_profile("gpu", NAMESPACE).await.is_ok());
    }

    #[test]
    fn test_model_matches_crd() {
        let model = HardwareProfileApi::<MockHardwareProfileClient>::model();
        assert_eq!(model.kind_api_version(), "infrastructure.opendatahub.io/v1");
        assert_eq!(model.plural, "hardwareprofiles");
    }
}
