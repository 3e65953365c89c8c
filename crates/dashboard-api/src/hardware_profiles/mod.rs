//! HardwareProfile operations
//!
//! Thin layer over a [`HardwareProfileClientTrait`] implementation:
//! assembling resources from the dashboard form, reconciling updates against
//! the persisted copy and toggling enablement with a JSON patch.

mod client;
#[cfg(any(test, feature = "test-util"))]
mod mock;
mod reconcile;
#[path = "trait.rs"]
mod profile_trait;
mod operations_test;

pub use client::KubeHardwareProfileClient;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockHardwareProfileClient;
pub use profile_trait::{DeleteOutcome, HardwareProfileClientTrait};
pub use reconcile::{clean_previous_spec, reconcile_hardware_profile, reconcile_spec};

use crate::error::K8sApiError;
use crate::k8s_utils::translate_display_name_for_k8s;
use crate::model::K8sModel;
use crate::options::K8sApiOptions;
use chrono::{SecondsFormat, Utc};
use crds::{annotations, HardwareProfile, HardwareProfileSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info};

/// JSON pointer of the disabled annotation (`/` in the key escaped as `~1`)
pub const DISABLED_ANNOTATION_PATH: &str = "/metadata/annotations/opendatahub.io~1disabled";

/// Dashboard form data for a hardware profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareProfileForm {
    /// Human readable name
    pub display_name: String,

    /// Whether the profile is offered to users
    pub enabled: bool,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Identifiers and scheduling
    #[serde(flatten)]
    pub spec: HardwareProfileSpec,
}

/// Build a HardwareProfile from form data.
///
/// An empty `name` is derived from the display name. `visibility` is stored
/// as a JSON list; an empty list means visible everywhere.
pub fn assemble_hardware_profile(
    name: &str,
    form: &HardwareProfileForm,
    namespace: &str,
    visibility: &[String],
) -> Result<HardwareProfile, K8sApiError> {
    let name = if name.is_empty() {
        translate_display_name_for_k8s(&form.display_name)
    } else {
        name.to_string()
    };

    let mut annotation_map = BTreeMap::new();
    annotation_map.insert(annotations::DISPLAY_NAME.to_string(), form.display_name.clone());
    if let Some(description) = form.description.as_deref().filter(|d| !d.is_empty()) {
        annotation_map.insert(annotations::DESCRIPTION.to_string(), description.to_string());
    }
    annotation_map.insert(annotations::DISABLED.to_string(), (!form.enabled).to_string());
    annotation_map.insert(
        annotations::MODIFIED_DATE.to_string(),
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    );
    annotation_map.insert(
        annotations::DASHBOARD_FEATURE_VISIBILITY.to_string(),
        serde_json::to_string(visibility)?,
    );

    let mut profile = HardwareProfile::new(&name, form.spec.clone());
    profile.metadata = ObjectMeta {
        name: Some(name),
        namespace: Some(namespace.to_string()),
        annotations: Some(annotation_map),
        ..Default::default()
    };
    Ok(profile)
}

/// JSON patch setting the disabled annotation to the inverse of `enabled`
pub fn enablement_patch(enabled: bool) -> Result<json_patch::Patch, K8sApiError> {
    Ok(serde_json::from_value(serde_json::json!([
        {
            "op": "replace",
            "path": DISABLED_ANNOTATION_PATH,
            "value": (!enabled).to_string(),
        }
    ]))?)
}

/// HardwareProfile operations over a client implementation
pub struct HardwareProfileApi<C> {
    client: C,
}

impl<C: HardwareProfileClientTrait> HardwareProfileApi<C> {
    /// Creates a new API instance.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Model descriptor of the HardwareProfile resource
    pub fn model() -> K8sModel {
        K8sModel::of::<HardwareProfile>()
    }

    /// Access the underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Lists the hardware profiles of a namespace.
    pub async fn list_hardware_profiles(&self, namespace: &str) -> Result<Vec<HardwareProfile>, K8sApiError> {
        self.client.list(namespace).await
    }

    /// Fetches a single hardware profile.
    pub async fn get_hardware_profile(&self, name: &str, namespace: &str) -> Result<HardwareProfile, K8sApiError> {
        self.client.get(namespace, name).await
    }

    /// Assembles a profile from form data and creates it.
    pub async fn create_hardware_profile(
        &self,
        name: &str,
        form: &HardwareProfileForm,
        namespace: &str,
        visibility: &[String],
        opts: &K8sApiOptions,
    ) -> Result<HardwareProfile, K8sApiError> {
        let resource = assemble_hardware_profile(name, form, namespace, visibility)?;
        self.create_hardware_profile_from_resource(&resource, opts).await
    }

    /// Creates a profile from a complete resource (e.g. an imported manifest).
    pub async fn create_hardware_profile_from_resource(
        &self,
        resource: &HardwareProfile,
        opts: &K8sApiOptions,
    ) -> Result<HardwareProfile, K8sApiError> {
        let name = resource.metadata.name.as_deref().unwrap_or("<unknown>");
        let created = opts
            .bounded("create HardwareProfile", self.client.create(resource, opts))
            .await
            .inspect_err(|e| error!("Failed to create HardwareProfile {}: {}", name, e))?;
        info!("Created HardwareProfile {}", name);
        Ok(created)
    }

    /// Updates `existing` to the form data.
    ///
    /// The form is assembled under the existing name, reconciled against the
    /// persisted copy and sent as a full replace.
    pub async fn update_hardware_profile(
        &self,
        form: &HardwareProfileForm,
        existing: &HardwareProfile,
        namespace: &str,
        visibility: &[String],
        opts: &K8sApiOptions,
    ) -> Result<HardwareProfile, K8sApiError> {
        let name = existing
            .metadata
            .name
            .as_deref()
            .ok_or_else(|| K8sApiError::InvalidResource("HardwareProfile missing name".to_string()))?;

        let desired = assemble_hardware_profile(name, form, namespace, visibility)?;
        let resource = reconcile_hardware_profile(existing, &desired)?;

        let updated = opts
            .bounded("update HardwareProfile", self.client.replace(&resource, opts))
            .await
            .inspect_err(|e| error!("Failed to update HardwareProfile {}/{}: {}", namespace, name, e))?;
        info!("Updated HardwareProfile {}/{}", namespace, name);
        Ok(updated)
    }

    /// Enables or disables a profile by patching the disabled annotation.
    pub async fn toggle_hardware_profile_enablement(
        &self,
        name: &str,
        namespace: &str,
        enabled: bool,
        opts: &K8sApiOptions,
    ) -> Result<HardwareProfile, K8sApiError> {
        let patch = enablement_patch(enabled)?;
        let patched = opts
            .bounded("patch HardwareProfile", self.client.patch_json(namespace, name, &patch, opts))
            .await?;
        info!(
            "HardwareProfile {}/{} {}",
            namespace,
            name,
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(patched)
    }

    /// Deletes a profile.
    pub async fn delete_hardware_profile(
        &self,
        name: &str,
        namespace: &str,
        opts: &K8sApiOptions,
    ) -> Result<DeleteOutcome, K8sApiError> {
        let outcome = opts
            .bounded("delete HardwareProfile", self.client.delete(namespace, name, opts))
            .await?;
        info!("Deleted HardwareProfile {}/{} ({:?})", namespace, name, outcome);
        Ok(outcome)
    }
}
