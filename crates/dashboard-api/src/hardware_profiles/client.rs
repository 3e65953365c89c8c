//! kube-backed HardwareProfile client

use super::profile_trait::{DeleteOutcome, HardwareProfileClientTrait};
use crate::error::K8sApiError;
use crate::options::K8sApiOptions;
use crds::HardwareProfile;
use kube::api::{ListParams, Patch};
use kube::{Api, Client};
use tracing::debug;

/// HardwareProfile client talking to the cluster
#[derive(Clone)]
pub struct KubeHardwareProfileClient {
    client: Client,
}

impl KubeHardwareProfileClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<HardwareProfile> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

fn identity(resource: &HardwareProfile) -> Result<(&str, &str), K8sApiError> {
    let name = resource
        .metadata
        .name
        .as_deref()
        .ok_or_else(|| K8sApiError::InvalidResource("HardwareProfile missing name".to_string()))?;
    let namespace = resource.metadata.namespace.as_deref().ok_or_else(|| {
        K8sApiError::InvalidResource(format!("HardwareProfile {} missing namespace", name))
    })?;
    Ok((namespace, name))
}

#[async_trait::async_trait]
impl HardwareProfileClientTrait for KubeHardwareProfileClient {
    async fn list(&self, namespace: &str) -> Result<Vec<HardwareProfile>, K8sApiError> {
        debug!("Listing HardwareProfiles in {}", namespace);
        let list = self
            .api(namespace)
            .list(&ListParams::default())
            .await
            .map_err(|e| K8sApiError::from_kube(e, namespace))?;
        Ok(list.items)
    }

    async fn get(&self, namespace: &str, name: &str) -> Result<HardwareProfile, K8sApiError> {
        debug!("Fetching HardwareProfile {}/{}", namespace, name);
        self.api(namespace)
            .get(name)
            .await
            .map_err(|e| K8sApiError::from_kube(e, &format!("HardwareProfile {}/{}", namespace, name)))
    }

    async fn create(&self, resource: &HardwareProfile, opts: &K8sApiOptions) -> Result<HardwareProfile, K8sApiError> {
        let (namespace, name) = identity(resource)?;
        debug!("Creating HardwareProfile {}/{} (dry run: {})", namespace, name, opts.dry_run);
        self.api(namespace)
            .create(&opts.post_params(), resource)
            .await
            .map_err(|e| K8sApiError::from_kube(e, &format!("HardwareProfile {}/{}", namespace, name)))
    }

    async fn replace(&self, resource: &HardwareProfile, opts: &K8sApiOptions) -> Result<HardwareProfile, K8sApiError> {
        let (namespace, name) = identity(resource)?;
        debug!("Replacing HardwareProfile {}/{} (dry run: {})", namespace, name, opts.dry_run);
        self.api(namespace)
            .replace(name, &opts.post_params(), resource)
            .await
            .map_err(|e| K8sApiError::from_kube(e, &format!("HardwareProfile {}/{}", namespace, name)))
    }

    async fn patch_json(
        &self,
        namespace: &str,
        name: &str,
        patch: &json_patch::Patch,
        opts: &K8sApiOptions,
    ) -> Result<HardwareProfile, K8sApiError> {
        debug!("Patching HardwareProfile {}/{} (dry run: {})", namespace, name, opts.dry_run);
        self.api(namespace)
            .patch(name, &opts.patch_params(), &Patch::Json::<()>(patch.clone()))
            .await
            .map_err(|e| K8sApiError::from_kube(e, &format!("HardwareProfile {}/{}", namespace, name)))
    }

    async fn delete(&self, namespace: &str, name: &str, opts: &K8sApiOptions) -> Result<DeleteOutcome, K8sApiError> {
        debug!("Deleting HardwareProfile {}/{} (dry run: {})", namespace, name, opts.dry_run);
        let outcome = self
            .api(namespace)
            .delete(name, &opts.delete_params())
            .await
            .map_err(|e| K8sApiError::from_kube(e, &format!("HardwareProfile {}/{}", namespace, name)))?;
        // Left: the object is still there (finalizers), Right: a Status
        Ok(if outcome.is_left() {
            DeleteOutcome::InProgress
        } else {
            DeleteOutcome::Deleted
        })
    }
}
