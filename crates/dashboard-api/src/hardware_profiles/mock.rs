//! Mock HardwareProfile client for unit testing
//!
//! Stores profiles in memory and mimics the API server where it matters:
//! names are unique per namespace, replaces must carry the current
//! `resourceVersion`, JSON patches are applied with RFC 6902 semantics,
//! finalizers hold a deleted object back and dry-run calls never persist.

use super::profile_trait::{DeleteOutcome, HardwareProfileClientTrait};
use crate::error::K8sApiError;
use crate::options::K8sApiOptions;
use crds::HardwareProfile;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

type Key = (String, String);

/// Mock HardwareProfile client for testing
#[derive(Clone, Default)]
pub struct MockHardwareProfileClient {
    profiles: Arc<Mutex<BTreeMap<Key, HardwareProfile>>>,
    next_version: Arc<Mutex<u64>>,
}

impl MockHardwareProfileClient {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile to the mock store (for test setup), assigning a resource version
    pub fn add_profile(&self, mut profile: HardwareProfile) -> HardwareProfile {
        profile.metadata.resource_version = Some(self.bump_version());
        let key = key_of(&profile);
        self.profiles.lock().unwrap().insert(key, profile.clone());
        profile
    }

    /// Stored copy of a profile (for assertions)
    pub fn stored(&self, namespace: &str, name: &str) -> Option<HardwareProfile> {
        self.profiles
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    /// Number of stored profiles
    pub fn len(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bump_version(&self) -> String {
        let mut version = self.next_version.lock().unwrap();
        *version += 1;
        version.to_string()
    }
}

fn key_of(profile: &HardwareProfile) -> Key {
    (
        profile.metadata.namespace.clone().unwrap_or_default(),
        profile.metadata.name.clone().unwrap_or_default(),
    )
}

fn not_found(namespace: &str, name: &str) -> K8sApiError {
    K8sApiError::NotFound(format!("HardwareProfile {}/{}", namespace, name))
}

#[async_trait::async_trait]
impl HardwareProfileClientTrait for MockHardwareProfileClient {
    async fn list(&self, namespace: &str) -> Result<Vec<HardwareProfile>, K8sApiError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|((ns, _), _)| ns == namespace)
            .map(|(_, profile)| profile.clone())
            .collect())
    }

    async fn get(&self, namespace: &str, name: &str) -> Result<HardwareProfile, K8sApiError> {
        self.stored(namespace, name).ok_or_else(|| not_found(namespace, name))
    }

    async fn create(&self, resource: &HardwareProfile, opts: &K8sApiOptions) -> Result<HardwareProfile, K8sApiError> {
        let key = key_of(resource);
        if key.1.is_empty() {
            return Err(K8sApiError::InvalidResource("HardwareProfile missing name".to_string()));
        }
        if self.profiles.lock().unwrap().contains_key(&key) {
            return Err(K8sApiError::Conflict(format!("HardwareProfile {}/{} already exists", key.0, key.1)));
        }
        let mut created = resource.clone();
        created.metadata.resource_version = Some(self.bump_version());
        if !opts.dry_run {
            self.profiles.lock().unwrap().insert(key, created.clone());
        }
        Ok(created)
    }

    async fn replace(&self, resource: &HardwareProfile, opts: &K8sApiOptions) -> Result<HardwareProfile, K8sApiError> {
        let key = key_of(resource);
        let current = self.stored(&key.0, &key.1).ok_or_else(|| not_found(&key.0, &key.1))?;
        if resource.metadata.resource_version != current.metadata.resource_version {
            return Err(K8sApiError::Conflict(format!(
                "HardwareProfile {}/{} has been modified",
                key.0, key.1
            )));
        }
        let mut replaced = resource.clone();
        replaced.metadata.resource_version = Some(self.bump_version());
        if !opts.dry_run {
            self.profiles.lock().unwrap().insert(key, replaced.clone());
        }
        Ok(replaced)
    }

    async fn patch_json(
        &self,
        namespace: &str,
        name: &str,
        patch: &json_patch::Patch,
        opts: &K8sApiOptions,
    ) -> Result<HardwareProfile, K8sApiError> {
        let current = self.stored(namespace, name).ok_or_else(|| not_found(namespace, name))?;
        let mut document = serde_json::to_value(&current)?;
        json_patch::patch(&mut document, patch)
            .map_err(|e| K8sApiError::InvalidResource(format!("JSON patch failed: {}", e)))?;
        let mut patched: HardwareProfile = serde_json::from_value(document)?;
        patched.metadata.resource_version = Some(self.bump_version());
        if !opts.dry_run {
            self.profiles
                .lock()
                .unwrap()
                .insert((namespace.to_string(), name.to_string()), patched.clone());
        }
        Ok(patched)
    }

    async fn delete(&self, namespace: &str, name: &str, opts: &K8sApiOptions) -> Result<DeleteOutcome, K8sApiError> {
        let key = (namespace.to_string(), name.to_string());
        let mut profiles = self.profiles.lock().unwrap();
        if !profiles.contains_key(&key) {
            return Err(not_found(namespace, name));
        }
        let finalized = profiles[&key]
            .metadata
            .finalizers
            .as_ref()
            .is_some_and(|f| !f.is_empty());
        if finalized {
            // Finalizers keep the object around until a controller clears them
            return Ok(DeleteOutcome::InProgress);
        }
        if !opts.dry_run {
            profiles.remove(&key);
        }
        Ok(DeleteOutcome::Deleted)
    }
}
