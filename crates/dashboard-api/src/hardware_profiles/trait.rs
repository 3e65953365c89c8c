//! HardwareProfile client trait for mocking
//!
//! The kube-backed client implements this trait; tests use the in-memory mock.

use crate::error::K8sApiError;
use crate::options::K8sApiOptions;
use crds::HardwareProfile;

/// Result of a delete call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The object is gone
    Deleted,

    /// Deletion accepted, object still present (finalizers pending)
    InProgress,
}

/// Raw HardwareProfile operations against the API server
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait HardwareProfileClientTrait: Send + Sync {
    async fn list(&self, namespace: &str) -> Result<Vec<HardwareProfile>, K8sApiError>;
    async fn get(&self, namespace: &str, name: &str) -> Result<HardwareProfile, K8sApiError>;
    async fn create(&self, resource: &HardwareProfile, opts: &K8sApiOptions) -> Result<HardwareProfile, K8sApiError>;
    async fn replace(&self, resource: &HardwareProfile, opts: &K8sApiOptions) -> Result<HardwareProfile, K8sApiError>;
    async fn patch_json(&self, namespace: &str, name: &str, patch: &json_patch::Patch, opts: &K8sApiOptions) -> Result<HardwareProfile, K8sApiError>;
    async fn delete(&self, namespace: &str, name: &str, opts: &K8sApiOptions) -> Result<DeleteOutcome, K8sApiError>;
}
