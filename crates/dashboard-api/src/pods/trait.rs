//! Pod log client trait for mocking

use crate::error::K8sApiError;
use k8s_openapi::api::core::v1::Pod;

/// Pod lookup and log retrieval
#[async_trait::async_trait]
pub trait PodLogClientTrait: Send + Sync {
    /// Fetch a pod
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, K8sApiError>;

    /// Fetch a container's log; `tail_lines` limits it to the last N lines
    async fn container_logs(
        &self,
        namespace: &str,
        pod: &str,
        container: &str,
        tail_lines: Option<i64>,
    ) -> Result<String, K8sApiError>;
}
