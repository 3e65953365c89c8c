//! Mock pod log client for unit testing

use super::log_trait::PodLogClientTrait;
use crate::error::K8sApiError;
use k8s_openapi::api::core::v1::Pod;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock pod log client for testing
///
/// Pods and container logs are registered up front; unknown pods or
/// containers yield `NotFound`.
#[derive(Clone, Default)]
pub struct MockPodLogClient {
    pods: Arc<Mutex<HashMap<(String, String), Pod>>>,
    logs: Arc<Mutex<HashMap<(String, String, String), String>>>,
    log_requests: Arc<Mutex<Vec<(String, Option<i64>)>>>,
}

impl MockPodLogClient {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pod to the mock store (for test setup)
    pub fn add_pod(&self, namespace: &str, pod: Pod) {
        let name = pod.metadata.name.clone().unwrap_or_default();
        self.pods.lock().unwrap().insert((namespace.to_string(), name), pod);
    }

    /// Set the full log of a container (for test setup)
    pub fn set_logs(&self, namespace: &str, pod: &str, container: &str, logs: &str) {
        self.logs.lock().unwrap().insert(
            (namespace.to_string(), pod.to_string(), container.to_string()),
            logs.to_string(),
        );
    }

    /// Container names and tail limits of every log request made so far
    pub fn log_requests(&self) -> Vec<(String, Option<i64>)> {
        self.log_requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PodLogClientTrait for MockPodLogClient {
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, K8sApiError> {
        self.pods
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| K8sApiError::NotFound(format!("Pod {}/{}", namespace, name)))
    }

    async fn container_logs(
        &self,
        namespace: &str,
        pod: &str,
        container: &str,
        tail_lines: Option<i64>,
    ) -> Result<String, K8sApiError> {
        self.log_requests
            .lock()
            .unwrap()
            .push((container.to_string(), tail_lines));
        let logs = self
            .logs
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), pod.to_string(), container.to_string()))
            .cloned()
            .ok_or_else(|| K8sApiError::NotFound(format!("Pod {}/{} container {}", namespace, pod, container)))?;

        Ok(match tail_lines.and_then(|n| usize::try_from(n).ok()) {
            Some(n) => {
                let lines: Vec<&str> = logs.lines().collect();
                let mut tail = lines[lines.len().saturating_sub(n)..].join("\n");
                if !tail.is_empty() {
                    tail.push('\n');
                }
                tail
            }
            None => logs,
        })
    }
}
