//! kube-backed pod log client

use super::log_trait::PodLogClientTrait;
use crate::error::K8sApiError;
use k8s_openapi::api::core::v1::Pod;
use kube::api::LogParams;
use kube::{Api, Client};
use tracing::debug;

/// Pod log client talking to the cluster
#[derive(Clone)]
pub struct KubePodLogClient {
    client: Client,
}

impl KubePodLogClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl PodLogClientTrait for KubePodLogClient {
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, K8sApiError> {
        debug!("Fetching pod {}/{}", namespace, name);
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        pods.get(name)
            .await
            .map_err(|e| K8sApiError::from_kube(e, &format!("Pod {}/{}", namespace, name)))
    }

    async fn container_logs(
        &self,
        namespace: &str,
        pod: &str,
        container: &str,
        tail_lines: Option<i64>,
    ) -> Result<String, K8sApiError> {
        debug!("Fetching logs of {}/{} container {} (tail: {:?})", namespace, pod, container, tail_lines);
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let params = LogParams {
            container: Some(container.to_string()),
            tail_lines,
            ..Default::default()
        };
        pods.logs(pod, &params)
            .await
            .map_err(|e| K8sApiError::from_kube(e, &format!("Pod {}/{} container {}", namespace, pod, container)))
    }
}
