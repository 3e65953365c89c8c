//! Log fetching and downloads

use super::log_trait::PodLogClientTrait;
use crate::error::K8sApiError;
use tracing::{debug, info};

/// A log ready to be written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDownload {
    pub file_name: String,
    pub content: String,
}

/// Fetch a container log, the last `tail_lines` lines only when given
pub async fn fetch_logs<C>(
    client: &C,
    namespace: &str,
    pod: &str,
    container: &str,
    tail_lines: Option<i64>,
) -> Result<String, K8sApiError>
where
    C: PodLogClientTrait + ?Sized,
{
    debug!("Fetching logs for {}/{} ({})", namespace, pod, container);
    client.container_logs(namespace, pod, container, tail_lines).await
}

/// Full log of one container, named `<pod>-<container>.log`
pub async fn download_full_pod_log<C>(
    client: &C,
    namespace: &str,
    pod: &str,
    container: &str,
) -> Result<LogDownload, K8sApiError>
where
    C: PodLogClientTrait + ?Sized,
{
    let content = fetch_logs(client, namespace, pod, container, None).await?;
    info!("Downloaded log of {}/{} container {}", namespace, pod, container);
    Ok(LogDownload {
        file_name: format!("{}-{}.log", pod, container),
        content,
    })
}

/// Full logs of every step, each under a `step-<container>` header, named
/// `<pod>-all-steps.log`.
///
/// Steps are fetched in order; the first failure aborts the download.
pub async fn download_all_step_logs<C>(
    client: &C,
    containers: &[String],
    namespace: &str,
    pod: &str,
) -> Result<LogDownload, K8sApiError>
where
    C: PodLogClientTrait + ?Sized,
{
    let mut content = String::new();
    for container in containers {
        let logs = fetch_logs(client, namespace, pod, container, None).await?;
        content.push_str(&format!("step-{}\n", container));
        content.push_str(&logs);
        if !logs.is_empty() && !logs.ends_with('\n') {
            content.push('\n');
        }
    }
    info!("Downloaded {} step logs of {}/{}", containers.len(), namespace, pod);
    Ok(LogDownload {
        file_name: format!("{}-all-steps.log", pod),
        content,
    })
}
