//! Pod log viewing
//!
//! Container discovery, log fetching and downloads over a
//! [`PodLogClientTrait`], plus the [`LogViewState`] state machine that drives
//! a polling log viewer.

mod client;
mod download;
mod download_test;
mod log_state;
#[path = "trait.rs"]
mod log_trait;
#[cfg(any(test, feature = "test-util"))]
mod mock;

pub use client::KubePodLogClient;
pub use download::{download_all_step_logs, download_full_pod_log, fetch_logs, LogDownload};
pub use log_state::{LogUpdate, LogViewState};
pub use log_trait::PodLogClientTrait;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockPodLogClient;

use k8s_openapi::api::core::v1::Pod;
use std::time::Duration;

/// Lines fetched by each refresh of a tailing view
pub const LOG_TAIL_LINES: i64 = 500;

/// Delay between two refreshes of a tailing view
pub const LOG_REFRESH_INTERVAL: Duration = Duration::from_secs(3);

/// Container selected by default when present
pub const DEFAULT_CONTAINER: &str = "main";

/// Step containers of a pod: init containers first, then regular containers
pub fn pod_containers(pod: &Pod) -> Vec<String> {
    let Some(spec) = pod.spec.as_ref() else {
        return Vec::new();
    };
    spec.init_containers
        .iter()
        .flatten()
        .chain(spec.containers.iter())
        .map(|c| c.name.clone())
        .collect()
}

/// `main` if present, else the first container
pub fn default_container(containers: &[String]) -> Option<&str> {
    containers
        .iter()
        .find(|c| c.as_str() == DEFAULT_CONTAINER)
        .or_else(|| containers.first())
        .map(String::as_str)
}
