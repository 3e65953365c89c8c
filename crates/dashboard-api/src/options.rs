//! Per-call options for Kubernetes API operations
//!
//! `dry_run` asks the API server to validate without persisting
//! (`dryRun=All`). `timeout` bounds how long the caller waits for the call.

use crate::error::K8sApiError;
use kube::api::{DeleteParams, PatchParams, PostParams};
use std::future::Future;
use std::time::Duration;

/// Options applied to a single API call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct K8sApiOptions {
    /// Validate server-side without persisting
    pub dry_run: bool,

    /// Give up after this long
    pub timeout: Option<Duration>,
}

impl K8sApiOptions {
    /// Options for a dry-run call
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Default::default()
        }
    }

    /// Set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn post_params(&self) -> PostParams {
        PostParams {
            dry_run: self.dry_run,
            ..Default::default()
        }
    }

    pub fn patch_params(&self) -> PatchParams {
        PatchParams {
            dry_run: self.dry_run,
            ..Default::default()
        }
    }

    pub fn delete_params(&self) -> DeleteParams {
        DeleteParams {
            dry_run: self.dry_run,
            ..Default::default()
        }
    }

    /// Run `call`, failing with [`K8sApiError::Timeout`] once the timeout elapses
    pub async fn bounded<T, F>(&self, what: &str, call: F) -> Result<T, K8sApiError>
    where
        F: Future<Output = Result<T, K8sApiError>>,
    {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| K8sApiError::Timeout(format!("{} after {:?}", what, limit)))?,
            None => call.await,
        }
    }
}
