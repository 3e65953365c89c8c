//! Kubernetes API errors

use thiserror::Error;

/// Errors that can occur when calling the Kubernetes API
#[derive(Debug, Error)]
pub enum K8sApiError {
    /// Error returned by the kube client
    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),

    /// Resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Optimistic concurrency conflict or name collision
    #[error("Conflict: {0}")]
    Conflict(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The call did not complete within the requested timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The resource is missing required fields
    #[error("Invalid resource: {0}")]
    InvalidResource(String),
}

impl K8sApiError {
    /// Classify a kube error, surfacing 404 and 409 as dedicated variants
    pub fn from_kube(error: kube::Error, what: &str) -> Self {
        match &error {
            kube::Error::Api(response) if response.code == 404 => Self::NotFound(what.to_string()),
            kube::Error::Api(response) if response.code == 409 => Self::Conflict(what.to_string()),
            _ => Self::Kube(error),
        }
    }
}
