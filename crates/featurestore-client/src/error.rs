//! Feature store client errors

use thiserror::Error;

/// Errors that can occur when interacting with the feature store registry
#[derive(Debug, Error)]
pub enum FeatureStoreError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The registry returned an error
    #[error("Feature store API error: {0}")]
    Api(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication failed (invalid or expired token)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Project or resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}
