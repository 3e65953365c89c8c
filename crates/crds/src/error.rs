//! CRD conversion errors

use thiserror::Error;

/// Errors raised while converting CRD wire types
#[derive(Debug, Error)]
pub enum CrdError {
    /// `spec.scheduling` does not describe exactly one strategy
    #[error("Invalid scheduling: {0}")]
    InvalidScheduling(String),
}
