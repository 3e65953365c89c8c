//! Dashboard CRD Definitions
//!
//! Kubernetes Custom Resource Definitions managed by the dashboard tooling.

pub mod annotations;
pub mod error;
pub mod hardware_profile;
mod hardware_profile_test;

pub use error::CrdError;
pub use hardware_profile::*;
