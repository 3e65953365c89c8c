//! Dashboard Kubernetes API
//!
//! Operations the dashboard performs against the cluster:
//!
//! - **Hardware profiles**: assemble from form data, create, reconcile
//!   updates against the persisted copy, toggle enablement, delete
//! - **List typing**: stamp `apiVersion`/`kind` onto listed items
//! - **Pod logs**: container discovery, tailing state and downloads
//!
//! Cluster access goes through small client traits so every operation can be
//! exercised against the in-memory mocks (`test-util` feature).
//!
//! # Example
//!
//! ```no_run
//! use dashboard_api::hardware_profiles::{HardwareProfileApi, KubeHardwareProfileClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = kube::Client::try_default().await?;
//! let api = HardwareProfileApi::new(KubeHardwareProfileClient::new(client));
//! for profile in api.list_hardware_profiles("opendatahub").await? {
//!     println!("{} enabled={}", profile.display_name(), profile.is_enabled());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod hardware_profiles;
pub mod k8s_utils;
pub mod list_types;
pub mod merge;
pub mod model;
pub mod options;
pub mod pods;

pub use error::K8sApiError;
pub use list_types::{add_types_to_listed_resources, list_resources, K8sResourceListResult};
pub use model::K8sModel;
pub use options::K8sApiOptions;
