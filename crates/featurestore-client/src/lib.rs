//! Feature Store Registry Client
//!
//! A read-only client for the feature store registry REST API: projects and,
//! per project, entities, data sources, feature services and feature views.
//!
//! # Example
//!
//! ```no_run
//! use featurestore_client::{FeatureStoreClient, FeatureStoreClientTrait};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FeatureStoreClient::new(
//!     "https://feast-registry:443".to_string(),
//!     Some("your-api-token".to_string()),
//! )?;
//!
//! for project in client.list_projects().await? {
//!     let views = client.list_feature_views(project.name()).await?;
//!     println!("{}: {} feature views", project.name(), views.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod fs_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::FeatureStoreClient;
pub use error::FeatureStoreError;
pub use fs_trait::FeatureStoreClientTrait;
pub use models::*;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockFeatureStoreClient;
