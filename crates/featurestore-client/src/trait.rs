//! Feature store client trait for mocking

use crate::error::FeatureStoreError;
use crate::models::*;

/// Read access to the feature store registry
///
/// Implemented by [`crate::FeatureStoreClient`] and, with the `test-util`
/// feature, by [`crate::MockFeatureStoreClient`].
#[async_trait::async_trait]
pub trait FeatureStoreClientTrait: Send + Sync {
    /// List all projects
    async fn list_projects(&self) -> Result<Vec<FeatureStoreProject>, FeatureStoreError>;

    /// List the entities of a project
    async fn list_entities(&self, project: &str) -> Result<Vec<Entity>, FeatureStoreError>;

    /// List the data sources of a project
    async fn list_data_sources(&self, project: &str) -> Result<Vec<DataSource>, FeatureStoreError>;

    /// List the feature services of a project
    async fn list_feature_services(&self, project: &str) -> Result<Vec<FeatureService>, FeatureStoreError>;

    /// List the feature views of a project
    async fn list_feature_views(&self, project: &str) -> Result<Vec<FeatureView>, FeatureStoreError>;
}
