//! Mock FeatureStoreClient for unit testing

use crate::error::FeatureStoreError;
use crate::fs_trait::FeatureStoreClientTrait;
use crate::models::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
struct ProjectContents {
    entities: Vec<Entity>,
    data_sources: Vec<DataSource>,
    feature_services: Vec<FeatureService>,
    feature_views: Vec<FeatureView>,
}

/// In-memory feature store registry
///
/// Listing anything of an unknown project yields `NotFound`.
#[derive(Clone, Default)]
pub struct MockFeatureStoreClient {
    projects: Arc<Mutex<Vec<FeatureStoreProject>>>,
    contents: Arc<Mutex<HashMap<String, ProjectContents>>>,
}

impl MockFeatureStoreClient {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a project (for test setup)
    pub fn add_project(&self, project: FeatureStoreProject) {
        self.contents
            .lock()
            .unwrap()
            .entry(project.spec.name.clone())
            .or_default();
        self.projects.lock().unwrap().push(project);
    }

    pub fn add_entity(&self, project: &str, entity: Entity) {
        self.with_project(project, |c| c.entities.push(entity));
    }

    pub fn add_data_source(&self, project: &str, source: DataSource) {
        self.with_project(project, |c| c.data_sources.push(source));
    }

    pub fn add_feature_service(&self, project: &str, service: FeatureService) {
        self.with_project(project, |c| c.feature_services.push(service));
    }

    pub fn add_feature_view(&self, project: &str, view: FeatureView) {
        self.with_project(project, |c| c.feature_views.push(view));
    }

    fn with_project(&self, project: &str, f: impl FnOnce(&mut ProjectContents)) {
        f(self.contents.lock().unwrap().entry(project.to_string()).or_default());
    }

    fn read<T>(&self, project: &str, f: impl FnOnce(&ProjectContents) -> Vec<T>) -> Result<Vec<T>, FeatureStoreError> {
        self.contents
            .lock()
            .unwrap()
            .get(project)
            .map(f)
            .ok_or_else(|| FeatureStoreError::NotFound(format!("project {}", project)))
    }
}

#[async_trait::async_trait]
impl FeatureStoreClientTrait for MockFeatureStoreClient {
    async fn list_projects(&self) -> Result<Vec<FeatureStoreProject>, FeatureStoreError> {
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn list_entities(&self, project: &str) -> Result<Vec<Entity>, FeatureStoreError> {
        self.read(project, |c| c.entities.clone())
    }

    async fn list_data_sources(&self, project: &str) -> Result<Vec<DataSource>, FeatureStoreError> {
        self.read(project, |c| c.data_sources.clone())
    }

    async fn list_feature_services(&self, project: &str) -> Result<Vec<FeatureService>, FeatureStoreError> {
        self.read(project, |c| c.feature_services.clone())
    }

    async fn list_feature_views(&self, project: &str) -> Result<Vec<FeatureView>, FeatureStoreError> {
        self.read(project, |c| c.feature_views.clone())
    }
}
