//! Feature store registry client
//!
//! Read-only client for the registry REST API under `/api/v1/`.

use crate::error::FeatureStoreError;
use crate::fs_trait::FeatureStoreClientTrait;
use crate::models::*;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Feature store registry client
pub struct FeatureStoreClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl FeatureStoreClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Registry base URL (e.g., "https://feast-registry:443")
    /// * `token` - Bearer token; omitted for unauthenticated registries
    pub fn new(base_url: String, token: Option<String>) -> Result<Self, FeatureStoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(FeatureStoreError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, resource: &str, project: Option<&str>) -> String {
        match project {
            Some(project) => format!(
                "{}/api/v1/{}?project={}",
                self.base_url,
                resource,
                urlencoding::encode(project)
            ),
            None => format!("{}/api/v1/{}", self.base_url, resource),
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FeatureStoreError> {
        debug!("GET {}", url);

        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FeatureStoreError::Authentication(format!("{} - {}", status, body)));
        }
        if status == StatusCode::NOT_FOUND {
            return Err(FeatureStoreError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FeatureStoreError::Api(format!("GET {} failed: {} - {}", url, status, body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            debug!(
                "Undecodable response from {} (first 500 chars): {}",
                url,
                body.chars().take(500).collect::<String>()
            );
            FeatureStoreError::Serialization(e)
        })
    }
}

#[async_trait::async_trait]
impl FeatureStoreClientTrait for FeatureStoreClient {
    async fn list_projects(&self) -> Result<Vec<FeatureStoreProject>, FeatureStoreError> {
        let response: FeatureStoreProjects = self.get(&self.url("projects", None)).await?;
        Ok(response.projects)
    }

    async fn list_entities(&self, project: &str) -> Result<Vec<Entity>, FeatureStoreError> {
        let response: Entities = self.get(&self.url("entities", Some(project))).await?;
        Ok(response.entities)
    }

    async fn list_data_sources(&self, project: &str) -> Result<Vec<DataSource>, FeatureStoreError> {
        let response: DataSources = self.get(&self.url("data_sources", Some(project))).await?;
        Ok(response.data_sources)
    }

    async fn list_feature_services(&self, project: &str) -> Result<Vec<FeatureService>, FeatureStoreError> {
        let response: FeatureServices = self.get(&self.url("feature_services", Some(project))).await?;
        Ok(response.feature_services)
    }

    async fn list_feature_views(&self, project: &str) -> Result<Vec<FeatureView>, FeatureStoreError> {
        let response: FeatureViews = self.get(&self.url("feature_views", Some(project))).await?;
        Ok(response.feature_views)
    }
}
