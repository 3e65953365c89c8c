//! Feature store registry data models
//!
//! Mirrors the JSON returned by the registry REST API. Field names are
//! camelCase except for the `data_sources` list key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Creation and update timestamps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStoreMeta {
    pub created_timestamp: String,
    pub last_updated_timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFormat {
    #[serde(default)]
    pub parquet_format: BTreeMap<String, String>,
}

/// Location and format of a file based source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOptions {
    pub file_format: FileFormat,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub name: String,
}

/// A feature store project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStoreProject {
    pub spec: ProjectSpec,
    pub meta: FeatureStoreMeta,
}

impl FeatureStoreProject {
    pub fn name(&self) -> &str {
        &self.spec.name
    }
}

/// `GET /api/v1/projects`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStoreProjects {
    #[serde(default)]
    pub projects: Vec<FeatureStoreProject>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

/// An entity (the key features are joined on)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub spec: EntitySpec,
    pub meta: FeatureStoreMeta,
}

/// `GET /api/v1/entities`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// A named, typed feature column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureColumns {
    pub name: String,
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDataOptions {
    #[serde(default)]
    pub schema: Vec<FeatureColumns>,
}

/// A data source.
///
/// Request sources are recognized by their `requestDataOptions` block;
/// everything else is a file or batch source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataSource {
    Request(RequestDataSource),
    File(FileDataSource),
}

impl DataSource {
    pub fn name(&self) -> &str {
        match self {
            Self::Request(source) => &source.name,
            Self::File(source) => &source.name,
        }
    }

    pub fn source_type(&self) -> Option<&str> {
        match self {
            Self::Request(source) => source.source_type.as_deref(),
            Self::File(source) => source.source_type.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDataSource {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    pub request_data_options: RequestDataOptions,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDataSource {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_options: Option<FileOptions>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

/// `GET /api/v1/data_sources`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSources {
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
}

/// Batch source backing a feature view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSource {
    #[serde(rename = "type", default)]
    pub source_type: String,
    #[serde(default)]
    pub timestamp_field: String,
    #[serde(default)]
    pub created_timestamp_column: String,
    #[serde(default)]
    pub file_options: FileOptions,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// Features a service takes from one feature view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureProjection {
    pub feature_view_name: String,
    #[serde(default)]
    pub feature_columns: Vec<FeatureColumns>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_source: Option<BatchSource>,
}

/// Feature projections of a service
pub type Features = Vec<FeatureProjection>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureServiceSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Features>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// A feature service (a named bundle of features served together)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureService {
    pub spec: FeatureServiceSpec,
    pub meta: FeatureStoreMeta,
}

/// `GET /api/v1/feature_services`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureServices {
    #[serde(default)]
    pub feature_services: Vec<FeatureService>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityColumn {
    pub name: String,
    pub value_type: String,
}

/// Join key columns of a feature view
pub type EntityColumns = Vec<EntityColumn>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureViewBatchSource {
    #[serde(flatten)]
    pub source: BatchSource,
    #[serde(default)]
    pub data_source_class_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureViewSpec {
    pub name: String,
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub features: Vec<FeatureColumns>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub ttl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_source: Option<FeatureViewBatchSource>,
    #[serde(default)]
    pub online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub entity_columns: EntityColumns,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterializationInterval {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureViewMeta {
    #[serde(flatten)]
    pub meta: FeatureStoreMeta,
    #[serde(default)]
    pub materialization_intervals: Vec<MaterializationInterval>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureViewDefinition {
    pub spec: FeatureViewSpec,
    pub meta: FeatureViewMeta,
}

/// A feature view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureView {
    pub feature_view: FeatureViewDefinition,
}

impl FeatureView {
    pub fn name(&self) -> &str {
        &self.feature_view.spec.name
    }
}

/// `GET /api/v1/feature_views`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureViews {
    #[serde(default)]
    pub feature_views: Vec<FeatureView>,
}
