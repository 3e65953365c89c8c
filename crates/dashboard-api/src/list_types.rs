//! Type metadata for listed resources
//!
//! List responses from the API server carry `apiVersion`/`kind` on the list
//! envelope only; the items come back without them. These helpers stamp the
//! list's `apiVersion` and the model's `kind` onto every item.

use crate::error::K8sApiError;
use crate::model::K8sModel;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::api::{DynamicObject, ListParams, TypeMeta};
use kube::core::Request;
use kube::{Client, Resource};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw list response (`<Kind>List`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K8sResourceListResult {
    /// API version of the list envelope
    pub api_version: String,

    /// List kind (e.g. `TemplateList`), often absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Continue token and resource version
    #[serde(default)]
    pub metadata: ListMeta,

    /// Listed objects
    #[serde(default)]
    pub items: Vec<DynamicObject>,
}

/// Return a copy of `response` where every item has `apiVersion` set to the
/// list's `apiVersion` and `kind` set to `model.kind`.
pub fn add_types_to_listed_resources(
    response: &K8sResourceListResult,
    model: &K8sModel,
) -> K8sResourceListResult {
    K8sResourceListResult {
        items: response
            .items
            .iter()
            .map(|item| DynamicObject {
                types: Some(TypeMeta {
                    api_version: response.api_version.clone(),
                    kind: model.kind.clone(),
                }),
                ..item.clone()
            })
            .collect(),
        ..response.clone()
    }
}

/// List `model` resources (in `namespace`, or cluster wide) with item types filled in
pub async fn list_resources(
    client: &Client,
    model: &K8sModel,
    namespace: Option<&str>,
    params: &ListParams,
) -> Result<K8sResourceListResult, K8sApiError> {
    let resource = model.api_resource();
    let url = DynamicObject::url_path(&resource, namespace);
    debug!("Listing {} from {}", model.kind, url);

    let request = Request::new(url)
        .list(params)
        .map_err(kube::Error::BuildRequest)?;
    let response: K8sResourceListResult = client.request(request).await?;

    Ok(add_types_to_listed_resources(&response, model))
}
