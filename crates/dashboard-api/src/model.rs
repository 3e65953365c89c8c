//! Resource model descriptors
//!
//! A [`K8sModel`] names a resource type the way the API server addresses it
//! (group, version, kind, plural). It can be derived from any typed
//! [`kube::Resource`] or built by hand for dynamic access.

use kube::api::{ApiResource, GroupVersionKind};
use kube::Resource;

/// Group/version/kind/plural of a resource type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct K8sModel {
    /// API version without the group (e.g. `v1`)
    pub api_version: String,

    /// API group, `None` for the core group
    pub api_group: Option<String>,

    /// Kind (e.g. `HardwareProfile`)
    pub kind: String,

    /// Plural resource name used in URLs
    pub plural: String,
}

impl K8sModel {
    pub fn new(api_group: Option<&str>, api_version: &str, kind: &str, plural: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
            api_group: api_group.filter(|g| !g.is_empty()).map(str::to_string),
            kind: kind.to_string(),
            plural: plural.to_string(),
        }
    }

    /// Model of a statically typed resource
    pub fn of<K>() -> Self
    where
        K: Resource<DynamicType = ()>,
    {
        Self::new(
            Some(K::group(&()).as_ref()),
            K::version(&()).as_ref(),
            K::kind(&()).as_ref(),
            K::plural(&()).as_ref(),
        )
    }

    /// `group/version`, or just `version` for the core group
    pub fn kind_api_version(&self) -> String {
        match &self.api_group {
            Some(group) => format!("{}/{}", group, self.api_version),
            None => self.api_version.clone(),
        }
    }

    /// Descriptor for `kube::Api<DynamicObject>`
    pub fn api_resource(&self) -> ApiResource {
        let gvk = GroupVersionKind::gvk(
            self.api_group.as_deref().unwrap_or_default(),
            &self.api_version,
            &self.kind,
        );
        ApiResource::from_gvk_with_plural(&gvk, &self.plural)
    }
}
