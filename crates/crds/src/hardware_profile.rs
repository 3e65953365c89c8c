//! HardwareProfile CRD
//!
//! Describes the resource identifiers (CPU, memory, accelerators) a workload
//! may request and how it is scheduled: either pinned to nodes through a
//! selector and tolerations, or admitted through a Kueue local queue.

use crate::annotations;
use crate::error::CrdError;
use k8s_openapi::api::core::v1::Toleration;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(CustomResource, Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "infrastructure.opendatahub.io",
    version = "v1",
    kind = "HardwareProfile",
    plural = "hardwareprofiles",
    namespaced,
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct HardwareProfileSpec {
    /// Resource identifiers offered by this profile, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<HardwareIdentifier>,

    /// Scheduling strategy (node placement or Kueue admission)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<SchedulingWire>")]
    pub scheduling: Option<SchedulingSpec>,
}

/// A single requestable resource (e.g. `cpu`, `memory`, `nvidia.com/gpu`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HardwareIdentifier {
    /// Human readable name shown in the dashboard
    pub display_name: String,

    /// Kubernetes resource name
    pub identifier: String,

    /// Lower bound for the request
    pub min_count: IntOrString,

    /// Upper bound for the request (unbounded when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<IntOrString>,

    /// Value preselected in forms
    pub default_count: IntOrString,

    /// Resource category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<IdentifierResourceType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
/// Category of a hardware identifier
pub enum IdentifierResourceType {
    /// CPU cores
    #[serde(rename = "CPU")]
    Cpu,

    /// Memory
    Memory,

    /// Any extended resource (GPUs and other devices)
    Accelerator,
}

/// Scheduling strategy of a hardware profile.
///
/// Exactly one strategy is active at a time. On the wire the strategy is a
/// `type` discriminator plus the matching `kueue` or `node` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SchedulingWire", into = "SchedulingWire")]
pub enum SchedulingSpec {
    /// Admission through a Kueue local queue
    Queue(KueueSchedulingSpec),

    /// Direct placement through node selector and tolerations
    Node(NodeSchedulingSpec),
}

impl SchedulingSpec {
    /// The Kueue block, if this is queue based scheduling
    pub fn kueue(&self) -> Option<&KueueSchedulingSpec> {
        match self {
            Self::Queue(kueue) => Some(kueue),
            Self::Node(_) => None,
        }
    }

    /// The node block, if this is node based scheduling
    pub fn node(&self) -> Option<&NodeSchedulingSpec> {
        match self {
            Self::Node(node) => Some(node),
            Self::Queue(_) => None,
        }
    }

    /// Discriminator written to `spec.scheduling.type`
    pub fn scheduling_type(&self) -> SchedulingType {
        match self {
            Self::Queue(_) => SchedulingType::Queue,
            Self::Node(_) => SchedulingType::Node,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KueueSchedulingSpec {
    /// Name of the Kueue LocalQueue workloads are submitted to
    pub local_queue_name: String,

    /// Optional WorkloadPriorityClass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeSchedulingSpec {
    /// Labels a node must carry
    #[serde(default)]
    pub node_selector: BTreeMap<String, String>,

    /// Taints the workload tolerates
    #[serde(default)]
    pub tolerations: Vec<Toleration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
/// Value of `spec.scheduling.type`
pub enum SchedulingType {
    /// Kueue admission
    Queue,

    /// Node placement
    Node,
}

/// Wire representation of [`SchedulingSpec`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingWire {
    /// Active strategy
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scheduling_type: Option<SchedulingType>,

    /// Kueue settings (only with `type: Queue`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kueue: Option<KueueSchedulingSpec>,

    /// Node settings (only with `type: Node`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeSchedulingSpec>,
}

impl TryFrom<SchedulingWire> for SchedulingSpec {
    type Error = CrdError;

    fn try_from(wire: SchedulingWire) -> Result<Self, Self::Error> {
        match (wire.scheduling_type, wire.kueue, wire.node) {
            // The discriminator wins over a stale block of the other strategy
            (Some(SchedulingType::Queue), Some(kueue), _) => Ok(Self::Queue(kueue)),
            (Some(SchedulingType::Queue), None, _) => Err(CrdError::InvalidScheduling(
                "type Queue requires a kueue block".to_string(),
            )),
            (Some(SchedulingType::Node), _, node) => Ok(Self::Node(node.unwrap_or_default())),
            (None, Some(kueue), None) => Ok(Self::Queue(kueue)),
            (None, None, Some(node)) => Ok(Self::Node(node)),
            (None, Some(_), Some(_)) => Err(CrdError::InvalidScheduling(
                "both kueue and node are set without a type".to_string(),
            )),
            (None, None, None) => Err(CrdError::InvalidScheduling(
                "scheduling requires a type, kueue or node block".to_string(),
            )),
        }
    }
}

impl From<SchedulingSpec> for SchedulingWire {
    fn from(spec: SchedulingSpec) -> Self {
        let scheduling_type = Some(spec.scheduling_type());
        match spec {
            SchedulingSpec::Queue(kueue) => Self {
                scheduling_type,
                kueue: Some(kueue),
                node: None,
            },
            SchedulingSpec::Node(node) => Self {
                scheduling_type,
                kueue: None,
                node: Some(node),
            },
        }
    }
}

impl HardwareProfile {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata
            .annotations
            .as_ref()
            .and_then(|a| a.get(key))
            .map(String::as_str)
    }

    /// Display name, falling back to the resource name
    pub fn display_name(&self) -> &str {
        self.annotation(annotations::DISPLAY_NAME)
            .or(self.metadata.name.as_deref())
            .unwrap_or_default()
    }

    /// Description annotation
    pub fn description(&self) -> Option<&str> {
        self.annotation(annotations::DESCRIPTION)
    }

    /// A profile is enabled unless `opendatahub.io/disabled` is `"true"`
    pub fn is_enabled(&self) -> bool {
        self.annotation(annotations::DISABLED) != Some("true")
    }

    /// Dashboard areas the profile is visible in. Empty means everywhere.
    ///
    /// An unparsable annotation is treated as empty.
    pub fn visibility(&self) -> Vec<String> {
        self.annotation(annotations::DASHBOARD_FEATURE_VISIBILITY)
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }
}
