//! Update reconciliation for hardware profiles
//!
//! An update is sent as a full replace. The body is the previously persisted
//! object, cleaned so stale identifiers and scheduling settings cannot leak
//! forward, with the desired object deep-merged on top.

use crate::error::K8sApiError;
use crate::merge::deep_merge;
use crds::{HardwareProfile, HardwareProfileSpec, SchedulingSpec};
use tracing::debug;

/// Clean `previous` before `desired` is merged onto it.
///
/// 1. Identifiers are always cleared; the desired list fully replaces them.
/// 2. Node scheduling is dropped when desired switches to Kueue, otherwise
///    its selector and tolerations are reset.
/// 3. Kueue scheduling is dropped when desired switches to node placement.
pub fn clean_previous_spec(
    previous: &HardwareProfileSpec,
    desired: &HardwareProfileSpec,
) -> HardwareProfileSpec {
    let desired_kueue = desired.scheduling.as_ref().and_then(SchedulingSpec::kueue).is_some();
    let desired_node = desired.scheduling.as_ref().and_then(SchedulingSpec::node).is_some();

    let mut cleaned = previous.clone();
    cleaned.identifiers.clear();
    cleaned.scheduling = match cleaned.scheduling.take() {
        Some(SchedulingSpec::Node(_)) if desired_kueue => {
            debug!("Dropping node scheduling in favour of kueue");
            None
        }
        Some(SchedulingSpec::Node(mut node)) => {
            node.node_selector.clear();
            node.tolerations.clear();
            Some(SchedulingSpec::Node(node))
        }
        Some(SchedulingSpec::Queue(_)) if desired_node => {
            debug!("Dropping kueue scheduling in favour of node placement");
            None
        }
        other => other,
    };
    cleaned
}

/// Produce the spec to persist when `previous` is updated to `desired`
pub fn reconcile_spec(
    previous: &HardwareProfileSpec,
    desired: &HardwareProfileSpec,
) -> Result<HardwareProfileSpec, K8sApiError> {
    let mut body = serde_json::to_value(clean_previous_spec(previous, desired))?;
    deep_merge(&mut body, &serde_json::to_value(desired)?);
    Ok(serde_json::from_value(body)?)
}

/// Produce the full resource body to replace `existing` with.
///
/// Metadata the dashboard does not own (resource version, uid, labels,
/// foreign annotations) is carried over from `existing`.
pub fn reconcile_hardware_profile(
    existing: &HardwareProfile,
    desired: &HardwareProfile,
) -> Result<HardwareProfile, K8sApiError> {
    let mut cleaned = existing.clone();
    cleaned.spec = clean_previous_spec(&existing.spec, &desired.spec);

    let mut body = serde_json::to_value(&cleaned)?;
    deep_merge(&mut body, &serde_json::to_value(desired)?);
    Ok(serde_json::from_value(body)?)
}
