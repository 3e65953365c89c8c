//! Right-biased deep merge of JSON documents

use serde_json::Value;

/// Merge `source` onto `target` in place.
///
/// Objects are merged key by key, recursively. Any other value in `source`
/// (scalars, arrays, `null`) replaces the value in `target`. Keys absent from
/// `source` keep their `target` value.
pub fn deep_merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(key) {
                    Some(target_value) => deep_merge(target_value, source_value),
                    None => {
                        target_map.insert(key.clone(), source_value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}
