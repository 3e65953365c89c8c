//! Subcommand implementations

pub mod feature_store;
pub mod hardware_profiles;
pub mod logs;
pub mod resources;


use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a YAML (or JSON) file
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
