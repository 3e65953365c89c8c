//! `hardware-profiles` subcommands

use super::read_yaml;
use crate::cli::HardwareProfileCommand;
use anyhow::{Context, Result};
use crds::{HardwareProfile, SchedulingType};
use dashboard_api::hardware_profiles::{
    DeleteOutcome, HardwareProfileApi, HardwareProfileClientTrait, HardwareProfileForm,
};
use dashboard_api::K8sApiOptions;
use std::io::Write;
use tracing::info;

pub async fn run<C: HardwareProfileClientTrait>(
    api: &HardwareProfileApi<C>,
    command: HardwareProfileCommand,
    namespace: &str,
    opts: &K8sApiOptions,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        HardwareProfileCommand::List { yaml } => {
            let profiles = api.list_hardware_profiles(namespace).await?;
            if yaml {
                write!(out, "{}", serde_yaml::to_string(&profiles)?)?;
            } else {
                write_table(out, &profiles)?;
            }
        }
        HardwareProfileCommand::Get { name } => {
            let profile = api.get_hardware_profile(&name, namespace).await?;
            write!(out, "{}", serde_yaml::to_string(&profile)?)?;
        }
        HardwareProfileCommand::Create { file, name, visibility } => {
            let form: HardwareProfileForm = read_yaml(&file)?;
            let created = api
                .create_hardware_profile(name.as_deref().unwrap_or_default(), &form, namespace, &visibility, opts)
                .await?;
            writeln!(out, "hardwareprofile/{} created", resource_name(&created))?;
        }
        HardwareProfileCommand::Import { file } => {
            let mut resource: HardwareProfile = read_yaml(&file)?;
            if resource.metadata.name.is_none() {
                anyhow::bail!("{} has no metadata.name", file.display());
            }
            if resource.metadata.namespace.is_none() {
                resource.metadata.namespace = Some(namespace.to_string());
            }
            let created = api.create_hardware_profile_from_resource(&resource, opts).await?;
            writeln!(out, "hardwareprofile/{} created", resource_name(&created))?;
        }
        HardwareProfileCommand::Update { name, file, visibility } => {
            let form: HardwareProfileForm = read_yaml(&file)?;
            let existing = api
                .get_hardware_profile(&name, namespace)
                .await
                .with_context(|| format!("Failed to load hardware profile {}", name))?;
            let updated = api
                .update_hardware_profile(&form, &existing, namespace, &visibility, opts)
                .await?;
            writeln!(out, "hardwareprofile/{} updated", resource_name(&updated))?;
        }
        HardwareProfileCommand::Enable { name } => {
            api.toggle_hardware_profile_enablement(&name, namespace, true, opts).await?;
            writeln!(out, "hardwareprofile/{} enabled", name)?;
        }
        HardwareProfileCommand::Disable { name } => {
            api.toggle_hardware_profile_enablement(&name, namespace, false, opts).await?;
            writeln!(out, "hardwareprofile/{} disabled", name)?;
        }
        HardwareProfileCommand::Delete { name } => {
            let outcome = api.delete_hardware_profile(&name, namespace, opts).await?;
            info!("Delete of {} returned {:?}", name, outcome);
            match outcome {
                DeleteOutcome::Deleted => writeln!(out, "hardwareprofile/{} deleted", name)?,
                DeleteOutcome::InProgress => writeln!(out, "hardwareprofile/{} deletion in progress", name)?,
            }
        }
    }
    Ok(())
}

fn resource_name(profile: &HardwareProfile) -> &str {
    profile.metadata.name.as_deref().unwrap_or_default()
}

fn write_table(out: &mut dyn Write, profiles: &[HardwareProfile]) -> Result<()> {
    writeln!(out, "{:<32} {:<32} {:<8} {:<10} IDENTIFIERS", "NAME", "DISPLAY NAME", "ENABLED", "SCHEDULING")?;
    for profile in profiles {
        let scheduling = match profile.spec.scheduling.as_ref().map(|s| s.scheduling_type()) {
            Some(SchedulingType::Queue) => "Queue",
            Some(SchedulingType::Node) => "Node",
            None => "-",
        };
        let identifiers: Vec<&str> = profile.spec.identifiers.iter().map(|i| i.identifier.as_str()).collect();
        writeln!(
            out,
            "{:<32} {:<32} {:<8} {:<10} {}",
            resource_name(profile),
            profile.display_name(),
            profile.is_enabled(),
            scheduling,
            identifiers.join(",")
        )?;
    }
    Ok(())
}
