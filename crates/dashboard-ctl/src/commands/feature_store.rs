//! `feature-store` subcommands

use crate::cli::FeatureStoreCommand;
use anyhow::Result;
use featurestore_client::FeatureStoreClientTrait;
use std::io::Write;

pub async fn run<C: FeatureStoreClientTrait>(client: &C, command: FeatureStoreCommand, out: &mut dyn Write) -> Result<()> {
    match command {
        FeatureStoreCommand::Projects => {
            writeln!(out, "{:<32} LAST UPDATED", "PROJECT")?;
            for project in client.list_projects().await? {
                writeln!(out, "{:<32} {}", project.name(), project.meta.last_updated_timestamp)?;
            }
        }
        FeatureStoreCommand::Entities { project } => {
            writeln!(out, "{:<32} {:<24} {:<12} DESCRIPTION", "ENTITY", "JOIN KEY", "TYPE")?;
            for entity in client.list_entities(&project).await? {
                let spec = entity.spec;
                writeln!(
                    out,
                    "{:<32} {:<24} {:<12} {}",
                    spec.name,
                    spec.join_key.unwrap_or_default(),
                    spec.value_type.unwrap_or_default(),
                    spec.description.unwrap_or_default()
                )?;
            }
        }
        FeatureStoreCommand::DataSources { project } => {
            writeln!(out, "{:<40} TYPE", "DATA SOURCE")?;
            for source in client.list_data_sources(&project).await? {
                writeln!(out, "{:<40} {}", source.name(), source.source_type().unwrap_or("-"))?;
            }
        }
        FeatureStoreCommand::FeatureServices { project } => {
            writeln!(out, "{:<40} {:<10} OWNER", "FEATURE SERVICE", "VIEWS")?;
            for service in client.list_feature_services(&project).await? {
                let spec = service.spec;
                writeln!(
                    out,
                    "{:<40} {:<10} {}",
                    spec.name,
                    spec.features.map(|f| f.len()).unwrap_or_default(),
                    spec.owner.unwrap_or_default()
                )?;
            }
        }
        FeatureStoreCommand::FeatureViews { project } => {
            writeln!(out, "{:<40} {:<8} {:<10} ENTITIES", "FEATURE VIEW", "ONLINE", "FEATURES")?;
            for view in client.list_feature_views(&project).await? {
                let spec = &view.feature_view.spec;
                writeln!(
                    out,
                    "{:<40} {:<8} {:<10} {}",
                    spec.name,
                    spec.online,
                    spec.features.len(),
                    spec.entities.join(",")
                )?;
            }
        }
    }
    Ok(())
}
