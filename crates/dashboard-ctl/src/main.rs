//! Dashboard CLI
//!
//! Manages hardware profiles, lists arbitrary resources with their type
//! metadata, tails and downloads pod logs and browses the feature store
//! registry.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use dashboard_api::hardware_profiles::{HardwareProfileApi, KubeHardwareProfileClient};
use dashboard_api::pods::KubePodLogClient;
use featurestore_client::FeatureStoreClient;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("Namespace: {}", cli.namespace);
    let opts = cli.api_options();
    if opts.dry_run {
        info!("Dry run: write operations are validated but not persisted");
    }

    match cli.command {
        Command::HardwareProfiles(command) => {
            let client = kube_client().await?;
            let api = HardwareProfileApi::new(KubeHardwareProfileClient::new(client));
            commands::hardware_profiles::run(&api, command, &cli.namespace, &opts, &mut std::io::stdout()).await
        }
        Command::Resources(args) => {
            let client = kube_client().await?;
            commands::resources::run(&client, &args, &cli.namespace).await
        }
        Command::Logs(command) => {
            let client = KubePodLogClient::new(kube_client().await?);
            commands::logs::run(&client, command, &cli.namespace).await
        }
        Command::FeatureStore(args) => {
            info!("Feature store registry: {}", args.url);
            let client = FeatureStoreClient::new(args.url, args.token)?;
            commands::feature_store::run(&client, args.command, &mut std::io::stdout()).await
        }
    }
}

async fn kube_client() -> Result<kube::Client> {
    kube::Client::try_default()
        .await
        .context("Failed to create Kubernetes client")
}
