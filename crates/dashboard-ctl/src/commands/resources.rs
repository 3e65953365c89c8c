//! `resources` subcommand

use crate::cli::ResourcesArgs;
use anyhow::Result;
use dashboard_api::{list_resources, K8sModel, K8sResourceListResult};
use kube::api::ListParams;
use kube::ResourceExt;
use std::io::Write;

pub async fn run(client: &kube::Client, args: &ResourcesArgs, namespace: &str) -> Result<()> {
    let model = K8sModel::new(Some(args.group.as_str()), &args.version, &args.kind, &args.plural);
    let mut params = ListParams::default();
    if let Some(selector) = &args.selector {
        params = params.labels(selector);
    }
    let namespace = (!args.all_namespaces).then_some(namespace);

    let list = list_resources(client, &model, namespace, &params).await?;
    let mut out = std::io::stdout();
    if args.yaml {
        write!(out, "{}", serde_yaml::to_string(&list)?)?;
    } else {
        write_table(&mut out, &list)?;
    }
    Ok(())
}

pub fn write_table(out: &mut dyn Write, list: &K8sResourceListResult) -> Result<()> {
    writeln!(out, "{:<24} {:<40} {:<24} NAME", "KIND", "API VERSION", "NAMESPACE")?;
    for item in &list.items {
        let (api_version, kind) = item
            .types
            .as_ref()
            .map(|t| (t.api_version.as_str(), t.kind.as_str()))
            .unwrap_or_default();
        writeln!(
            out,
            "{:<24} {:<40} {:<24} {}",
            kind,
            api_version,
            item.namespace().unwrap_or_default(),
            item.name_any()
        )?;
    }
    Ok(())
}
