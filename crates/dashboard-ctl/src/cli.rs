//! Command line definition
//!
//! Every connection setting can also come from the environment so the tool
//! runs unchanged inside a pod.

use clap::{Args, Parser, Subcommand};
use dashboard_api::K8sApiOptions;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "dashboard-ctl", version, about = "Manage dashboard resources from the command line")]
pub struct Cli {
    /// Namespace the dashboard resources live in
    #[arg(short, long, global = true, env = "DASHBOARD_NAMESPACE", default_value = "opendatahub")]
    pub namespace: String,

    /// Validate write operations server side without persisting them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Give up on API calls after this many seconds
    #[arg(long, global = true, env = "DASHBOARD_API_TIMEOUT")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn api_options(&self) -> K8sApiOptions {
        K8sApiOptions {
            dry_run: self.dry_run,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Hardware profiles
    #[command(subcommand)]
    HardwareProfiles(HardwareProfileCommand),

    /// List any resource kind with its type metadata filled in
    Resources(ResourcesArgs),

    /// Pod logs
    #[command(subcommand)]
    Logs(LogsCommand),

    /// Feature store registry
    FeatureStore(FeatureStoreArgs),
}

#[derive(Debug, Subcommand)]
pub enum HardwareProfileCommand {
    /// List profiles
    List {
        /// Print full resources as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Print a profile as YAML
    Get { name: String },

    /// Create a profile from a form file
    Create {
        /// YAML file with displayName, enabled, description, identifiers and scheduling
        #[arg(short, long)]
        file: PathBuf,

        /// Resource name; derived from the display name when omitted
        #[arg(long)]
        name: Option<String>,

        /// Dashboard areas the profile is shown in (empty means everywhere)
        #[arg(long, value_delimiter = ',')]
        visibility: Vec<String>,
    },

    /// Create a profile from a complete HardwareProfile manifest
    Import {
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Update a profile from a form file
    Update {
        name: String,

        #[arg(short, long)]
        file: PathBuf,

        #[arg(long, value_delimiter = ',')]
        visibility: Vec<String>,
    },

    /// Enable a profile
    Enable { name: String },

    /// Disable a profile
    Disable { name: String },

    /// Delete a profile
    Delete { name: String },
}

#[derive(Debug, Args)]
pub struct ResourcesArgs {
    /// API group; empty for the core group
    #[arg(long, default_value = "")]
    pub group: String,

    /// API version
    #[arg(long, default_value = "v1")]
    pub version: String,

    /// Kind stamped onto every item
    #[arg(long)]
    pub kind: String,

    /// Plural resource name used in the URL
    #[arg(long)]
    pub plural: String,

    /// List across all namespaces
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// Label selector
    #[arg(short = 'l', long)]
    pub selector: Option<String>,

    /// Print the typed list as YAML
    #[arg(long)]
    pub yaml: bool,
}

#[derive(Debug, Subcommand)]
pub enum LogsCommand {
    /// Follow the tail of a container log
    ///
    /// Reads commands from stdin while tailing: `p` toggles pause, `r`
    /// resumes, `f` refreshes now (even while paused), `c <name>` switches
    /// container, `d` downloads the selected container's log, `D` downloads
    /// all step logs, `q` quits.
    Tail {
        pod: String,

        /// Container to start with (defaults to `main`, else the first)
        #[arg(short, long)]
        container: Option<String>,

        /// Directory downloads are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Download full logs without tailing
    Download {
        pod: String,

        #[arg(short, long, conflicts_with = "all")]
        container: Option<String>,

        /// Download every step's log into one file
        #[arg(long)]
        all: bool,

        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct FeatureStoreArgs {
    /// Registry base URL
    #[arg(long, env = "FEATURE_STORE_URL")]
    pub url: String,

    /// Bearer token
    #[arg(long, env = "FEATURE_STORE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: FeatureStoreCommand,
}

#[derive(Debug, Subcommand)]
pub enum FeatureStoreCommand {
    /// List projects
    Projects,

    /// List entities of a project
    Entities {
        #[arg(short, long)]
        project: String,
    },

    /// List data sources of a project
    DataSources {
        #[arg(short, long)]
        project: String,
    },

    /// List feature services of a project
    FeatureServices {
        #[arg(short, long)]
        project: String,
    },

    /// List feature views of a project
    FeatureViews {
        #[arg(short, long)]
        project: String,
    },
}
