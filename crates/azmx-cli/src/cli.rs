use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "azmx",
    about = "Azure subscription discovery and pipeline matrix construction",
    version
)]
pub struct Cli {
    /// Azure tenant to authenticate against.
    #[arg(long, env = "AZURE_TENANT_ID", global = true)]
    pub tenant_id: Option<String>,

    /// Service principal client id. Absent means fall back to the Azure CLI login.
    #[arg(long, env = "AZURE_CLIENT_ID", global = true)]
    pub client_id: Option<String>,

    /// Service principal client secret.
    #[arg(long, env = "AZURE_CLIENT_SECRET", global = true, hide_env_values = true)]
    pub client_secret: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Discover subscriptions and emit the fan-out matrix.
    Matrix {
        /// Path to the subscription mapping file.
        #[arg(long)]
        config: PathBuf,

        /// Comma-separated subscription ids to target.
        #[arg(long, value_delimiter = ',')]
        subscription_ids: Vec<String>,

        /// Build the matrix for every enabled subscription.
        #[arg(long)]
        all_subscriptions: bool,

        /// Output JSON file for the matrix.
        #[arg(long)]
        output: PathBuf,

        /// Also write a set_matrix.ps1 helper next to the output file.
        #[arg(long)]
        emit_script: bool,
    },

    /// List discovered subscriptions.
    Discover {
        /// Output format.
        #[arg(long, default_value = "text")]
        output: DiscoverOutput,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum DiscoverOutput {
    Text,
    Json,
}
