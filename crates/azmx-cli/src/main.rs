mod cli;
mod commands;
mod output;

use anyhow::Result;
use azmx_discovery::ArmDiscoveryConfig;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let auth = ArmDiscoveryConfig {
        tenant_id: cli.tenant_id.clone(),
        client_id: cli.client_id.clone(),
        client_secret: cli.client_secret.clone(),
    };

    match cli.command {
        Command::Matrix {
            config,
            subscription_ids,
            all_subscriptions,
            output,
            emit_script,
        } => {
            commands::matrix(config, subscription_ids, all_subscriptions, output, emit_script, auth)
                .await
        }
        Command::Discover { output } => commands::discover(output, auth).await,
    }
}
