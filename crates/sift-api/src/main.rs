//! sift gateway entry point.

use std::path::PathBuf;

use clap::Parser;

use sift_api::{GatewayConfig, Server};

/// Search gateway for a document store.
#[derive(Debug, Parser)]
#[command(name = "sift", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "SIFT_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the configuration).
    #[arg(short, long)]
    bind: Option<String>,

    /// Accept requests without a bearer token.
    #[arg(long)]
    no_auth: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sift=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = GatewayConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }
    if cli.no_auth {
        tracing::warn!("Bearer token enforcement disabled");
        config.auth_enabled = false;
    }

    tracing::info!(
        search_url = %config.client.search_url,
        spaces_endpoint = %config.client.spaces_endpoint,
        "Starting sift gateway"
    );

    let server = Server::new(&config)?;
    server.run().await
}
