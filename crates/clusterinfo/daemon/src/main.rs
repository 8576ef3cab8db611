//! clusterinfod - Cluster info maintenance daemon
//!
//! Periodically refreshes the cluster topology and hardware summary stored on
//! every deployment from the node inventory.

use clap::Parser;
use clusterinfo_daemon::error::{DaemonError, DaemonResult};
use clusterinfo_daemon::{DaemonConfig, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Cluster info daemon CLI
#[derive(Parser)]
#[command(name = "clusterinfod")]
#[command(about = "Cluster info daemon - Deployment topology maintenance", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CLUSTERINFO_CONFIG")]
    config: Option<String>,

    /// Log level, overrides the logging section
    #[arg(long, env = "CLUSTERINFO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "CLUSTERINFO_LOG_JSON")]
    json: bool,

    /// Run a single tick and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = DaemonConfig::load(cli.config.as_deref())
        .map_err(|e| DaemonError::Config(e.to_string()))?;

    // Initialize tracing
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log_level.into());

    if cli.json || config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        interval_secs = config.maintainer.interval_secs,
        "Starting clusterinfod"
    );

    let server = Server::new(config)?;
    if cli.once {
        server.run_once().await?;
        return Ok(());
    }
    server.run().await
}
