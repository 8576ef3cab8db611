//! Server setup and lifecycle management

use crate::catalog::StaticCatalog;
use crate::config::DaemonConfig;
use crate::directory::InMemoryDirectory;
use crate::error::{DaemonError, DaemonResult};
use crate::inventory::HttpInventoryClient;
use crate::scheduler::{ClusterInfoMaintainer, JobControl, Scheduler, TickReport};
use std::sync::Arc;
use tokio::time::Duration;

/// Cluster info daemon
pub struct Server {
    config: DaemonConfig,
    directory: Arc<InMemoryDirectory>,
    maintainer: Arc<ClusterInfoMaintainer>,
    job_control: Arc<JobControl>,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: DaemonConfig) -> DaemonResult<Self> {
        config
            .validate()
            .map_err(|e| DaemonError::Config(e.to_string()))?;

        let directory = Arc::new(InMemoryDirectory::with_applications(
            config.applications.iter().map(|seed| seed.to_application()),
        ));
        let inventory = Arc::new(HttpInventoryClient::new(&config.inventory)?);
        let catalog = Arc::new(StaticCatalog::from_config(&config.zones));

        let maintainer = Arc::new(ClusterInfoMaintainer::new(
            directory.clone(),
            inventory,
            catalog,
            config.maintainer.clone(),
        ));

        let job_control = Arc::new(JobControl::new());
        if !config.maintainer.enabled {
            job_control.deactivate(ClusterInfoMaintainer::NAME);
        }

        Ok(Self {
            config,
            directory,
            maintainer,
            job_control,
        })
    }

    /// Directory backing this server
    pub fn directory(&self) -> Arc<InMemoryDirectory> {
        self.directory.clone()
    }

    pub fn job_control(&self) -> Arc<JobControl> {
        self.job_control.clone()
    }

    /// Run a single maintenance tick
    pub async fn run_once(&self) -> DaemonResult<TickReport> {
        let report = self.maintainer.run_once().await?;
        tracing::info!(
            applications = report.applications,
            deployments_refreshed = report.deployments_refreshed,
            deployments_skipped = report.deployments_skipped,
            "Single tick finished"
        );
        Ok(report)
    }

    /// Run the maintainer on its interval until a shutdown signal arrives
    pub async fn run(self) -> DaemonResult<()> {
        let period = Duration::from_secs(self.config.maintainer.interval_secs.max(1));
        let (scheduler, trigger_rx) = Scheduler::new(
            self.maintainer.clone(),
            self.job_control.clone(),
            period,
        );

        tracing::info!(
            applications = self.directory.len(),
            zones = self.config.zones.len(),
            inventory = %self.config.inventory.base_url,
            "Cluster info daemon started"
        );

        let handle = tokio::spawn(scheduler.clone().start(trigger_rx));

        shutdown_signal().await?;

        tracing::info!("Cluster info daemon shutting down");

        scheduler.stop().await;
        handle
            .await
            .map_err(|e| DaemonError::Server(format!("Scheduler task failed: {}", e)))?;

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() -> DaemonResult<()> {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut terminate =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

        tokio::select! {
            result = ctrl_c => {
                result?;
                tracing::info!("Received Ctrl+C, initiating graceful shutdown");
            }
            _ = terminate.recv() => {
                tracing::info!("Received terminate signal, initiating graceful shutdown");
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await?;
        tracing::info!("Received Ctrl+C, initiating graceful shutdown");
    }

    Ok(())
}
