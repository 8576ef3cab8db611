//! Cluster info reconciliation
//!
//! Keeps the cluster summaries stored on every deployment in sync with the
//! nodes the inventory currently reports for it.

use super::Maintenance;
use crate::aggregator::aggregate;
use crate::catalog::HardwareCatalog;
use crate::config::MaintainerConfig;
use crate::directory::{ApplicationDirectory, ApplicationLock};
use crate::error::{DeploymentError, MaintainerError, MaintainerResult};
use crate::inventory::NodeInventory;
use async_trait::async_trait;
use clusterinfo_types::{Application, ApplicationId, Deployment, DeploymentId};
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::time::Duration;

/// Outcome of one maintenance tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Applications listed at the start of the tick
    pub applications: usize,
    /// Applications not processed (lock failure or removed)
    pub applications_skipped: usize,
    /// Deployments whose cluster info was stored
    pub deployments_refreshed: usize,
    /// Deployments left unchanged this tick
    pub deployments_skipped: usize,
}

impl TickReport {
    fn merge(self, other: TickReport) -> TickReport {
        TickReport {
            applications: self.applications + other.applications,
            applications_skipped: self.applications_skipped + other.applications_skipped,
            deployments_refreshed: self.deployments_refreshed + other.deployments_refreshed,
            deployments_skipped: self.deployments_skipped + other.deployments_skipped,
        }
    }
}

/// Maintains hardware, hostname and cluster summaries of all deployments
pub struct ClusterInfoMaintainer {
    directory: Arc<dyn ApplicationDirectory>,
    inventory: Arc<dyn NodeInventory>,
    catalog: Arc<dyn HardwareCatalog>,
    config: MaintainerConfig,
}

impl ClusterInfoMaintainer {
    pub const NAME: &'static str = "cluster-info";

    pub fn new(
        directory: Arc<dyn ApplicationDirectory>,
        inventory: Arc<dyn NodeInventory>,
        catalog: Arc<dyn HardwareCatalog>,
        config: MaintainerConfig,
    ) -> Self {
        Self {
            directory,
            inventory,
            catalog,
            config,
        }
    }

    /// Refresh every deployment of every application once
    pub async fn run_once(&self) -> MaintainerResult<TickReport> {
        let applications = self
            .directory
            .list_applications()
            .await
            .map_err(MaintainerError::ListApplications)?;

        let concurrency = self.config.max_concurrent_applications.max(1);
        let reports: Vec<TickReport> = stream::iter(applications.into_iter().map(|app| app.id))
            .map(|id| async move { self.maintain_application(&id).await })
            .buffer_unordered(concurrency)
            .collect()
            .await;

        Ok(reports
            .into_iter()
            .fold(TickReport::default(), TickReport::merge))
    }

    #[tracing::instrument(skip_all, fields(application = %id))]
    async fn maintain_application(&self, id: &ApplicationId) -> TickReport {
        let mut report = TickReport {
            applications: 1,
            ..Default::default()
        };

        let lock = match self.directory.lock(id).await {
            Ok(lock) => lock,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to lock application, skipping");
                report.applications_skipped = 1;
                return report;
            }
        };

        // Re-read under the lock so commits build on the latest stored record.
        let mut application = match self.directory.get_application(id).await {
            Ok(Some(application)) => application,
            Ok(None) => {
                tracing::debug!("Application removed since listing, skipping");
                report.applications_skipped = 1;
                return report;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read application, skipping");
                report.applications_skipped = 1;
                return report;
            }
        };

        for deployment_id in application.deployment_ids() {
            match self
                .refresh_deployment(&application, &deployment_id, &lock)
                .await
            {
                Ok(updated) => {
                    application = updated;
                    report.deployments_refreshed += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        deployment = %deployment_id,
                        error = %e,
                        "Failed getting cluster info"
                    );
                    report.deployments_skipped += 1;
                }
            }
        }

        report
    }

    /// Fetch, aggregate and store one deployment; returns the stored record
    async fn refresh_deployment(
        &self,
        application: &Application,
        deployment_id: &DeploymentId,
        lock: &ApplicationLock,
    ) -> Result<Application, DeploymentError> {
        let timeout_secs = self.config.inventory_timeout_secs;
        let nodes = tokio::time::timeout(
            Duration::from_secs(timeout_secs),
            self.inventory.node_list(deployment_id),
        )
        .await
        .map_err(|_| DeploymentError::Timeout(timeout_secs))??;

        let cluster_info = aggregate(&nodes, self.catalog.node_flavors(&deployment_id.zone))?;
        let clusters = cluster_info.len();

        let deployment = application
            .deployment(&deployment_id.zone)
            .cloned()
            .unwrap_or_else(|| Deployment::new(deployment_id.zone.clone()));
        let updated = application.with(deployment.with_cluster_info(cluster_info));

        self.directory.store(updated.clone(), lock).await?;

        tracing::debug!(
            deployment = %deployment_id,
            nodes = nodes.len(),
            clusters = clusters,
            "Stored cluster info"
        );

        Ok(updated)
    }
}

#[async_trait]
impl Maintenance for ClusterInfoMaintainer {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn maintain(&self) -> MaintainerResult<()> {
        let report = self.run_once().await?;
        tracing::info!(
            applications = report.applications,
            applications_skipped = report.applications_skipped,
            deployments_refreshed = report.deployments_refreshed,
            deployments_skipped = report.deployments_skipped,
            "Cluster info maintenance finished"
        );
        Ok(())
    }
}
