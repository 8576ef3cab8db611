//! Static node inventory for development and testing

use super::traits::NodeInventory;
use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use clusterinfo_types::{DeploymentId, NodeList};
use dashmap::DashMap;

/// Serves preloaded node lists; unknown deployments are rejected
#[derive(Debug, Default)]
pub struct StaticInventory {
    nodes: DashMap<DeploymentId, NodeList>,
    failures: DashMap<DeploymentId, String>,
}

impl StaticInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `nodes` for a deployment, clearing any injected failure
    pub fn set_nodes(&self, deployment: DeploymentId, nodes: NodeList) {
        self.failures.remove(&deployment);
        self.nodes.insert(deployment, nodes);
    }

    /// Make fetches for a deployment fail with a transport error
    pub fn fail(&self, deployment: DeploymentId, message: impl Into<String>) {
        self.failures.insert(deployment, message.into());
    }
}

#[async_trait]
impl NodeInventory for StaticInventory {
    async fn node_list(&self, deployment: &DeploymentId) -> FetchResult<NodeList> {
        if let Some(message) = self.failures.get(deployment) {
            return Err(FetchError::Transport(message.value().clone()));
        }

        self.nodes
            .get(deployment)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| FetchError::InvalidArgument(format!("Unknown deployment {}", deployment)))
    }
}
