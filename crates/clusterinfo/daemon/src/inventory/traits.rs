//! Node inventory trait definitions

use crate::error::FetchResult;
use async_trait::async_trait;
use clusterinfo_types::{DeploymentId, NodeList};

/// Source of the nodes currently assigned to a deployment
#[async_trait]
pub trait NodeInventory: Send + Sync {
    /// Fetch the node list of a deployment
    async fn node_list(&self, deployment: &DeploymentId) -> FetchResult<NodeList>;
}
