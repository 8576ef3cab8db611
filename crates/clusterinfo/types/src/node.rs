//! Node inventory records
//!
//! A `NodeList` is what the inventory service reports for one deployment.

use serde::{Deserialize, Serialize};

/// Nodes currently assigned to a deployment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeList {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
}

impl NodeList {
    pub fn new(nodes: Vec<NodeRecord>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A single node as reported by the inventory service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    /// Fully qualified hostname
    pub hostname: String,

    /// Hardware flavor name, resolved against the zone catalog
    pub flavor: String,

    /// Cost units for this node
    #[serde(default)]
    pub cost: u32,

    /// Cluster membership; absent for unallocated or retiring nodes
    #[serde(default)]
    pub membership: Option<Membership>,
}

impl NodeRecord {
    /// A node without cluster membership
    pub fn new(hostname: impl Into<String>, flavor: impl Into<String>, cost: u32) -> Self {
        Self {
            hostname: hostname.into(),
            flavor: flavor.into(),
            cost,
            membership: None,
        }
    }

    pub fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = Some(membership);
        self
    }
}

/// Cluster membership of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub cluster_id: String,

    /// Raw cluster type, parsed into `ClusterType` during aggregation
    pub cluster_type: String,

    #[serde(default)]
    pub index: Option<u32>,

    #[serde(default)]
    pub retired: bool,
}

impl Membership {
    pub fn new(cluster_id: impl Into<String>, cluster_type: impl Into<String>) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            cluster_type: cluster_type.into(),
            index: None,
            retired: false,
        }
    }
}
