//! Cluster types and per-cluster summaries

use crate::ClusterId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cluster summaries of one deployment, keyed by cluster id
pub type ClusterInfo = BTreeMap<ClusterId, ClusterSummary>;

/// Role a cluster serves within a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterType {
    Admin,
    Container,
    Content,
}

impl ClusterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterType::Admin => "admin",
            ClusterType::Container => "container",
            ClusterType::Content => "content",
        }
    }
}

impl fmt::Display for ClusterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to parse a cluster type reported by the inventory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterTypeError {
    #[error("Unknown cluster type: '{0}'")]
    Unknown(String),
}

impl FromStr for ClusterType {
    type Err = ClusterTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(ClusterType::Admin),
            "container" => Ok(ClusterType::Container),
            "content" => Ok(ClusterType::Content),
            other => Err(ClusterTypeError::Unknown(other.to_string())),
        }
    }
}

/// Hardware, cost and membership of one cluster
///
/// Hardware and cost describe a single representative node; all members of a
/// cluster are assumed to be provisioned identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Flavor name of the representative node
    pub flavor: String,

    /// Cost units of the representative node
    pub cost: u32,

    /// Minimum CPU cores of the flavor
    pub cpu: f64,

    /// Minimum main memory of the flavor, in GB
    pub mem: f64,

    /// Disk, in GB
    pub disk: f64,

    pub cluster_type: ClusterType,

    /// Member hostnames in inventory order
    pub hostnames: Vec<String>,
}
