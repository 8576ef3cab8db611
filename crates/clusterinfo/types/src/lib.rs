//! Cluster Info Types - Core types for fleet topology snapshots
//!
//! These types describe what the cluster info maintainer reads from the fleet
//! and what it writes back onto application records:
//!
//! - **NodeRecord / NodeList**: raw per-node inventory reported for a deployment
//! - **Flavor / FlavorCatalog**: zone-scoped hardware shapes
//! - **ClusterSummary**: per-cluster aggregate of hardware, cost and members
//! - **Application / Deployment**: the records summaries are stored against

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod application;
pub mod cluster;
pub mod flavor;
pub mod ids;
pub mod node;

// Re-export main types
pub use application::{Application, Deployment};
pub use cluster::{ClusterInfo, ClusterSummary, ClusterType, ClusterTypeError};
pub use flavor::{Flavor, FlavorCatalog};
pub use ids::{ApplicationId, ClusterId, DeploymentId, ZoneId};
pub use node::{Membership, NodeList, NodeRecord};
