//! Cluster info daemon library
//!
//! This module provides the core components for the cluster info daemon:
//! - Cluster aggregation of node lists
//! - Application directory and node inventory backends
//! - Scheduler and reconciliation
//! - Server lifecycle management

pub mod aggregator;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod inventory;
pub mod scheduler;
pub mod server;

pub use aggregator::aggregate;
pub use catalog::{HardwareCatalog, StaticCatalog};
pub use config::DaemonConfig;
pub use directory::{ApplicationDirectory, ApplicationLock, InMemoryDirectory};
pub use error::{DaemonError, DeploymentError, FetchError, MaintainerError, StorageError};
pub use inventory::{HttpInventoryClient, NodeInventory, StaticInventory};
pub use scheduler::{ClusterInfoMaintainer, JobControl, Maintenance, Scheduler, TickReport};
pub use server::Server;
