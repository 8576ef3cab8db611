//! Error types for clusterinfo-daemon

use clusterinfo_types::{ApplicationId, ClusterTypeError};
use thiserror::Error;

/// Daemon-level errors
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// Inventory client error
    #[error("Inventory error: {0}")]
    Inventory(#[from] FetchError),

    /// Maintenance error
    #[error("Maintenance error: {0}")]
    Maintenance(#[from] MaintainerError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application directory errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Commit attempted with a lock held for another application
    #[error("Lock for {held} cannot be used to store {target}")]
    LockMismatch {
        held: ApplicationId,
        target: ApplicationId,
    },

    /// Lock could not be acquired
    #[error("Lock error: {0}")]
    Lock(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Inventory fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure outside the HTTP client
    #[error("Transport error: {0}")]
    Transport(String),

    /// Inventory base URL cannot carry a node list path
    #[error("Invalid inventory URL: {0}")]
    InvalidUrl(String),

    /// The inventory rejected the deployment identity
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Any other non-success response
    #[error("Inventory API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Why a single deployment could not be refreshed this tick
#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error("Fetching node list failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Fetching node list timed out after {0}s")]
    Timeout(u64),

    #[error("Aggregating cluster info failed: {0}")]
    ClusterType(#[from] ClusterTypeError),

    #[error("Storing cluster info failed: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that abort a whole maintenance tick
#[derive(Debug, Error)]
pub enum MaintainerError {
    #[error("Listing applications failed: {0}")]
    ListApplications(#[source] StorageError),
}

/// Result type alias for directory operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for inventory operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type alias for maintenance ticks
pub type MaintainerResult<T> = Result<T, MaintainerError>;

/// Result type alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;
