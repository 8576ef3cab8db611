//! Configuration for clusterinfo-daemon

use clusterinfo_types::{Application, ApplicationId, Deployment, Flavor, ZoneId};
use serde::{Deserialize, Serialize};

/// Main daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Maintenance job configuration
    #[serde(default)]
    pub maintainer: MaintainerConfig,

    /// Inventory service configuration
    #[serde(default)]
    pub inventory: InventoryConfig,

    /// Flavor catalogs per zone
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,

    /// Applications loaded into the in-memory directory at startup
    #[serde(default)]
    pub applications: Vec<ApplicationSeed>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cluster info maintainer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintainerConfig {
    /// Interval between ticks in seconds
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// Start with the job active
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Applications refreshed concurrently within one tick
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_applications: usize,

    /// Upper bound on one node list fetch, in seconds
    #[serde(default = "default_inventory_timeout")]
    pub inventory_timeout_secs: u64,
}

impl Default for MaintainerConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            enabled: true,
            max_concurrent_applications: default_max_concurrent(),
            inventory_timeout_secs: default_inventory_timeout(),
        }
    }
}

/// Inventory service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Base URL of the inventory API
    #[serde(default = "default_inventory_url")]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_inventory_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Flavors offered by one zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub zone: ZoneId,

    #[serde(default)]
    pub flavors: Vec<Flavor>,
}

/// An application and the zones it is deployed in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSeed {
    pub id: ApplicationId,

    #[serde(default)]
    pub zones: Vec<ZoneId>,
}

impl ApplicationSeed {
    /// Application record with an empty deployment per zone
    pub fn to_application(&self) -> Application {
        self.zones
            .iter()
            .fold(Application::new(self.id.clone()), |app, zone| {
                app.with(Deployment::new(zone.clone()))
            })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_interval() -> u64 {
    300
}

fn default_max_concurrent() -> usize {
    4
}

fn default_inventory_timeout() -> u64 {
    60
}

fn default_inventory_url() -> String {
    "http://localhost:19071".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DaemonConfig {
    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&DaemonConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Environment variables, e.g. CLUSTERINFO__MAINTAINER__INTERVAL_SECS
        builder = builder.add_source(
            config::Environment::with_prefix("CLUSTERINFO")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: DaemonConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every fetch fail
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.maintainer.inventory_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "maintainer.inventory_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.inventory.request_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "inventory.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
