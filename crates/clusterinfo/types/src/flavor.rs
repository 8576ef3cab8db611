//! Hardware flavors and zone catalogs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named hardware shape offered by a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flavor {
    pub name: String,

    #[serde(default)]
    pub min_cpu_cores: f64,

    #[serde(default)]
    pub min_main_memory_available_gb: f64,

    #[serde(default)]
    pub min_disk_available_gb: f64,
}

impl Flavor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_cpu_cores: 0.0,
            min_main_memory_available_gb: 0.0,
            min_disk_available_gb: 0.0,
        }
    }

    pub fn with_resources(mut self, cpu: f64, memory_gb: f64, disk_gb: f64) -> Self {
        self.min_cpu_cores = cpu;
        self.min_main_memory_available_gb = memory_gb;
        self.min_disk_available_gb = disk_gb;
        self
    }
}

/// Flavors available in one zone, looked up by name
#[derive(Debug, Clone, Default)]
pub struct FlavorCatalog {
    flavors: HashMap<String, Flavor>,
}

impl FlavorCatalog {
    pub fn new(flavors: impl IntoIterator<Item = Flavor>) -> Self {
        Self {
            flavors: flavors
                .into_iter()
                .map(|flavor| (flavor.name.clone(), flavor))
                .collect(),
        }
    }

    pub fn get_flavor(&self, name: &str) -> Option<&Flavor> {
        self.flavors.get(name)
    }

    pub fn len(&self) -> usize {
        self.flavors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flavors.is_empty()
    }
}
