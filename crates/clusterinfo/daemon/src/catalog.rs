//! Zone hardware catalogs

use crate::config::ZoneConfig;
use clusterinfo_types::{FlavorCatalog, ZoneId};
use std::collections::HashMap;

/// Lookup of the flavor catalog a zone exposes
pub trait HardwareCatalog: Send + Sync {
    /// Flavors of a zone, if the zone exposes a catalog
    fn node_flavors(&self, zone: &ZoneId) -> Option<&FlavorCatalog>;
}

/// Catalogs fixed at startup
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    zones: HashMap<ZoneId, FlavorCatalog>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build catalogs from the `zones` configuration section
    pub fn from_config(zones: &[ZoneConfig]) -> Self {
        let mut catalog = Self::new();
        for zone in zones {
            catalog = catalog.with_zone(
                zone.zone.clone(),
                FlavorCatalog::new(zone.flavors.iter().cloned()),
            );
        }
        catalog
    }

    pub fn with_zone(mut self, zone: ZoneId, flavors: FlavorCatalog) -> Self {
        self.zones.insert(zone, flavors);
        self
    }
}

impl HardwareCatalog for StaticCatalog {
    fn node_flavors(&self, zone: &ZoneId) -> Option<&FlavorCatalog> {
        self.zones.get(zone)
    }
}
