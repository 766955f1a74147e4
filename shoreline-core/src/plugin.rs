//! Registry for all region plugins and their ports.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{RegionId, RegionMeta};
use crate::ports::{CatalogPort, CleanupFeedPort, PortError};

#[derive(thiserror::Error, Debug)]
/// Errors raised while assembling a [`PluginRegistry`].
pub enum RegistryError {
    /// Two plugins claim the same region.
    #[error("Region {0} is registered twice")]
    DuplicateRegion(RegionId),
}

/// Collection of ports implementing a provider for a single region.
pub struct RegionPlugin {
    /// Static metadata describing the region.
    pub meta: RegionMeta,
    /// Source of the monitored locations.
    pub catalog_port: Arc<dyn CatalogPort>,
    /// Source and sink of cleanup reports.
    pub feed_port: Arc<dyn CleanupFeedPort>,
}

/// Registry that resolves plugins by region identifier.
pub struct PluginRegistry {
    plugins: HashMap<RegionId, RegionPlugin>,
}

impl PluginRegistry {
    /// Build a registry from the provided plugin list.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRegion`] when two plugins share a region id.
    pub fn new(plugins: Vec<RegionPlugin>) -> Result<Self, RegistryError> {
        let mut plugins_map = HashMap::with_capacity(plugins.len());
        for plugin in plugins {
            let id = plugin.meta.id.clone();
            if plugins_map.insert(id.clone(), plugin).is_some() {
                return Err(RegistryError::DuplicateRegion(id));
            }
        }
        Ok(Self {
            plugins: plugins_map,
        })
    }

    /// Return metadata for all registered regions, ordered by identifier.
    #[must_use]
    pub fn regions(&self) -> Vec<RegionMeta> {
        let mut regions = self.regions_iter().cloned().collect::<Vec<_>>();
        regions.sort_by(|left, right| left.id.cmp(&right.id));
        regions
    }

    /// Iterator over region metadata.
    pub fn regions_iter(&self) -> impl Iterator<Item = &RegionMeta> {
        self.plugins.values().map(|plugin| &plugin.meta)
    }

    /// Look up a plugin for the given region.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::UnsupportedRegion`] when no plugin is registered.
    pub fn plugin(&self, region: &RegionId) -> Result<&RegionPlugin, PortError> {
        self.plugins.get(region).ok_or(PortError::UnsupportedRegion)
    }
}
