//! Provider implementation for the Aruba beach cleanup region.
//!
//! The catalog is compiled in. Cleanup reports live in memory unless the
//! caller supplies another feed through [`plugin_with_feed`].

mod catalog;

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use shoreline_core::{
    events::CommunityEvent,
    model::{CleanupEvent, Location, RegionId, RegionMeta, Regions},
    plugin::RegionPlugin,
    ports::{CatalogPort, CleanupFeedPort, PortError},
};

/// Catalog of the monitored Aruba beaches.
pub struct ArubaCatalogPort {
    meta: RegionMeta,
}

impl ArubaCatalogPort {
    /// Create a catalog port.
    #[must_use]
    pub fn new() -> Self {
        Self {
            meta: region_meta(),
        }
    }
}

impl Default for ArubaCatalogPort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogPort for ArubaCatalogPort {
    fn region(&self) -> &RegionMeta {
        &self.meta
    }

    async fn locations(&self) -> Result<Vec<Location>, PortError> {
        Ok(catalog::locations())
    }
}

/// Cleanup feed kept in process memory.
pub struct MemoryCleanupFeed {
    meta: RegionMeta,
    events: RwLock<Vec<CleanupEvent>>,
    community: Vec<CommunityEvent>,
}

impl MemoryCleanupFeed {
    /// Create an empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_events(Vec::new())
    }

    /// Create a feed holding the reports shipped with the catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_events(catalog::seed_cleanups())
    }

    /// Create a feed holding `events`.
    #[must_use]
    pub fn with_events(events: Vec<CleanupEvent>) -> Self {
        Self {
            meta: region_meta(),
            events: RwLock::new(events),
            community: Vec::new(),
        }
    }

    /// Announce `community` events alongside the reports.
    #[must_use]
    pub fn with_community_events(mut self, community: Vec<CommunityEvent>) -> Self {
        self.community = community;
        self
    }
}

impl Default for MemoryCleanupFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CleanupFeedPort for MemoryCleanupFeed {
    fn region(&self) -> &RegionMeta {
        &self.meta
    }

    async fn cleanups(&self) -> Result<Vec<CleanupEvent>, PortError> {
        let events = self
            .events
            .read()
            .map_err(|_err| PortError::Internal("cleanup feed lock poisoned".into()))?;
        Ok(events.clone())
    }

    async fn submit(&self, mut event: CleanupEvent) -> Result<CleanupEvent, PortError> {
        if event.created_at.is_none() {
            event.created_at = Some(Utc::now());
        }

        let mut events = self
            .events
            .write()
            .map_err(|_err| PortError::Internal("cleanup feed lock poisoned".into()))?;
        events.push(event.clone());
        debug!("memory feed now holds {} cleanup reports", events.len());

        Ok(event)
    }

    async fn community_events(&self) -> Result<Vec<CommunityEvent>, PortError> {
        Ok(self.community.clone())
    }
}

/// Build the plugin bundle with the seeded in-memory feed.
#[must_use]
pub fn plugin() -> RegionPlugin {
    plugin_with_feed(Arc::new(MemoryCleanupFeed::seeded()))
}

/// Build the plugin bundle around an externally provided cleanup feed.
#[must_use]
pub fn plugin_with_feed(feed_port: Arc<dyn CleanupFeedPort>) -> RegionPlugin {
    RegionPlugin {
        meta: region_meta(),
        catalog_port: Arc::new(ArubaCatalogPort::new()),
        feed_port,
    }
}

/// Metadata of the Aruba region.
#[must_use]
pub fn region_meta() -> RegionMeta {
    RegionMeta {
        id: RegionId::from(Regions::Aruba),
        name: String::from("Aruba"),
    }
}
