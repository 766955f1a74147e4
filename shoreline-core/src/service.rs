//! High-level service facade combining all providers.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info};

use crate::events::{CommunityEvent, upcoming_events};
use crate::leaderboard::{LeaderboardEntry, leaderboard};
use crate::model::{CleanupEvent, Location, LocationId, RegionId};
use crate::plugin::PluginRegistry;
use crate::ports::PortError;
use crate::status::{PriorityEntry, classify, rank_by_priority};
use crate::submission::CleanupSubmission;

/// Public entry point for statuses, rankings, and cleanup reports.
pub struct ShorelineService {
    registry: Arc<PluginRegistry>,
}

impl ShorelineService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self { registry }
    }

    /// List all available regions and their display names.
    #[must_use]
    pub fn regions(&self) -> Vec<(RegionId, String)> {
        self.registry
            .regions()
            .into_iter()
            .map(|meta| (meta.id, meta.name))
            .collect()
    }

    /// Rank the region's locations most urgent first, keeping at most `limit`.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the region is unsupported or a provider call fails.
    pub async fn priority_list(
        &self,
        region: &RegionId,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<PriorityEntry>, PortError> {
        let (locations, events) = self.snapshot(region).await?;
        let mut ranked = rank_by_priority(&locations, &events, now);
        ranked.truncate(limit);
        Ok(ranked)
    }

    /// Derive the status of one location.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the region is unsupported, the location is not
    /// in its catalog, or a provider call fails.
    pub async fn status_of(
        &self,
        region: &RegionId,
        location_id: &LocationId,
        now: DateTime<Utc>,
    ) -> Result<PriorityEntry, PortError> {
        let (locations, events) = self.snapshot(region).await?;
        let location = find_location(locations, location_id)?;
        let status = classify(&location, &events, now);
        Ok(PriorityEntry { location, status })
    }

    /// Cleanup reports for one location, newest first. Undated reports come last.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the region is unsupported, the location is not
    /// in its catalog, or a provider call fails.
    pub async fn history(
        &self,
        region: &RegionId,
        location_id: &LocationId,
    ) -> Result<Vec<CleanupEvent>, PortError> {
        let (locations, events) = self.snapshot(region).await?;
        let location = find_location(locations, location_id)?;

        let mut history = events
            .into_iter()
            .filter(|event| event.location == location.id)
            .collect::<Vec<_>>();
        history.sort_by(|left, right| right.date.cmp(&left.date));
        Ok(history)
    }

    /// Contributors of the region ordered by number of reports.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the region is unsupported or the feed cannot be read.
    pub async fn leaderboard(
        &self,
        region: &RegionId,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, PortError> {
        let plugin = self.registry.plugin(region)?;
        let events = plugin.feed_port.cleanups().await?;
        Ok(leaderboard(&events, limit))
    }

    /// Community events of the region that have not started before `now`, soonest first.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the region is unsupported or the feed cannot be read.
    pub async fn upcoming_events(
        &self,
        region: &RegionId,
        now: DateTime<Utc>,
    ) -> Result<Vec<CommunityEvent>, PortError> {
        let plugin = self.registry.plugin(region)?;
        let events = plugin.feed_port.community_events().await?;
        let upcoming = upcoming_events(&events, now);
        debug!(
            "{} of {} community events in {region} are upcoming",
            upcoming.len(),
            events.len()
        );
        Ok(upcoming)
    }

    /// Validate a visitor's report against the catalog and append it to the feed.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::InvalidSubmission`] when validation fails, or another
    /// [`PortError`] if the region is unsupported or a provider call fails.
    pub async fn submit_cleanup(
        &self,
        region: &RegionId,
        submission: CleanupSubmission,
        today: NaiveDate,
    ) -> Result<CleanupEvent, PortError> {
        let plugin = self.registry.plugin(region)?;
        let locations = plugin.catalog_port.locations().await?;
        let event = submission.validate(&locations, today)?;

        let stored = plugin.feed_port.submit(event).await?;
        info!("stored cleanup report for {} in {region}", stored.location);
        Ok(stored)
    }

    async fn snapshot(
        &self,
        region: &RegionId,
    ) -> Result<(Vec<Location>, Vec<CleanupEvent>), PortError> {
        let plugin = self.registry.plugin(region)?;
        let locations = plugin.catalog_port.locations().await?;
        let events = plugin.feed_port.cleanups().await?;
        debug!(
            "snapshot for {region}: {} locations, {} cleanup reports",
            locations.len(),
            events.len()
        );
        Ok((locations, events))
    }
}

fn find_location(locations: Vec<Location>, location_id: &LocationId) -> Result<Location, PortError> {
    locations
        .into_iter()
        .find(|location| &location.id == location_id)
        .ok_or_else(|| PortError::UnknownLocation(location_id.clone()))
}
