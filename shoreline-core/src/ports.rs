//! Traits describing provider capabilities and the shared error type.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::events::CommunityEvent;
use crate::model::{CleanupEvent, Location, LocationId, RegionMeta};
use crate::submission::SubmissionError;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to provider backends.
pub enum PortError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// The region has no registered plugin.
    #[error("Unsupported region")]
    UnsupportedRegion,
    /// The location is not part of the region's catalog.
    #[error("Unknown location: {0}")]
    UnknownLocation(LocationId),
    /// A cleanup report was rejected before it reached the feed.
    #[error("Invalid submission: {0}")]
    InvalidSubmission(#[from] SubmissionError),
    /// Internal provider error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Trait for the static catalog of monitored locations.
pub trait CatalogPort: Send + Sync {
    /// Metadata describing the region handled by this port.
    fn region(&self) -> &RegionMeta;

    /// All monitored locations, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the catalog cannot be loaded.
    async fn locations(&self) -> Result<Vec<Location>, PortError>;
}

#[async_trait]
/// Trait for the cleanup report feed of a region.
pub trait CleanupFeedPort: Send + Sync {
    /// Metadata describing the region handled by this port.
    fn region(&self) -> &RegionMeta;

    /// Current snapshot of every cleanup report. The snapshot is treated as
    /// complete by callers.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the feed cannot be read.
    async fn cleanups(&self) -> Result<Vec<CleanupEvent>, PortError>;

    /// Append a validated cleanup report and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the feed rejects or fails to store the report.
    async fn submit(&self, event: CleanupEvent) -> Result<CleanupEvent, PortError>;

    /// Every announced community event, past ones included.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the events cannot be read.
    async fn community_events(&self) -> Result<Vec<CommunityEvent>, PortError>;
}
