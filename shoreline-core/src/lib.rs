//! Core types and service wiring for the shoreline beach cleanup tracker.

/// Community cleanup events and their upcoming schedule.
pub mod events;
/// Contributor leaderboard derived from cleanup reports.
pub mod leaderboard;
/// Domain models and identifiers shared by all providers.
pub mod model;
/// Registry and helpers for plugging region-specific providers into the service.
pub mod plugin;
/// Traits describing the provider interfaces.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;
/// Per-location cleanliness classification and priority ranking.
pub mod status;
/// Validation of user-submitted cleanup reports.
pub mod submission;

pub use events::*;
pub use leaderboard::*;
pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;
pub use status::*;
pub use submission::*;
