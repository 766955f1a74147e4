//! Community cleanup events announced by organizers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A scheduled group cleanup.
pub struct CommunityEvent {
    /// Identifier assigned by the feed.
    pub id: String,
    /// Headline of the event.
    pub title: String,
    /// When the event starts.
    pub date: DateTime<Utc>,
    /// Free-text meeting point.
    pub location: String,
    /// Details for participants.
    pub description: String,
    /// Who runs the event.
    pub organizer: String,
    /// Where to sign up or ask questions.
    pub contact_email: String,
}

/// Events starting at or after `now`, soonest first.
///
/// Events sharing a start keep their feed order.
#[must_use]
pub fn upcoming_events(events: &[CommunityEvent], now: DateTime<Utc>) -> Vec<CommunityEvent> {
    let mut upcoming = events
        .iter()
        .filter(|event| event.date >= now)
        .cloned()
        .collect::<Vec<_>>();
    upcoming.sort_by_key(|event| event.date);
    upcoming
}
