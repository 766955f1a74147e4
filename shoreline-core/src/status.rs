//! Cleanliness classification and priority ranking for monitored locations.
//!
//! Everything in this module is a pure function of the catalog, the cleanup
//! reports, and the `now` passed in by the caller. Nothing is cached between
//! calls.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{CleanupEvent, Location};

/// Sort projection of [`DaysSince::Never`].
pub const NEVER_CLEANED_SCORE: u32 = 999;
/// First elapsed-day count classified as [`Tier::Moderate`].
pub const MODERATE_AFTER_DAYS: u32 = 45;
/// Last elapsed-day count classified as [`Tier::Moderate`].
pub const URGENT_AFTER_DAYS: u32 = 90;

const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Whole days since the most recent cleanup of a location.
pub enum DaysSince {
    /// No dated cleanup was ever reported.
    Never,
    /// Days elapsed, never negative.
    Days(u32),
}

impl DaysSince {
    /// Elapsed days, if the location was ever cleaned.
    #[must_use]
    pub fn days(self) -> Option<u32> {
        match self {
            DaysSince::Never => None,
            DaysSince::Days(days) => Some(days),
        }
    }

    /// Numeric projection used for ordering; larger means more overdue.
    #[must_use]
    pub fn priority_score(self) -> u32 {
        match self {
            DaysSince::Never => NEVER_CLEANED_SCORE,
            DaysSince::Days(days) => days,
        }
    }
}

impl fmt::Display for DaysSince {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysSince::Never => formatter.write_str("never cleaned"),
            DaysSince::Days(0) => formatter.write_str("today"),
            DaysSince::Days(1) => formatter.write_str("1 day ago"),
            DaysSince::Days(days) => write!(formatter, "{days} days ago"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Three-step urgency classification.
pub enum Tier {
    /// Cleaned within the last 45 days.
    Recent,
    /// Cleaned 45 to 90 days ago.
    Moderate,
    /// Cleaned more than 90 days ago, or never.
    Urgent,
}

impl Tier {
    /// Classify an elapsed-day count.
    #[must_use]
    pub fn from_days(days_since: DaysSince) -> Self {
        match days_since {
            DaysSince::Days(days) if days < MODERATE_AFTER_DAYS => Tier::Recent,
            DaysSince::Days(days) if days <= URGENT_AFTER_DAYS => Tier::Moderate,
            DaysSince::Days(_) | DaysSince::Never => Tier::Urgent,
        }
    }

    /// Conventional marker colour for the tier.
    #[must_use]
    pub fn color_name(self) -> &'static str {
        match self {
            Tier::Recent => "green",
            Tier::Moderate => "orange",
            Tier::Urgent => "red",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Recent => "recent",
            Tier::Moderate => "moderate",
            Tier::Urgent => "urgent",
        };
        formatter.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Status of one location at one instant.
pub struct DerivedStatus {
    /// Days since the latest dated cleanup.
    pub days_since_cleanup: DaysSince,
    /// Ordering key; higher is more urgent.
    pub priority_score: u32,
    /// Urgency classification.
    pub tier: Tier,
}

impl DerivedStatus {
    fn never() -> Self {
        Self::from_days(DaysSince::Never)
    }

    fn from_days(days_since_cleanup: DaysSince) -> Self {
        Self {
            days_since_cleanup,
            priority_score: days_since_cleanup.priority_score(),
            tier: Tier::from_days(days_since_cleanup),
        }
    }

    /// Build a status from a signed day count. Negative counts come from
    /// cleanup dates after `now` and clamp to zero.
    fn from_elapsed(elapsed: i64) -> Self {
        let days = u32::try_from(elapsed.max(0)).unwrap_or(u32::MAX);
        Self::from_days(DaysSince::Days(days))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A location together with its derived status.
pub struct PriorityEntry {
    /// Catalog entry.
    pub location: Location,
    /// Status at the ranking instant.
    pub status: DerivedStatus,
}

/// Latest dated cleanup reported for `location`.
///
/// Reports are matched by exact name. Reports without a usable date are
/// skipped. When several reports share the latest date the first one in
/// `events` wins.
#[must_use]
pub fn most_recent_cleanup<'a>(
    location: &Location,
    events: &'a [CleanupEvent],
) -> Option<&'a CleanupEvent> {
    events
        .iter()
        .filter(|event| event.location == location.id && event.date.is_some())
        .fold(None::<&CleanupEvent>, |latest, candidate| match latest {
            Some(current) if current.date >= candidate.date => Some(current),
            _ => Some(candidate),
        })
}

/// Whole days between midnight UTC of `date` and `now`, rounded down.
///
/// Negative when `date` lies in the future relative to `now`.
#[must_use]
pub fn elapsed_days(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    (now - midnight).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Derive the status of a single location.
#[must_use]
pub fn classify(location: &Location, events: &[CleanupEvent], now: DateTime<Utc>) -> DerivedStatus {
    match most_recent_cleanup(location, events).and_then(|event| event.date) {
        Some(date) => DerivedStatus::from_elapsed(elapsed_days(date, now)),
        None => DerivedStatus::never(),
    }
}

/// Classify every location and order them most urgent first.
///
/// Locations with equal scores keep their catalog order.
#[must_use]
pub fn rank_by_priority(
    locations: &[Location],
    events: &[CleanupEvent],
    now: DateTime<Utc>,
) -> Vec<PriorityEntry> {
    let mut ranked = locations
        .iter()
        .map(|location| PriorityEntry {
            location: location.clone(),
            status: classify(location, events, now),
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|left, right| right.status.priority_score.cmp(&left.status.priority_score));

    debug!(
        "ranked {} locations against {} cleanup reports",
        ranked.len(),
        events.len()
    );

    ranked
}
