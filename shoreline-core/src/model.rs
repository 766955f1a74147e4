//! Domain data structures for regions, monitored locations, and cleanup reports.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Calendar date format used by cleanup reports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Built-in regions supported by the application.
pub enum Regions {
    /// North-east coast of Aruba.
    Aruba,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Identifier for a region known to shoreline.
pub struct RegionId(pub String);

impl fmt::Display for Regions {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Regions::Aruba => "aruba",
        };
        write!(formatter, "{slug}")
    }
}

impl From<Regions> for RegionId {
    fn from(region: Regions) -> Self {
        RegionId(region.to_string())
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing a region and its human-friendly name.
pub struct RegionMeta {
    /// Unique identifier.
    pub id: RegionId,
    /// Display name.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a monitored location; the location's name, unique within a catalog.
pub struct LocationId(pub String);

impl fmt::Display for LocationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(name: &str) -> Self {
        LocationId(name.to_owned())
    }
}

impl From<String> for LocationId {
    fn from(name: String) -> Self {
        LocationId(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// WGS84 latitude/longitude pair.
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A monitored beach site from the static catalog.
pub struct Location {
    /// Name of the site, used as its identifier.
    pub id: LocationId,
    /// Where the site is.
    pub coordinates: Coordinates,
    /// Free-text description of the site and its usual litter.
    pub description: String,
    /// Image reference (URL or site-relative path).
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single reported cleanup at a location.
pub struct CleanupEvent {
    /// Location the cleanup belongs to. Not checked against any catalog.
    pub location: LocationId,
    /// Day of the cleanup. `None` when the reported date could not be parsed.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    /// Cleanliness rating after the cleanup, nominally 1–10.
    #[serde(default)]
    pub rating: Option<i32>,
    /// Optional description of what was collected.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional contributor name, only present when the contributor consented.
    #[serde(default)]
    pub contributor_name: Option<String>,
    /// Optional photo reference.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// When the report was stored. Display ordering only.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CleanupEvent {
    /// Create a report with only a location and a date set.
    #[must_use]
    pub fn new<L: Into<LocationId>>(location: L, date: Option<NaiveDate>) -> Self {
        Self {
            location: location.into(),
            date,
            rating: None,
            description: None,
            contributor_name: None,
            photo_url: None,
            created_at: None,
        }
    }

    /// Set the cleanliness rating.
    #[must_use]
    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the contributor name.
    #[must_use]
    pub fn with_contributor<S: Into<String>>(mut self, name: S) -> Self {
        self.contributor_name = Some(name.into());
        self
    }
}

/// Parse a reported cleanup date.
///
/// Accepts plain `YYYY-MM-DD` dates and RFC 3339 timestamps, the latter
/// reduced to their UTC calendar date. Anything else yields `None`.
#[must_use]
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        })
}

/// Date value as stored by loosely typed document stores.
///
/// Accepts date strings, RFC 3339 timestamps and epoch milliseconds. Any other
/// JSON value is kept as [`LooseDate::Unusable`] instead of failing the
/// surrounding document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseDate {
    /// `YYYY-MM-DD` or RFC 3339 text.
    Text(String),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Anything else.
    Unusable(IgnoredAny),
}

impl LooseDate {
    /// Calendar day (UTC) the value refers to.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            LooseDate::Text(raw) => parse_event_date(raw),
            LooseDate::EpochMillis(_) | LooseDate::Unusable(_) => {
                self.instant().map(|instant| instant.date_naive())
            }
        }
    }

    /// Instant the value refers to. Plain dates resolve to midnight UTC.
    #[must_use]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            LooseDate::Text(raw) => DateTime::parse_from_rfc3339(raw.trim())
                .ok()
                .map(|instant| instant.with_timezone(&Utc))
                .or_else(|| {
                    parse_event_date(raw).map(|date| date.and_time(NaiveTime::MIN).and_utc())
                }),
            LooseDate::EpochMillis(millis) => DateTime::from_timestamp_millis(*millis),
            LooseDate::Unusable(_) => None,
        }
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LooseDate>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(LooseDate::date))
}
