//! Cleanup feed backed by a JSON document endpoint.
//!
//! `GET {base}/cleanups` returns every stored report as a JSON array and
//! `POST {base}/cleanups` appends one report and echoes it back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shoreline_core::{
    events::CommunityEvent,
    model::{CleanupEvent, DATE_FORMAT, LocationId, LooseDate, RegionMeta},
    ports::{CleanupFeedPort, PortError},
};

/// Rating assumed when a stored report carries none.
const DEFAULT_RATING: i32 = 5;

/// Stored report as found in the document collection.
///
/// Documents are written by several client generations, so every field is
/// read loosely: a value of the wrong type counts as missing instead of
/// failing the whole collection. Older documents use `cleanlinessRating`,
/// `cleanupDescription` and `timestamp` instead of `rating`, `description`
/// and `createdAt`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CleanupRecord {
    #[serde(default)]
    beach: Value,
    #[serde(default)]
    date: Option<LooseDate>,
    #[serde(default)]
    rating: Value,
    #[serde(default)]
    cleanliness_rating: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    cleanup_description: Value,
    #[serde(default)]
    contributor_name: Value,
    #[serde(default)]
    photo_url: Value,
    #[serde(default)]
    created_at: Option<LooseDate>,
    #[serde(default)]
    timestamp: Option<LooseDate>,
}

impl CleanupRecord {
    /// Normalise into a cleanup event. Records without a beach name are dropped.
    fn into_event(self) -> Option<CleanupEvent> {
        let beach = text(&self.beach)?;

        let rating = rating_value(&self.rating)
            .or_else(|| rating_value(&self.cleanliness_rating))
            .unwrap_or(DEFAULT_RATING);

        Some(CleanupEvent {
            location: LocationId::from(beach),
            date: self.date.as_ref().and_then(LooseDate::date),
            rating: Some(rating),
            description: text(&self.description).or_else(|| text(&self.cleanup_description)),
            contributor_name: text(&self.contributor_name),
            photo_url: text(&self.photo_url),
            created_at: self
                .created_at
                .as_ref()
                .and_then(LooseDate::instant)
                .or_else(|| self.timestamp.as_ref().and_then(LooseDate::instant)),
        })
    }
}

/// Announced community event as found in the document collection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    date: Option<LooseDate>,
    #[serde(default)]
    location: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    organizer: Value,
    #[serde(default)]
    contact_email: Value,
}

impl EventRecord {
    /// Normalise into a community event. Events without a usable start are dropped.
    fn into_event(self) -> Option<CommunityEvent> {
        let date = self.date.as_ref().and_then(LooseDate::instant)?;
        let field = |value: &Value| text(value).unwrap_or_default();

        Some(CommunityEvent {
            id: field(&self.id),
            title: field(&self.title),
            date,
            location: field(&self.location),
            description: field(&self.description),
            organizer: field(&self.organizer),
            contact_email: field(&self.contact_email),
        })
    }
}

/// Report body sent when appending to the collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewCleanupRecord<'a> {
    beach: &'a str,
    date: Option<String>,
    rating: Option<i32>,
    description: Option<&'a str>,
    contributor_name: Option<&'a str>,
    photo_url: Option<&'a str>,
    created_at: String,
}

impl<'a> NewCleanupRecord<'a> {
    fn from_event(event: &'a CleanupEvent, created_at: DateTime<Utc>) -> Self {
        Self {
            beach: &event.location.0,
            date: event
                .date
                .map(|date| date.format(DATE_FORMAT).to_string()),
            rating: event.rating,
            description: event.description.as_deref(),
            contributor_name: event.contributor_name.as_deref(),
            photo_url: event.photo_url.as_deref(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

/// Cleanup feed reading from and appending to a JSON endpoint.
pub struct HttpCleanupFeed {
    client: Client,
    base_url: String,
    meta: RegionMeta,
}

impl HttpCleanupFeed {
    /// Create a feed for `meta` served under `base_url`.
    #[must_use]
    pub fn new<S: Into<String>>(client: Client, base_url: S, meta: RegionMeta) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client,
            base_url,
            meta,
        }
    }

    fn cleanups_url(&self) -> String {
        format!("{}/cleanups", self.base_url)
    }

    fn events_url(&self) -> String {
        format!("{}/events", self.base_url)
    }
}

#[async_trait]
impl CleanupFeedPort for HttpCleanupFeed {
    fn region(&self) -> &RegionMeta {
        &self.meta
    }

    async fn cleanups(&self) -> Result<Vec<CleanupEvent>, PortError> {
        let records =
            fetch_json::<Vec<CleanupRecord>>(self.client.get(self.cleanups_url())).await?;
        let total = records.len();

        let events = records
            .into_iter()
            .filter_map(CleanupRecord::into_event)
            .collect::<Vec<_>>();

        if events.len() < total {
            warn!(
                "dropped {} cleanup records without a beach name",
                total - events.len()
            );
        }
        debug!("fetched {} cleanup reports from {}", events.len(), self.base_url);

        Ok(events)
    }

    async fn submit(&self, event: CleanupEvent) -> Result<CleanupEvent, PortError> {
        let body = NewCleanupRecord::from_event(&event, Utc::now());
        let req = self.client.post(self.cleanups_url()).json(&body);

        let stored = fetch_json::<CleanupRecord>(req).await?;
        stored
            .into_event()
            .ok_or_else(|| PortError::Internal("feed echoed a record without a beach".into()))
    }

    async fn community_events(&self) -> Result<Vec<CommunityEvent>, PortError> {
        let records = fetch_json::<Vec<EventRecord>>(self.client.get(self.events_url())).await?;
        let total = records.len();

        let events = records
            .into_iter()
            .filter_map(EventRecord::into_event)
            .collect::<Vec<_>>();

        if events.len() < total {
            warn!("dropped {} community events without a start date", total - events.len());
        }
        Ok(events)
    }
}

/// Non-blank, trimmed text. Other JSON types count as missing.
fn text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Non-zero whole rating, from a number or numeric text.
fn rating_value(value: &Value) -> Option<i32> {
    let parsed = match value {
        Value::Number(number) => number.as_i64().and_then(|raw| i32::try_from(raw).ok()),
        Value::String(raw) => raw.trim().parse::<i32>().ok(),
        _ => None,
    };
    parsed.filter(|rating| *rating != 0)
}

// Small helper to fetch and decode JSON with status handling.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, PortError> {
    req.send()
        .await
        .map_err(PortError::from)?
        .error_for_status()
        .map_err(PortError::from)?
        .json()
        .await
        .map_err(PortError::from)
}
