use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use shoreline_core::{
    CatalogPort, CleanupEvent, CleanupFeedPort, CleanupSubmission, CommunityEvent, Coordinates,
    DaysSince, Location, LocationId, PluginRegistry, PortError, RegionId, RegionMeta,
    RegionPlugin, RegistryError, ShorelineService, SubmissionError, Tier,
};

struct FixedCatalog {
    meta: RegionMeta,
    locations: Vec<Location>,
}

#[async_trait]
impl CatalogPort for FixedCatalog {
    fn region(&self) -> &RegionMeta {
        &self.meta
    }

    async fn locations(&self) -> Result<Vec<Location>, PortError> {
        Ok(self.locations.clone())
    }
}

struct VecFeed {
    meta: RegionMeta,
    events: Mutex<Vec<CleanupEvent>>,
    community: Vec<CommunityEvent>,
}

#[async_trait]
impl CleanupFeedPort for VecFeed {
    fn region(&self) -> &RegionMeta {
        &self.meta
    }

    async fn cleanups(&self) -> Result<Vec<CleanupEvent>, PortError> {
        let events = self
            .events
            .lock()
            .map_err(|err| PortError::Internal(err.to_string()))?;
        Ok(events.clone())
    }

    async fn submit(&self, event: CleanupEvent) -> Result<CleanupEvent, PortError> {
        let mut events = self
            .events
            .lock()
            .map_err(|err| PortError::Internal(err.to_string()))?;
        events.push(event.clone());
        Ok(event)
    }

    async fn community_events(&self) -> Result<Vec<CommunityEvent>, PortError> {
        Ok(self.community.clone())
    }
}

fn region() -> RegionId {
    RegionId("test-coast".to_owned())
}

fn location(name: &str) -> Location {
    Location {
        id: LocationId::from(name),
        coordinates: Coordinates {
            lat: 12.59,
            lng: -70.01,
        },
        description: format!("{name} description"),
        image: format!("/images/{name}.png"),
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 16, 9, 30, 0)
        .single()
        .expect("valid instant")
}

fn morning(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, 8, 0, 0)
        .single()
        .expect("valid instant")
}

fn community_event(id: &str, date: DateTime<Utc>) -> CommunityEvent {
    CommunityEvent {
        id: id.to_owned(),
        title: format!("Cleanup {id}"),
        date,
        location: "Druif beach".to_owned(),
        description: "Bags and gloves provided".to_owned(),
        organizer: "Sarah M.".to_owned(),
        contact_email: "sarah@example.org".to_owned(),
    }
}

fn plugin(events: Vec<CleanupEvent>, community: Vec<CommunityEvent>) -> RegionPlugin {
    let meta = RegionMeta {
        id: region(),
        name: "Test coast".to_owned(),
    };
    RegionPlugin {
        meta: meta.clone(),
        catalog_port: Arc::new(FixedCatalog {
            meta: meta.clone(),
            locations: vec![location("Druif beach"), location("Didi beach"), location("klif")],
        }),
        feed_port: Arc::new(VecFeed {
            meta,
            events: Mutex::new(events),
            community,
        }),
    }
}

fn service(events: Vec<CleanupEvent>) -> ShorelineService {
    service_with_community(events, Vec::new())
}

fn service_with_community(
    events: Vec<CleanupEvent>,
    community: Vec<CommunityEvent>,
) -> ShorelineService {
    let registry = PluginRegistry::new(vec![plugin(events, community)]).expect("registry");
    ShorelineService::new(Arc::new(registry))
}

fn seeded() -> ShorelineService {
    service(vec![
        CleanupEvent::new("Druif beach", Some(day(2024, 1, 1)))
            .with_rating(7)
            .with_contributor("Mike R."),
        CleanupEvent::new("Druif beach", Some(day(2024, 3, 10)))
            .with_rating(9)
            .with_contributor("Sarah M."),
        CleanupEvent::new("Druif beach", None).with_contributor("Sarah M."),
        CleanupEvent::new("klif", Some(day(2023, 8, 29))).with_rating(4),
        CleanupEvent::new("Nowhere", Some(day(2024, 3, 1))).with_contributor("Lisa K."),
    ])
}

#[tokio::test]
async fn priority_list_orders_by_urgency() {
    let ranked = seeded()
        .priority_list(&region(), now(), 10)
        .await
        .expect("ranking");

    let summary = ranked
        .iter()
        .map(|entry| {
            (
                entry.location.id.0.as_str(),
                entry.status.days_since_cleanup,
                entry.status.tier,
            )
        })
        .collect::<Vec<_>>();

    assert_eq!(
        summary,
        vec![
            ("Didi beach", DaysSince::Never, Tier::Urgent),
            ("klif", DaysSince::Days(200), Tier::Urgent),
            ("Druif beach", DaysSince::Days(6), Tier::Recent),
        ]
    );
}

#[tokio::test]
async fn priority_list_respects_limit() {
    let ranked = seeded()
        .priority_list(&region(), now(), 1)
        .await
        .expect("ranking");

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].location.id, LocationId::from("Didi beach"));
}

#[tokio::test]
async fn status_of_unknown_location_fails() {
    let err = seeded()
        .status_of(&region(), &LocationId::from("Eagle beach"), now())
        .await
        .unwrap_err();

    assert!(matches!(err, PortError::UnknownLocation(id) if id.0 == "Eagle beach"));
}

#[tokio::test]
async fn unknown_region_is_unsupported() {
    let err = seeded()
        .priority_list(&RegionId("bonaire".to_owned()), now(), 10)
        .await
        .unwrap_err();

    assert!(matches!(err, PortError::UnsupportedRegion));
}

#[tokio::test]
async fn history_is_newest_first_with_undated_last() {
    let history = seeded()
        .history(&region(), &LocationId::from("Druif beach"))
        .await
        .expect("history");

    let dates = history.iter().map(|event| event.date).collect::<Vec<_>>();
    assert_eq!(dates, vec![Some(day(2024, 3, 10)), Some(day(2024, 1, 1)), None]);
}

#[tokio::test]
async fn leaderboard_counts_whole_feed() {
    let board = seeded().leaderboard(&region(), 10).await.expect("leaderboard");

    let names = board
        .iter()
        .map(|entry| (entry.name.as_str(), entry.cleanup_count, entry.rank))
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![("Sarah M.", 2, 1), ("Mike R.", 1, 2), ("Lisa K.", 1, 3)]
    );
}

#[tokio::test]
async fn submitted_cleanup_changes_status() {
    let service = service(Vec::new());
    let didi = LocationId::from("Didi beach");

    let before = service
        .status_of(&region(), &didi, now())
        .await
        .expect("status");
    assert_eq!(before.status.tier, Tier::Urgent);

    let stored = service
        .submit_cleanup(
            &region(),
            CleanupSubmission::new("Didi beach", day(2024, 3, 16), 8),
            day(2024, 3, 16),
        )
        .await
        .expect("stored");
    assert_eq!(stored.rating, Some(8));

    let after = service
        .status_of(&region(), &didi, now())
        .await
        .expect("status");
    assert_eq!(after.status.days_since_cleanup, DaysSince::Days(0));
    assert_eq!(after.status.tier, Tier::Recent);
}

#[tokio::test]
async fn invalid_submission_is_not_stored() {
    let service = service(Vec::new());

    let err = service
        .submit_cleanup(
            &region(),
            CleanupSubmission::new("Didi beach", day(2024, 3, 17), 8),
            day(2024, 3, 16),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PortError::InvalidSubmission(SubmissionError::FutureDate { .. })
    ));
    let history = service
        .history(&region(), &LocationId::from("Didi beach"))
        .await
        .expect("history");
    assert!(history.is_empty());
}

#[test]
fn regions_are_listed() {
    assert_eq!(
        seeded().regions(),
        vec![(region(), "Test coast".to_owned())]
    );
}

#[tokio::test]
async fn upcoming_events_skip_past_ones() {
    let service = service_with_community(
        Vec::new(),
        vec![
            community_event("april", morning(4, 6)),
            community_event("february", morning(2, 3)),
            community_event("march", morning(3, 23)),
        ],
    );

    let upcoming = service
        .upcoming_events(&region(), now())
        .await
        .expect("events");

    let ids = upcoming
        .iter()
        .map(|event| event.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["march", "april"]);
}

#[test]
fn duplicate_regions_are_rejected() {
    let result = PluginRegistry::new(vec![
        plugin(Vec::new(), Vec::new()),
        plugin(Vec::new(), Vec::new()),
    ]);

    assert!(matches!(result, Err(RegistryError::DuplicateRegion(id)) if id == region()));
}
