//! Plain-text rendering of service results.

use std::io::{self, Write};

use shoreline_core::{CleanupEvent, CommunityEvent, LeaderboardEntry, PriorityEntry, RegionId, Tier};

const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d";
const EVENT_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

pub(crate) fn write_regions<W: Write>(out: &mut W, regions: &[(RegionId, String)]) -> io::Result<()> {
    for (id, name) in regions {
        writeln!(out, "{id:<12} {name}")?;
    }
    Ok(())
}

pub(crate) fn write_priority<W: Write>(out: &mut W, entries: &[PriorityEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No monitored locations.");
    }

    writeln!(out, "{:>3}  {:<45} {:<16} {:>5}  Tier", "#", "Location", "Last cleanup", "Score")?;
    for (position, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:<45} {:<16} {:>5}  {}",
            position + 1,
            entry.location.id,
            entry.status.days_since_cleanup.to_string(),
            entry.status.priority_score,
            tier_label(entry.status.tier),
        )?;
    }
    Ok(())
}

pub(crate) fn write_status<W: Write>(out: &mut W, entry: &PriorityEntry) -> io::Result<()> {
    let location = &entry.location;
    writeln!(out, "{}", location.id)?;
    writeln!(
        out,
        "  at {:.6}, {:.6}",
        location.coordinates.lat, location.coordinates.lng
    )?;
    if !location.description.is_empty() {
        writeln!(out, "  {}", location.description)?;
    }
    writeln!(out, "  last cleanup: {}", entry.status.days_since_cleanup)?;
    writeln!(out, "  status:       {}", tier_label(entry.status.tier))
}

pub(crate) fn write_history<W: Write>(out: &mut W, events: &[CleanupEvent]) -> io::Result<()> {
    if events.is_empty() {
        return writeln!(out, "No cleanups reported yet.");
    }

    for event in events {
        let date = event.date.map_or_else(
            || "unknown date".to_owned(),
            |date| date.format(DATE_DISPLAY_FORMAT).to_string(),
        );
        let rating = event
            .rating
            .map_or_else(|| "-".to_owned(), |rating| format!("{rating}/10"));
        let contributor = event.contributor_name.as_deref().unwrap_or("anonymous");

        writeln!(out, "{date:<12} {rating:>5}  {contributor}")?;
        if let Some(description) = event.description.as_deref() {
            writeln!(out, "{:<19}{description}", "")?;
        }
    }
    Ok(())
}

pub(crate) fn write_leaderboard<W: Write>(
    out: &mut W,
    entries: &[LeaderboardEntry],
) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No credited cleanups yet.");
    }

    for entry in entries {
        let noun = if entry.cleanup_count == 1 {
            "cleanup"
        } else {
            "cleanups"
        };
        writeln!(
            out,
            "{:>3}. {:<30} {} {noun}",
            entry.rank, entry.name, entry.cleanup_count
        )?;
    }
    Ok(())
}

pub(crate) fn write_events<W: Write>(out: &mut W, events: &[CommunityEvent]) -> io::Result<()> {
    if events.is_empty() {
        return writeln!(out, "No upcoming community events.");
    }

    for event in events {
        writeln!(
            out,
            "{}  {}",
            event.date.format(EVENT_DISPLAY_FORMAT),
            event.title
        )?;
        if !event.location.is_empty() {
            writeln!(out, "{:<19}at {}", "", event.location)?;
        }
        if !event.organizer.is_empty() {
            writeln!(out, "{:<19}by {} <{}>", "", event.organizer, event.contact_email)?;
        }
        if !event.description.is_empty() {
            writeln!(out, "{:<19}{}", "", event.description)?;
        }
    }
    Ok(())
}

fn tier_label(tier: Tier) -> String {
    format!("{tier} ({})", tier.color_name())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use shoreline_core::{
        Coordinates, DaysSince, DerivedStatus, Location, LocationId, NEVER_CLEANED_SCORE,
    };

    use super::*;

    fn entry(name: &str, days_since_cleanup: DaysSince, tier: Tier) -> PriorityEntry {
        PriorityEntry {
            location: Location {
                id: LocationId::from(name),
                coordinates: Coordinates {
                    lat: 12.5,
                    lng: -70.0,
                },
                description: String::new(),
                image: String::new(),
            },
            status: DerivedStatus {
                days_since_cleanup,
                priority_score: days_since_cleanup.priority_score(),
                tier,
            },
        }
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(write: F) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).expect("write to buffer");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn priority_rows_show_days_and_tier() {
        let text = render(|out| {
            write_priority(
                out,
                &[
                    entry("Didi beach", DaysSince::Never, Tier::Urgent),
                    entry("klif", DaysSince::Days(50), Tier::Moderate),
                ],
            )
        });

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Didi beach"));
        assert!(lines[1].contains("never cleaned"));
        assert!(lines[1].contains(&NEVER_CLEANED_SCORE.to_string()));
        assert!(lines[1].ends_with("urgent (red)"));
        assert!(lines[2].contains("50 days ago"));
        assert!(lines[2].ends_with("moderate (orange)"));
    }

    #[test]
    fn history_marks_anonymous_and_undated_reports() {
        let events = [
            CleanupEvent::new("klif", NaiveDate::from_ymd_opt(2024, 3, 1))
                .with_rating(6)
                .with_contributor("Mike R."),
            CleanupEvent::new("klif", None),
        ];

        let text = render(|out| write_history(out, &events));

        assert!(text.contains("2024-03-01"));
        assert!(text.contains("6/10"));
        assert!(text.contains("Mike R."));
        assert!(text.contains("unknown date"));
        assert!(text.contains("anonymous"));
    }

    #[test]
    fn events_show_start_and_organizer() {
        let events = [CommunityEvent {
            id: "evt-1".to_owned(),
            title: "Sunrise sweep".to_owned(),
            date: Utc
                .with_ymd_and_hms(2025, 2, 1, 7, 30, 0)
                .single()
                .expect("valid instant"),
            location: "Druif beach".to_owned(),
            description: String::new(),
            organizer: "Sarah M.".to_owned(),
            contact_email: "sarah@example.org".to_owned(),
        }];

        let text = render(|out| write_events(out, &events));

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "2025-02-01 07:30  Sunrise sweep");
        assert!(lines[1].ends_with("at Druif beach"));
        assert!(lines[2].ends_with("by Sarah M. <sarah@example.org>"));
    }

    #[test]
    fn empty_lists_say_so() {
        assert_eq!(render(|out| write_priority(out, &[])), "No monitored locations.\n");
        assert_eq!(
            render(|out| write_leaderboard(out, &[])),
            "No credited cleanups yet.\n"
        );
        assert_eq!(
            render(|out| write_events(out, &[])),
            "No upcoming community events.\n"
        );
    }
}
