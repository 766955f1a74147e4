//! Command-line arguments and their environment-variable fallbacks.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use shoreline_core::{DEFAULT_LEADERBOARD_SIZE, parse_event_date};

/// Rank monitored beaches by how overdue they are for a cleanup.
#[derive(Debug, Parser)]
#[command(name = "shoreline", version)]
pub(crate) struct Cli {
    /// Region to query.
    #[arg(long, env = "SHORELINE_REGION", default_value = "aruba", global = true)]
    pub region: String,

    /// Base URL of a JSON cleanup feed. Without it the built-in seed reports are used.
    #[arg(long, env = "SHORELINE_FEED_URL", global = true)]
    pub feed_url: Option<String>,

    /// Log specification, e.g. `info` or `shoreline_core=debug`.
    #[arg(long, env = "SHORELINE_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Write rotating log files to this directory instead of stderr.
    #[arg(long, env = "SHORELINE_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Evaluate statuses at this instant (RFC 3339 or YYYY-MM-DD) instead of now.
    #[arg(long, value_parser = parse_instant, global = true)]
    pub now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List registered regions.
    Regions,
    /// Locations ordered most overdue first.
    Priority {
        /// How many locations to show.
        #[arg(long, env = "SHORELINE_TOP", default_value_t = 10)]
        top: usize,
    },
    /// Cleanup status of one location.
    Status {
        /// Location name as listed in the catalog.
        location: String,
    },
    /// Cleanup reports of one location, newest first.
    History {
        /// Location name as listed in the catalog.
        location: String,
    },
    /// Contributors ordered by number of reported cleanups.
    Leaderboard {
        /// How many contributors to show.
        #[arg(long, default_value_t = DEFAULT_LEADERBOARD_SIZE)]
        limit: usize,
    },
    /// Community cleanup events that have not started yet, soonest first.
    Events,
    /// Report a cleanup.
    Report {
        /// Location name as listed in the catalog.
        location: String,
        /// Day of the cleanup (defaults to today).
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,
        /// Cleanliness after the cleanup, 1 to 10.
        #[arg(long)]
        rating: i32,
        /// What was collected.
        #[arg(long)]
        description: Option<String>,
        /// Name to credit.
        #[arg(long)]
        contributor: Option<String>,
        /// Photo reference.
        #[arg(long)]
        photo_url: Option<String>,
    },
}

fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    parse_event_date(raw).ok_or_else(|| format!("`{raw}` is not a YYYY-MM-DD date"))
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .or_else(|_err| parse_day(raw).map(|day| day.and_time(NaiveTime::MIN).and_utc()))
        .map_err(|_err| format!("`{raw}` is neither an RFC 3339 timestamp nor a YYYY-MM-DD date"))
}
