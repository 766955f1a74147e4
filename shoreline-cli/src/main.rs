//! Command-line front end for shoreline that ranks beaches by cleanup urgency.

mod cli;
mod logging;
mod output;

use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::debug;
use reqwest::Client;
use shoreline_core::{
    CleanupSubmission, LocationId, RegionId, plugin::PluginRegistry, service::ShorelineService,
};
use shoreline_provider_aruba as aruba;
use shoreline_provider_http::HttpCleanupFeed;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init_logging(&cli.log_level, cli.log_dir.as_deref())?;

    // Providers + service setup
    let aruba_plugin = match cli.feed_url.as_deref() {
        Some(feed_url) => {
            debug!("reading cleanup reports from {feed_url}");
            let client = Client::builder().user_agent("shoreline/0.1").build()?;
            let feed = HttpCleanupFeed::new(client, feed_url, aruba::region_meta());
            aruba::plugin_with_feed(Arc::new(feed))
        }
        None => aruba::plugin(),
    };
    let registry = Arc::new(PluginRegistry::new(vec![aruba_plugin])?);
    let service = ShorelineService::new(registry);

    let now = cli.now.unwrap_or_else(Utc::now);
    let region = RegionId(cli.region);

    let mut stdout = io::stdout().lock();
    run(&service, cli.command, &region, now, &mut stdout).await
}

async fn run<W: Write>(
    service: &ShorelineService,
    command: Command,
    region: &RegionId,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Regions => {
            output::write_regions(out, &service.regions())?;
        }
        Command::Priority { top } => {
            let entries = service
                .priority_list(region, now, top)
                .await
                .with_context(|| format!("failed to rank locations in {region}"))?;
            output::write_priority(out, &entries)?;
        }
        Command::Status { location } => {
            let entry = service
                .status_of(region, &LocationId::from(location), now)
                .await?;
            output::write_status(out, &entry)?;
        }
        Command::History { location } => {
            let events = service
                .history(region, &LocationId::from(location))
                .await?;
            output::write_history(out, &events)?;
        }
        Command::Leaderboard { limit } => {
            let entries = service
                .leaderboard(region, limit)
                .await
                .with_context(|| format!("failed to load contributors in {region}"))?;
            output::write_leaderboard(out, &entries)?;
        }
        Command::Events => {
            let events = service
                .upcoming_events(region, now)
                .await
                .with_context(|| format!("failed to load community events in {region}"))?;
            output::write_events(out, &events)?;
        }
        Command::Report {
            location,
            date,
            rating,
            description,
            contributor,
            photo_url,
        } => {
            let today = now.date_naive();
            let mut submission =
                CleanupSubmission::new(location, date.unwrap_or(today), rating);
            submission.description = description;
            submission.contributor_name = contributor;
            submission.photo_url = photo_url;

            let stored = service
                .submit_cleanup(region, submission, today)
                .await
                .context("cleanup report was not stored")?;
            writeln!(out, "Recorded cleanup at {}.", stored.location)?;

            let entry = service.status_of(region, &stored.location, now).await?;
            output::write_status(out, &entry)?;
        }
    }
    Ok(())
}
