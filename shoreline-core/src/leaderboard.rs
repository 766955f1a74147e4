//! Contributor leaderboard.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::CleanupEvent;

/// Number of contributors shown by default.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One contributor and how many cleanups they reported.
pub struct LeaderboardEntry {
    /// Contributor name as reported.
    pub name: String,
    /// Number of reports credited to the contributor.
    pub cleanup_count: usize,
    /// 1-based position.
    pub rank: usize,
}

/// Count reports per contributor, most active first.
///
/// Anonymous reports are skipped. Contributors with the same count keep the
/// order in which they first appear in `events`.
#[must_use]
pub fn leaderboard(events: &[CleanupEvent], limit: usize) -> Vec<LeaderboardEntry> {
    // name -> (first appearance, count)
    let mut tallies = HashMap::<&str, (usize, usize)>::new();

    for name in events
        .iter()
        .filter_map(|event| event.contributor_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
    {
        let first_seen = tallies.len();
        tallies.entry(name).or_insert((first_seen, 0)).1 += 1;
    }

    let mut ordered = tallies.into_iter().collect::<Vec<_>>();
    ordered.sort_by(|(_, (left_seen, left_count)), (_, (right_seen, right_count))| {
        right_count
            .cmp(left_count)
            .then_with(|| left_seen.cmp(right_seen))
    });

    ordered
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, (name, (_, cleanup_count)))| LeaderboardEntry {
            name: name.to_owned(),
            cleanup_count,
            rank: position + 1,
        })
        .collect()
}
