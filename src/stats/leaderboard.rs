use std::collections::HashMap;

use crate::player::PlayerId;

use super::models::{LeaderboardEntry, PlayerStats};

/// Orders a standings table into ranked rows. Points decide; ties fall back
/// to name, then id, so equal standings always list in the same order.
pub fn rank(table: HashMap<PlayerId, PlayerStats>) -> Vec<LeaderboardEntry> {
    let mut standings: Vec<PlayerStats> = table.into_values().collect();
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.player.name.cmp(&b.player.name))
            .then_with(|| a.player.id.cmp(&b.player.id))
    });

    standings
        .into_iter()
        .enumerate()
        .map(|(index, stats)| LeaderboardEntry {
            position: index as u32 + 1,
            win_rate: stats.win_rate(),
            stats,
        })
        .collect()
}

/// The same standings ordered for the roster page: by name instead of rank.
pub fn roster_overview(table: HashMap<PlayerId, PlayerStats>) -> Vec<PlayerStats> {
    let mut standings: Vec<PlayerStats> = table.into_values().collect();
    standings.sort_by(|a, b| {
        a.player
            .name
            .cmp(&b.player.name)
            .then_with(|| a.player.id.cmp(&b.player.id))
    });
    standings
}
