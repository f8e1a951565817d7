use serde::Serialize;

use crate::player::Player;

/// Accumulated standing of one player over a set of matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player: Player,
    pub points: i32,
    pub wins: u32,
    pub losses: u32,
    pub matches_played: u32,
}

impl PlayerStats {
    /// Zeroed entry. Also the final standing of a player with no matches.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            points: 0,
            wins: 0,
            losses: 0,
            matches_played: 0,
        }
    }

    /// Fraction of played matches that were won, rounded to two decimals.
    /// Zero for players with no matches rather than a division by zero.
    pub fn win_rate(&self) -> f64 {
        if self.matches_played == 0 {
            return 0.0;
        }
        let rate = f64::from(self.wins) / f64::from(self.matches_played);
        (rate * 100.0).round() / 100.0
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based rank, consecutive even when standings tie.
    pub position: u32,
    #[serde(flatten)]
    pub stats: PlayerStats,
    pub win_rate: f64,
}
