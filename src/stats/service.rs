use std::sync::Arc;

use chrono::Datelike;
use tracing::instrument;

use crate::matches::{Match, MatchRepository};
use crate::player::{Player, RosterRepository};

use super::aggregator;
use super::errors::StatsError;
use super::leaderboard;
use super::models::{LeaderboardEntry, PlayerStats};

/// Read side of the league. Standings are derived on demand from the roster
/// and the match history; nothing is cached or stored, so deleting a match
/// is automatically reflected in the next query.
pub struct StatsService {
    roster_repository: Arc<dyn RosterRepository>,
    match_repository: Arc<dyn MatchRepository>,
}

impl StatsService {
    pub fn new(
        roster_repository: Arc<dyn RosterRepository>,
        match_repository: Arc<dyn MatchRepository>,
    ) -> Self {
        Self {
            roster_repository,
            match_repository,
        }
    }

    /// Ranked standings over the entire match history.
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StatsError> {
        let (roster, history) = self.snapshot().await?;
        Ok(leaderboard::rank(aggregator::aggregate(&roster, &history)))
    }

    /// Ranked standings over the matches recorded in one calendar month,
    /// by their UTC timestamps.
    #[instrument(skip(self))]
    pub async fn monthly_leaderboard(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<LeaderboardEntry>, StatsError> {
        if !(1..=12).contains(&month) {
            return Err(StatsError::InvalidMonth { month });
        }

        let (roster, history) = self.snapshot().await?;
        let monthly: Vec<&Match> = history
            .iter()
            .filter(|recorded| {
                recorded.created_at.year() == year && recorded.created_at.month() == month
            })
            .collect();
        Ok(leaderboard::rank(aggregator::aggregate(&roster, monthly)))
    }

    /// Per-player standings ordered by name, for the roster page.
    #[instrument(skip(self))]
    pub async fn roster_overview(&self) -> Result<Vec<PlayerStats>, StatsError> {
        let (roster, history) = self.snapshot().await?;
        Ok(leaderboard::roster_overview(aggregator::aggregate(
            &roster, &history,
        )))
    }

    async fn snapshot(&self) -> Result<(Vec<Player>, Vec<Match>), StatsError> {
        let roster = self.roster_repository.list().await?;
        let history = self.match_repository.list_matches().await?;
        Ok((roster, history))
    }
}
