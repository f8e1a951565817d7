use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::player::{PlayerId, RegistryError, RosterRepository};

use super::models::{Match, MatchId};
use super::repository::{HistoryError, MatchRepository};
use super::scoring;
use super::types::{MatchCandidate, MatchSummary, TeamNames};
use super::validation::{self, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Match report rejected: {0}")]
    Rejected(#[from] ValidationError),

    #[error("Match not found: {match_id}")]
    NotFound { match_id: MatchId },

    #[error("Roster lookup failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("History access failed: {0}")]
    History(#[from] HistoryError),
}

/// Accepts match reports into the history and serves it back for display.
pub struct MatchService {
    match_repository: Arc<dyn MatchRepository>,
    roster_repository: Arc<dyn RosterRepository>,
}

impl MatchService {
    pub fn new(
        match_repository: Arc<dyn MatchRepository>,
        roster_repository: Arc<dyn RosterRepository>,
    ) -> Self {
        Self {
            match_repository,
            roster_repository,
        }
    }

    /// Validates a report and, when it is accepted, derives the stored
    /// scores, stamps id and timestamp and appends it to the history.
    /// A rejected report leaves the history untouched.
    #[instrument(skip(self, candidate))]
    pub async fn record_match(&self, candidate: MatchCandidate) -> Result<Match, MatchError> {
        let valid = validation::validate(&candidate)?;
        let (score_a, score_b) = scoring::resolve(valid.winner, valid.shutout);

        let recorded = Match {
            id: Uuid::new_v4(),
            team_a: valid.team_a,
            team_b: valid.team_b,
            score_a,
            score_b,
            created_at: Utc::now(),
        };
        self.match_repository.append_match(recorded.clone()).await?;

        info!(
            match_id = %recorded.id,
            winner = %valid.winner,
            shutout = valid.shutout,
            "Recorded match"
        );
        Ok(recorded)
    }

    /// Deletes a recorded match. Standings are recomputed from the remaining
    /// history the next time they are read, so no stats cleanup is needed.
    #[instrument(skip(self))]
    pub async fn delete_match(&self, match_id: MatchId) -> Result<(), MatchError> {
        if !self.match_repository.remove_match(match_id).await? {
            warn!(match_id = %match_id, "Attempted to delete unknown match");
            return Err(MatchError::NotFound { match_id });
        }
        info!(match_id = %match_id, "Deleted match");
        Ok(())
    }

    /// Recorded matches newest first, lineups resolved to display names
    /// against the current roster. Players removed since the match keep
    /// their slot under an id placeholder.
    pub async fn history(&self) -> Result<Vec<MatchSummary>, MatchError> {
        let names: HashMap<PlayerId, String> = self
            .roster_repository
            .list()
            .await?
            .into_iter()
            .map(|player| (player.id, player.name))
            .collect();

        let mut matches = self.match_repository.list_matches().await?;
        // Stable sort keeps insertion order between matches recorded at the
        // same instant.
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matches
            .into_iter()
            .map(|recorded| summarize(recorded, &names))
            .collect())
    }
}

fn summarize(recorded: Match, names: &HashMap<PlayerId, String>) -> MatchSummary {
    MatchSummary {
        match_id: recorded.id,
        team_a: TeamNames {
            attacker: display_name(names, recorded.team_a.attacker),
            goalkeeper: display_name(names, recorded.team_a.goalkeeper),
        },
        team_b: TeamNames {
            attacker: display_name(names, recorded.team_b.attacker),
            goalkeeper: display_name(names, recorded.team_b.goalkeeper),
        },
        score_a: recorded.score_a,
        score_b: recorded.score_b,
        created_at: recorded.created_at,
    }
}

fn display_name(names: &HashMap<PlayerId, String>, player_id: PlayerId) -> String {
    names
        .get(&player_id)
        .cloned()
        .unwrap_or_else(|| format!("ID: {}", player_id))
}
