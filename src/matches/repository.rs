use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use super::models::{Match, MatchId};

/// Errors surfaced by match history storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("History storage failed: {0}")]
    Storage(String),
}

/// Storage seam for the match history. Recorded matches are immutable;
/// the only mutations are append and remove.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn append_match(&self, recorded: Match) -> Result<(), HistoryError>;

    /// Full history in insertion order.
    async fn list_matches(&self) -> Result<Vec<Match>, HistoryError>;

    /// Deletes one recorded match. Returns false when no such match exists.
    async fn remove_match(&self, match_id: MatchId) -> Result<bool, HistoryError>;
}

#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    matches: Arc<RwLock<Vec<Match>>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self {
            matches: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn append_match(&self, recorded: Match) -> Result<(), HistoryError> {
        let mut matches = self.matches.write().await;
        matches.push(recorded);
        Ok(())
    }

    async fn list_matches(&self) -> Result<Vec<Match>, HistoryError> {
        let matches = self.matches.read().await;
        Ok(matches.clone())
    }

    async fn remove_match(&self, match_id: MatchId) -> Result<bool, HistoryError> {
        let mut matches = self.matches.write().await;
        let before = matches.len();
        matches.retain(|recorded| recorded.id != match_id);
        Ok(matches.len() < before)
    }
}
