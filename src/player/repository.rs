use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use super::models::{Player, PlayerId};
use super::types::NewPlayer;

/// Errors surfaced by roster storage and the player service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Player not found: {player_id}")]
    NotFound { player_id: PlayerId },

    #[error("Roster storage failed: {0}")]
    Storage(String),
}

/// Storage seam for the player roster.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Stores a new player under the next free id.
    async fn insert(&self, new_player: NewPlayer) -> Result<Player, RegistryError>;

    async fn get(&self, player_id: PlayerId) -> Result<Option<Player>, RegistryError>;

    /// Replaces the stored record for `player.id`. Returns false when no
    /// such player exists.
    async fn update(&self, player: Player) -> Result<bool, RegistryError>;

    /// Drops a player from the roster. Returns false when no such player
    /// exists. Recorded matches are untouched.
    async fn remove(&self, player_id: PlayerId) -> Result<bool, RegistryError>;

    async fn list(&self) -> Result<Vec<Player>, RegistryError>;
}

#[derive(Debug)]
pub struct InMemoryRosterRepository {
    players: Arc<RwLock<HashMap<PlayerId, Player>>>,
    next_id: AtomicI64,
}

impl InMemoryRosterRepository {
    pub fn new() -> Self {
        Self {
            players: Arc::new(RwLock::new(HashMap::new())),
            // Ids start at 1; 0 stays free as an obvious "never issued" value
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryRosterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    async fn insert(&self, new_player: NewPlayer) -> Result<Player, RegistryError> {
        let player = Player {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_player.name,
            preferred_role: new_player.preferred_role,
            photo: new_player.photo,
        };
        let mut players = self.players.write().await;
        players.insert(player.id, player.clone());
        Ok(player)
    }

    async fn get(&self, player_id: PlayerId) -> Result<Option<Player>, RegistryError> {
        let players = self.players.read().await;
        Ok(players.get(&player_id).cloned())
    }

    async fn update(&self, player: Player) -> Result<bool, RegistryError> {
        let mut players = self.players.write().await;
        match players.get_mut(&player.id) {
            Some(stored) => {
                *stored = player;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, player_id: PlayerId) -> Result<bool, RegistryError> {
        let mut players = self.players.write().await;
        Ok(players.remove(&player_id).is_some())
    }

    async fn list(&self) -> Result<Vec<Player>, RegistryError> {
        let players = self.players.read().await;
        Ok(players.values().cloned().collect())
    }
}
