use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::models::{Player, PlayerId};
use super::repository::{RegistryError, RosterRepository};
use super::types::NewPlayer;

/// Roster management: registration, profile updates and removal.
pub struct PlayerService {
    roster: Arc<dyn RosterRepository>,
}

impl PlayerService {
    pub fn new(roster: Arc<dyn RosterRepository>) -> Self {
        Self { roster }
    }

    /// Registers a new player. Names are trimmed before storage and must
    /// not end up empty.
    #[instrument(skip(self, new_player))]
    pub async fn register_player(&self, new_player: NewPlayer) -> Result<Player, RegistryError> {
        let name = new_player.name.trim().to_string();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let player = self.roster.insert(NewPlayer { name, ..new_player }).await?;
        info!(player_id = player.id, name = %player.name, "Registered player");
        Ok(player)
    }

    /// Replaces the profile stored under `player.id`. The same name rules
    /// as registration apply.
    #[instrument(skip(self, player))]
    pub async fn update_player(&self, player: Player) -> Result<Player, RegistryError> {
        let name = player.name.trim().to_string();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let player = Player { name, ..player };
        if !self.roster.update(player.clone()).await? {
            return Err(RegistryError::NotFound {
                player_id: player.id,
            });
        }
        info!(player_id = player.id, "Updated player profile");
        Ok(player)
    }

    /// Removes a player from the roster. Their recorded matches stay in the
    /// history untouched.
    #[instrument(skip(self))]
    pub async fn remove_player(&self, player_id: PlayerId) -> Result<(), RegistryError> {
        if !self.roster.remove(player_id).await? {
            warn!(player_id, "Attempted to remove unknown player");
            return Err(RegistryError::NotFound { player_id });
        }
        info!(player_id, "Removed player from roster");
        Ok(())
    }

    pub async fn get_player(&self, player_id: PlayerId) -> Result<Player, RegistryError> {
        self.roster
            .get(player_id)
            .await?
            .ok_or(RegistryError::NotFound { player_id })
    }

    /// Current roster sorted by name, then id for identical names.
    pub async fn list_players(&self) -> Result<Vec<Player>, RegistryError> {
        let mut players = self.roster.list().await?;
        players.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(players)
    }
}
