use std::sync::Arc;

use calcetto::{
    InMemoryMatchRepository, InMemoryRosterRepository, MatchService, NewPlayer, Player,
    PlayerService, StatsService,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// All three services wired over shared in-memory storage, plus the raw
/// repositories for tests that need to stage records directly.
pub struct TestSetup {
    pub player_service: PlayerService,
    pub match_service: MatchService,
    pub stats_service: StatsService,
    pub roster_repository: Arc<InMemoryRosterRepository>,
    pub match_repository: Arc<InMemoryMatchRepository>,
    /// Players registered by the builder, in registration order.
    pub players: Vec<Player>,
}

#[derive(Default)]
pub struct TestSetupBuilder {
    player_names: Vec<String>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(mut self, names: Vec<&str>) -> Self {
        self.player_names = names.into_iter().map(|name| name.to_string()).collect();
        self
    }

    /// The usual Tuesday evening crowd.
    pub fn with_four_players(self) -> Self {
        self.with_players(vec!["Anna", "Bruno", "Carla", "Dario"])
    }

    pub async fn build(self) -> TestSetup {
        let roster_repository = Arc::new(InMemoryRosterRepository::new());
        let match_repository = Arc::new(InMemoryMatchRepository::new());

        let player_service = PlayerService::new(roster_repository.clone());
        let match_service = MatchService::new(match_repository.clone(), roster_repository.clone());
        let stats_service = StatsService::new(roster_repository.clone(), match_repository.clone());

        let mut players = Vec::new();
        for name in &self.player_names {
            let player = player_service
                .register_player(NewPlayer::named(name))
                .await
                .expect("test player registration failed");
            players.push(player);
        }

        TestSetup {
            player_service,
            match_service,
            stats_service,
            roster_repository,
            match_repository,
            players,
        }
    }
}
