// Library crate for the calcetto league engine
// This file exposes the public API for integration tests and embedding apps

pub mod matches;
pub mod player;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use matches::{
    HistoryError, InMemoryMatchRepository, Lineup, Match, MatchCandidate, MatchError, MatchId,
    MatchOutcome, MatchRepository, MatchService, MatchSummary, Team, TeamNames, ValidationError,
};
pub use player::{
    InMemoryRosterRepository, NewPlayer, Player, PlayerId, PlayerService, RegistryError, Role,
    RosterRepository,
};
pub use stats::{LeaderboardEntry, PlayerStats, StatsError, StatsService};
