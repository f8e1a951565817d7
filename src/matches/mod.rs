// Public API - what other modules can use
pub use models::{Lineup, Match, MatchId, MatchOutcome, Team};
pub use repository::{HistoryError, InMemoryMatchRepository, MatchRepository};
pub use service::{MatchError, MatchService};
pub use types::{MatchCandidate, MatchSummary, TeamNames};
pub use validation::ValidationError;

// Internal modules
pub mod models;
mod repository;
pub mod scoring;
mod service;
mod types;
pub mod validation;
