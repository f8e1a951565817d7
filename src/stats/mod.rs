pub mod aggregator;
pub mod leaderboard;
pub mod service;

mod errors;
pub mod models;

pub use aggregator::aggregate;
pub use errors::StatsError;
pub use leaderboard::{rank, roster_overview};
pub use models::{LeaderboardEntry, PlayerStats};
pub use service::StatsService;
