use thiserror::Error;

use crate::matches::HistoryError;
use crate::player::RegistryError;

/// Errors surfaced by standings queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("Roster lookup failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("History access failed: {0}")]
    History(#[from] HistoryError),

    #[error("Month must be between 1 and 12, got {month}")]
    InvalidMonth { month: u32 },
}
