// Public API - what other modules can use
pub use models::{Player, PlayerId, Role};
pub use repository::{InMemoryRosterRepository, RegistryError, RosterRepository};
pub use service::PlayerService;
pub use types::NewPlayer;

// Internal modules
pub mod models;
pub mod repository;
mod service;
mod types;
