use serde::Deserialize;

use super::models::Role;

/// Registration payload for a new player. The roster assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub preferred_role: Option<Role>,
    pub photo: Option<String>,
}

impl NewPlayer {
    /// Name-only registration, the common case.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            preferred_role: None,
            photo: None,
        }
    }
}
