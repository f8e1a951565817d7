use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Stable numeric identifier issued by the roster at registration time.
/// Match records keep referencing it even after the player is removed.
pub type PlayerId = i64;

/// Table position a player prefers to cover. Informational only: lineups
/// are free to put anyone anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Attacker,
    Goalkeeper,
}

/// A registered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub preferred_role: Option<Role>,
    /// Opaque reference to an externally stored photo (URL or storage key);
    /// the engine never touches image bytes.
    pub photo: Option<String>,
}
