use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

use super::models::{MatchId, Team};

/// Match report as it arrives from a client form. Every position starts
/// unassigned, which is why the fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchCandidate {
    pub team_a_attacker: Option<PlayerId>,
    pub team_a_goalkeeper: Option<PlayerId>,
    pub team_b_attacker: Option<PlayerId>,
    pub team_b_goalkeeper: Option<PlayerId>,
    pub winner: Option<Team>,
    #[serde(default)]
    pub shutout: bool,
}

/// Lineup of one side with display names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamNames {
    pub attacker: String,
    pub goalkeeper: String,
}

/// One row of the match history view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub team_a: TeamNames,
    pub team_b: TeamNames,
    pub score_a: u32,
    pub score_b: u32,
    pub created_at: DateTime<Utc>,
}
