use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use uuid::Uuid;

use crate::player::PlayerId;

use super::scoring;

/// Identifier stamped on a match when its report is accepted.
pub type MatchId = Uuid;

/// Side of the table a pair plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn opponent(&self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

/// A pair of players covering one side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub attacker: PlayerId,
    pub goalkeeper: PlayerId,
}

impl Lineup {
    pub fn player_ids(&self) -> [PlayerId; 2] {
        [self.attacker, self.goalkeeper]
    }
}

/// A recorded match. Scores are derived from the reported outcome when the
/// report is accepted and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub team_a: Lineup,
    pub team_b: Lineup,
    pub score_a: u32,
    pub score_b: u32,
    pub created_at: DateTime<Utc>,
}

/// What the stored scores say about who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won { winner: Team, shutout: bool },
    Draw,
}

impl Match {
    /// All four player ids in lineup order, team A first.
    pub fn participants(&self) -> [PlayerId; 4] {
        [
            self.team_a.attacker,
            self.team_a.goalkeeper,
            self.team_b.attacker,
            self.team_b.goalkeeper,
        ]
    }

    pub fn lineup(&self, team: Team) -> Lineup {
        match team {
            Team::A => self.team_a,
            Team::B => self.team_b,
        }
    }

    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::A => self.score_a,
            Team::B => self.score_b,
        }
    }

    /// Decides the outcome by strict score comparison. A win counts as a
    /// shutout only when the winning score equals the shutout score.
    pub fn outcome(&self) -> MatchOutcome {
        let (winner, winning_score) = match self.score_a.cmp(&self.score_b) {
            Ordering::Greater => (Team::A, self.score_a),
            Ordering::Less => (Team::B, self.score_b),
            Ordering::Equal => return MatchOutcome::Draw,
        };
        MatchOutcome::Won {
            winner,
            shutout: winning_score == scoring::SHUTOUT_SCORE,
        }
    }
}
