use super::models::Team;

/// Goals credited to the winner of an ordinary match.
pub const WIN_SCORE: u32 = 1;
/// Goals credited to the winner of a shutout match.
pub const SHUTOUT_SCORE: u32 = 6;
/// Goals credited to the losing side.
pub const LOSS_SCORE: u32 = 0;

/// Derives the stored score pair `(score_a, score_b)` from a reported
/// outcome. Reports carry a winner flag, never raw goal counts.
pub fn resolve(winner: Team, shutout: bool) -> (u32, u32) {
    let winning_score = if shutout { SHUTOUT_SCORE } else { WIN_SCORE };
    match winner {
        Team::A => (winning_score, LOSS_SCORE),
        Team::B => (LOSS_SCORE, winning_score),
    }
}
