use std::collections::HashMap;

use crate::matches::{Match, MatchOutcome};
use crate::player::{Player, PlayerId};

use super::models::PlayerStats;

/// League points for winning an ordinary match.
pub const WIN_POINTS: i32 = 3;
/// League points for winning a shutout match.
pub const SHUTOUT_WIN_POINTS: i32 = 4;
/// League points for losing an ordinary match. Showing up still pays.
pub const LOSS_POINTS: i32 = 1;
/// League points for losing a shutout match.
pub const SHUTOUT_LOSS_POINTS: i32 = -1;

/// Folds a match history into a standings table for the given roster.
///
/// The table starts with a zeroed entry per roster player and every match
/// adjusts the entries of its participants. Ids with no roster entry are
/// skipped without error, so matches survive their players being removed.
/// Pure over its inputs: the same roster and matches produce the same table
/// no matter the order the matches arrive in.
pub fn aggregate<'a, I>(roster: &[Player], history: I) -> HashMap<PlayerId, PlayerStats>
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut table: HashMap<PlayerId, PlayerStats> = roster
        .iter()
        .map(|player| (player.id, PlayerStats::new(player.clone())))
        .collect();

    for recorded in history {
        for player_id in recorded.participants() {
            if let Some(stats) = table.get_mut(&player_id) {
                stats.matches_played += 1;
            }
        }

        // Tied scores cannot come out of the resolver, but imported or
        // hand-edited records may carry them. They count as played only.
        let (winner, shutout) = match recorded.outcome() {
            MatchOutcome::Won { winner, shutout } => (winner, shutout),
            MatchOutcome::Draw => continue,
        };

        let (winner_points, loser_points) = if shutout {
            (SHUTOUT_WIN_POINTS, SHUTOUT_LOSS_POINTS)
        } else {
            (WIN_POINTS, LOSS_POINTS)
        };

        for player_id in recorded.lineup(winner).player_ids() {
            if let Some(stats) = table.get_mut(&player_id) {
                stats.wins += 1;
                stats.points += winner_points;
            }
        }
        for player_id in recorded.lineup(winner.opponent()).player_ids() {
            if let Some(stats) = table.get_mut(&player_id) {
                stats.losses += 1;
                stats.points += loser_points;
            }
        }
    }

    table
}
