use thiserror::Error;

use crate::player::{PlayerId, Role};

use super::models::{Lineup, Team};
use super::types::MatchCandidate;

/// Why a match report was rejected. Checks run in declaration order and
/// stop at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Team {team} has no {position} assigned")]
    MissingAssignment { team: Team, position: Role },

    #[error("Player {player_id} is assigned to more than one position")]
    DuplicatePlayer { player_id: PlayerId },

    #[error("No winning team selected")]
    NoWinnerSelected,
}

/// A report that passed validation, with every field settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidCandidate {
    pub team_a: Lineup,
    pub team_b: Lineup,
    pub winner: Team,
    pub shutout: bool,
}

/// Checks a raw report: all positions assigned, four distinct players, a
/// winner selected. Roster membership is deliberately not checked here.
pub fn validate(candidate: &MatchCandidate) -> Result<ValidCandidate, ValidationError> {
    let positions = [
        (Team::A, Role::Attacker, candidate.team_a_attacker),
        (Team::A, Role::Goalkeeper, candidate.team_a_goalkeeper),
        (Team::B, Role::Attacker, candidate.team_b_attacker),
        (Team::B, Role::Goalkeeper, candidate.team_b_goalkeeper),
    ];

    let mut ids: [PlayerId; 4] = [0; 4];
    for (slot, (team, position, assigned)) in ids.iter_mut().zip(positions) {
        *slot = assigned.ok_or(ValidationError::MissingAssignment { team, position })?;
    }

    for (index, id) in ids.iter().enumerate() {
        if ids[..index].contains(id) {
            return Err(ValidationError::DuplicatePlayer { player_id: *id });
        }
    }

    let winner = candidate.winner.ok_or(ValidationError::NoWinnerSelected)?;

    Ok(ValidCandidate {
        team_a: Lineup {
            attacker: ids[0],
            goalkeeper: ids[1],
        },
        team_b: Lineup {
            attacker: ids[2],
            goalkeeper: ids[3],
        },
        winner,
        shutout: candidate.shutout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete() -> MatchCandidate {
        MatchCandidate {
            team_a_attacker: Some(1),
            team_a_goalkeeper: Some(2),
            team_b_attacker: Some(3),
            team_b_goalkeeper: Some(4),
            winner: Some(Team::A),
            shutout: false,
        }
    }

    #[test]
    fn complete_report_passes() {
        let valid = validate(&complete()).unwrap();

        assert_eq!(
            valid,
            ValidCandidate {
                team_a: Lineup {
                    attacker: 1,
                    goalkeeper: 2
                },
                team_b: Lineup {
                    attacker: 3,
                    goalkeeper: 4
                },
                winner: Team::A,
                shutout: false,
            }
        );
    }

    #[rstest]
    #[case::team_a_attacker(
        MatchCandidate { team_a_attacker: None, ..complete() },
        Team::A,
        Role::Attacker
    )]
    #[case::team_a_goalkeeper(
        MatchCandidate { team_a_goalkeeper: None, ..complete() },
        Team::A,
        Role::Goalkeeper
    )]
    #[case::team_b_attacker(
        MatchCandidate { team_b_attacker: None, ..complete() },
        Team::B,
        Role::Attacker
    )]
    #[case::team_b_goalkeeper(
        MatchCandidate { team_b_goalkeeper: None, ..complete() },
        Team::B,
        Role::Goalkeeper
    )]
    fn any_unassigned_position_is_rejected(
        #[case] candidate: MatchCandidate,
        #[case] team: Team,
        #[case] position: Role,
    ) {
        assert_eq!(
            validate(&candidate),
            Err(ValidationError::MissingAssignment { team, position })
        );
    }

    #[rstest]
    #[case::within_team(MatchCandidate { team_a_goalkeeper: Some(1), ..complete() }, 1)]
    #[case::across_teams(MatchCandidate { team_b_attacker: Some(2), ..complete() }, 2)]
    fn repeated_player_is_rejected(#[case] candidate: MatchCandidate, #[case] repeated: PlayerId) {
        assert_eq!(
            validate(&candidate),
            Err(ValidationError::DuplicatePlayer {
                player_id: repeated
            })
        );
    }

    #[test]
    fn missing_winner_is_rejected() {
        let candidate = MatchCandidate {
            winner: None,
            ..complete()
        };

        assert_eq!(validate(&candidate), Err(ValidationError::NoWinnerSelected));
    }

    #[test]
    fn empty_report_fails_on_the_first_position() {
        assert_eq!(
            validate(&MatchCandidate::default()),
            Err(ValidationError::MissingAssignment {
                team: Team::A,
                position: Role::Attacker
            })
        );
    }

    #[test]
    fn unassigned_position_is_reported_before_duplicates() {
        let candidate = MatchCandidate {
            team_a_attacker: Some(1),
            team_a_goalkeeper: Some(1),
            team_b_attacker: None,
            team_b_goalkeeper: Some(4),
            winner: None,
            shutout: false,
        };

        assert_eq!(
            validate(&candidate),
            Err(ValidationError::MissingAssignment {
                team: Team::B,
                position: Role::Attacker
            })
        );
    }

    #[test]
    fn duplicate_is_reported_before_missing_winner() {
        let candidate = MatchCandidate {
            team_b_goalkeeper: Some(3),
            winner: None,
            ..complete()
        };

        assert_eq!(
            validate(&candidate),
            Err(ValidationError::DuplicatePlayer { player_id: 3 })
        );
    }

    #[test]
    fn shutout_flag_carries_through() {
        let candidate = MatchCandidate {
            shutout: true,
            ..complete()
        };

        assert!(validate(&candidate).unwrap().shutout);
    }
}
