use calcetto::{MatchCandidate, PlayerId, Team};

/// Fluent construction of match reports for tests.
#[derive(Default)]
pub struct MatchBuilder {
    candidate: MatchCandidate,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_a(mut self, attacker: PlayerId, goalkeeper: PlayerId) -> Self {
        self.candidate.team_a_attacker = Some(attacker);
        self.candidate.team_a_goalkeeper = Some(goalkeeper);
        self
    }

    pub fn team_b(mut self, attacker: PlayerId, goalkeeper: PlayerId) -> Self {
        self.candidate.team_b_attacker = Some(attacker);
        self.candidate.team_b_goalkeeper = Some(goalkeeper);
        self
    }

    pub fn winner(mut self, team: Team) -> Self {
        self.candidate.winner = Some(team);
        self
    }

    pub fn shutout(mut self) -> Self {
        self.candidate.shutout = true;
        self
    }

    pub fn build(self) -> MatchCandidate {
        self.candidate
    }
}
