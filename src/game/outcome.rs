use super::*;

/// Result of one round, seen from the human's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    HumanWins,
    OpponentWins,
}

impl Outcome {
    /// Label written to the results file.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tie => "Tie",
            Self::HumanWins => "Victory",
            Self::OpponentWins => "Defeat",
        }
    }
}

/// Decides a round. Total over all move pairs.
pub fn judge(human: Move, opponent: Move) -> Outcome {
    match (human, opponent) {
        (h, o) if h == o => Outcome::Tie,
        (h, o) if h.beats() == o => Outcome::HumanWins,
        _ => Outcome::OpponentWins,
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((human, opponent): (Move, Move)) -> Self {
        judge(human, opponent)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
