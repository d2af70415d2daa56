use crate::*;

/// One side's cumulative move frequencies, in percent.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Frequencies([Percent; 3]);

impl Frequencies {
    pub fn get(&self, m: Move) -> Percent {
        self.0[m.index()]
    }
    pub fn sum(&self) -> Percent {
        self.0.iter().sum()
    }
}

impl From<Counts> for Frequencies {
    fn from(counts: Counts) -> Self {
        Self((*Move::all()).map(|m| counts.percent(m)))
    }
}

/// Immutable snapshot of one completed round.
///
/// Frequencies cover every round up to and including this one, so each
/// row of the results file reads as the state of play at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    round: usize,
    human: Move,
    opponent: Move,
    outcome: Outcome,
    human_freq: Frequencies,
    opponent_freq: Frequencies,
}

impl Record {
    /// Snapshot taken once `history` already contains this round.
    pub fn new(round: usize, (human, opponent): (Move, Move), history: &History) -> Self {
        Self {
            round,
            human,
            opponent,
            outcome: judge(human, opponent),
            human_freq: Frequencies::from(history.human_counts()),
            opponent_freq: Frequencies::from(history.opponent_counts()),
        }
    }
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn human(&self) -> Move {
        self.human
    }
    pub fn opponent(&self) -> Move {
        self.opponent
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn human_freq(&self) -> Frequencies {
        self.human_freq
    }
    pub fn opponent_freq(&self) -> Frequencies {
        self.opponent_freq
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "round {}: {} vs {} => {}",
            self.round, self.human, self.opponent, self.outcome
        )
    }
}
