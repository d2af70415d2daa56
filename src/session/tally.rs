use crate::*;

/// Running win counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub human: usize,
    pub opponent: usize,
    pub ties: usize,
}

impl Tally {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWins => self.human += 1,
            Outcome::OpponentWins => self.opponent += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn rounds(&self) -> usize {
        self.human + self.opponent + self.ties
    }
}
