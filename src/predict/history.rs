use crate::*;

/// Both players' moves in the order they were played.
///
/// Appended once per completed round, never rewritten.
#[derive(Debug, Default, Clone)]
pub struct History {
    human: Vec<Move>,
    opponent: Vec<Move>,
}

impl History {
    pub fn push(&mut self, human: Move, opponent: Move) {
        self.human.push(human);
        self.opponent.push(opponent);
    }
    pub fn human(&self) -> &[Move] {
        &self.human
    }
    pub fn opponent(&self) -> &[Move] {
        &self.opponent
    }
    /// The human's most recent move.
    pub fn last(&self) -> Option<Move> {
        self.human.last().copied()
    }
    pub fn len(&self) -> usize {
        self.human.len()
    }
    pub fn is_empty(&self) -> bool {
        self.human.is_empty()
    }
    pub fn human_counts(&self) -> Counts {
        self.human.iter().copied().collect()
    }
    pub fn opponent_counts(&self) -> Counts {
        self.opponent.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_stay_aligned() {
        let mut history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
        history.push(Move::Rock, Move::Paper);
        history.push(Move::Scissors, Move::Paper);
        assert_eq!(history.len(), 2);
        assert_eq!(history.human(), &[Move::Rock, Move::Scissors]);
        assert_eq!(history.opponent(), &[Move::Paper, Move::Paper]);
        assert_eq!(history.last(), Some(Move::Scissors));
        assert_eq!(history.opponent_counts().get(Move::Paper), 2);
        assert_eq!(history.human_counts().get(Move::Paper), 0);
    }
}
