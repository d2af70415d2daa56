use crate::*;

/// First-order transition counts over the human's moves.
///
/// Row = previous human move, column = the move that followed it. The
/// first round of a session has no predecessor and records nothing, so the
/// grand total after `n` rounds is `n - 1`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transitions([[usize; 3]; 3]);

impl Transitions {
    /// Counts `previous → current`. No-op without a previous move.
    pub fn record(&mut self, previous: Option<Move>, current: Move) {
        if let Some(previous) = previous {
            self.0[previous.index()][current.index()] += 1;
        }
    }
    pub fn count(&self, previous: Move, next: Move) -> usize {
        self.0[previous.index()][next.index()]
    }
    /// Everything observed after `previous`.
    pub fn row(&self, previous: Move) -> Counts {
        Counts::from(self.0[previous.index()])
    }
    pub fn total(&self) -> usize {
        self.0.iter().flatten().sum()
    }
}

impl From<[[usize; 3]; 3]> for Transitions {
    fn from(counts: [[usize; 3]; 3]) -> Self {
        Self(counts)
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Transitions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌──────────┬──────────┬──────────┬──────────┐")?;
        writeln!(f, "│ from\\to  │     rock │    paper │ scissors │")?;
        writeln!(f, "├──────────┼──────────┼──────────┼──────────┤")?;
        for prev in Move::all() {
            writeln!(
                f,
                "│ {:<8} │ {:>8} │ {:>8} │ {:>8} │",
                prev.to_string(),
                self.count(*prev, Move::Rock),
                self.count(*prev, Move::Paper),
                self.count(*prev, Move::Scissors),
            )?;
        }
        write!(f, "└──────────┴──────────┴──────────┴──────────┘")
    }
}
