use crate::*;

/// End-of-session totals for the console.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    tally: Tally,
    human: Counts,
    opponent: Counts,
}

impl Summary {
    pub fn tally(&self) -> Tally {
        self.tally
    }
    pub fn human(&self) -> Counts {
        self.human
    }
    pub fn opponent(&self) -> Counts {
        self.opponent
    }
    fn cell(counts: &Counts, m: Move) -> String {
        format!("{:>5} ({:>6.2}%)", counts.get(m), counts.percent(m))
    }
}

impl From<(&History, Tally)> for Summary {
    fn from((history, tally): (&History, Tally)) -> Self {
        Self {
            tally,
            human: history.human_counts(),
            opponent: history.opponent_counts(),
        }
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rounds played : {}", self.tally.rounds())?;
        writeln!(f, "Human wins    : {}", self.tally.human)?;
        writeln!(f, "Opponent wins : {}", self.tally.opponent)?;
        writeln!(f, "Ties          : {}", self.tally.ties)?;
        writeln!(f, "┌──────────┬─────────────────┬─────────────────┐")?;
        writeln!(f, "│ Move     │           Human │        Opponent │")?;
        writeln!(f, "├──────────┼─────────────────┼─────────────────┤")?;
        for m in Move::all() {
            writeln!(
                f,
                "│ {:<8} │ {:>15} │ {:>15} │",
                m.to_string(),
                Self::cell(&self.human, *m),
                Self::cell(&self.opponent, *m),
            )?;
        }
        write!(f, "└──────────┴─────────────────┴─────────────────┘")
    }
}
