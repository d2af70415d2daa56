use crate::*;

/// How often each move has been seen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts([usize; 3]);

impl Counts {
    pub fn get(&self, m: Move) -> usize {
        self.0[m.index()]
    }
    pub fn increment(&mut self, m: Move) {
        self.0[m.index()] += 1;
    }
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
    /// Share of `m` among all observations, 0 when nothing was observed.
    pub fn percent(&self, m: Move) -> Percent {
        match self.total() {
            0 => 0.,
            n => self.get(m) as Percent * 100. / n as Percent,
        }
    }
    /// Most frequent move, keeping the first maximum in Rock, Paper,
    /// Scissors order. `None` when every count is zero.
    pub fn mode(&self) -> Option<Move> {
        Move::all()
            .iter()
            .copied()
            .filter(|m| self.get(*m) > 0)
            .fold(None, |best: Option<Move>, m| match best {
                Some(b) if self.get(b) >= self.get(m) => Some(b),
                _ => Some(m),
            })
    }
}

impl FromIterator<Move> for Counts {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut counts = Self::default();
        iter.into_iter().for_each(|m| counts.increment(m));
        counts
    }
}

impl From<[usize; 3]> for Counts {
    fn from(counts: [usize; 3]) -> Self {
        Self(counts)
    }
}

impl std::fmt::Display for Counts {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "rock {} · paper {} · scissors {}",
            self.get(Move::Rock),
            self.get(Move::Paper),
            self.get(Move::Scissors)
        )
    }
}
