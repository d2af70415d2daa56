use crate::Arbitrary;

/// A single throw.
///
/// The win relation is a 3-cycle: Rock beats Scissors, Scissors beats
/// Paper, Paper beats Rock. Discriminants index the fixed-size tables in
/// [`Counts`](crate::Counts) and [`Transitions`](crate::Transitions), and
/// their order is the tie-break order wherever "most frequent" is asked.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    pub const fn all() -> &'static [Self; 3] {
        &[Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The move this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// The unique move that defeats this one.
    pub const fn counter(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl From<usize> for Move {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Rock,
            1 => Self::Paper,
            2 => Self::Scissors,
            _ => panic!("no fourth move"),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..Self::all().len()))
    }
}
