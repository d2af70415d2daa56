use crate::*;
use std::path::PathBuf;

/// Which opponent sits across the table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Strategy {
    #[default]
    Markov,
    Random,
}

impl Strategy {
    pub fn opponent(&self, seed: Option<u64>) -> Box<dyn Opponent> {
        match (self, seed) {
            (Self::Markov, Some(seed)) => Box::new(Markov::seeded(seed)),
            (Self::Markov, None) => Box::new(Markov::new()),
            (Self::Random, Some(seed)) => Box::new(Fish::seeded(seed)),
            (Self::Random, None) => Box::new(Fish::new()),
        }
    }
}

/// Runtime knobs for one session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Rounds played before the session ends on its own. At least 1.
    pub rounds: usize,
    /// Destination of the results file.
    pub output: PathBuf,
    pub locale: Locale,
    pub strategy: Strategy,
    /// Fixes the opponent's random draws.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounds: ROUND_CAP,
            output: PathBuf::from(RESULTS_PATH),
            locale: Locale::default(),
            strategy: Strategy::default(),
            seed: None,
        }
    }
}

impl Config {
    pub fn opponent(&self) -> Box<dyn Opponent> {
        self.strategy.opponent(self.seed)
    }
}
