use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Opponent that ignores everything and throws uniformly at random.
/// Useful as a baseline for how much the Markov opponent actually learns.
#[derive(Debug, Clone)]
pub struct Fish(SmallRng);

impl Fish {
    pub fn new() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for Fish {
    fn choose(&mut self, _: &History, _: &Transitions) -> Move {
        Move::from(self.0.random_range(0..Move::all().len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throws_cover_every_move() {
        let ref history = History::default();
        let ref transitions = Transitions::default();
        let mut fish = Fish::seeded(5);
        let seen = (0..300)
            .map(|_| fish.choose(history, transitions))
            .inspect(|m| assert!(Move::all().contains(m)))
            .collect::<Counts>();
        assert!(Move::all().iter().all(|m| seen.get(*m) > 0));
    }

    #[test]
    fn same_seed_same_throws() {
        let ref history = History::default();
        let ref transitions = Transitions::default();
        let mut a = Fish::seeded(17);
        let mut b = Fish::seeded(17);
        let xs = (0..64).map(|_| a.choose(history, transitions)).collect::<Vec<_>>();
        let ys = (0..64).map(|_| b.choose(history, transitions)).collect::<Vec<_>>();
        assert_eq!(xs, ys);
    }
}
