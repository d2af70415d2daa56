use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Adaptive opponent that predicts the human's next move and beats it.
///
/// Decision order, first match wins:
/// 1. fewer than [`COLD_START`] human moves: uniform random throw
/// 2. no previous move, or fewer than [`MARKOV_START`] human moves:
///    counter the human's most frequent move
/// 3. otherwise: counter the most frequent successor of the last human
///    move in the transition model, falling back to step 2 when that row
///    is still empty
///
/// Ties in steps 2 and 3 resolve in Rock, Paper, Scissors order.
#[derive(Debug, Clone)]
pub struct Markov<R = SmallRng> {
    rng: R,
}

impl Markov {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// The human's most likely next move, or `None` while the history is
    /// too short to say anything.
    pub fn predict(human: &[Move], last: Option<Move>, transitions: &Transitions) -> Option<Move> {
        if human.len() < COLD_START {
            return None;
        }
        let overall = human.iter().copied().collect::<Counts>();
        match last {
            Some(last) if human.len() >= MARKOV_START => transitions
                .row(last)
                .mode()
                .or_else(|| overall.mode()),
            _ => overall.mode(),
        }
    }
}

impl Default for Markov {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> From<R> for Markov<R>
where
    R: Rng,
{
    fn from(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Markov<R>
where
    R: Rng,
{
    /// Counters the prediction, or throws at random during cold start.
    pub fn respond(&mut self, human: &[Move], last: Option<Move>, transitions: &Transitions) -> Move {
        match Markov::predict(human, last, transitions) {
            Some(guess) => {
                log::debug!("predicting {} after {} human moves", guess, human.len());
                guess.counter()
            }
            None => Move::from(self.rng.random_range(0..Move::all().len())),
        }
    }
}

impl<R> Opponent for Markov<R>
where
    R: Rng,
{
    fn choose(&mut self, history: &History, transitions: &Transitions) -> Move {
        self.respond(history.human(), history.last(), transitions)
    }
}
