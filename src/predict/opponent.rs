use crate::*;

/// Trait for anything that picks the computer's throw.
///
/// Implementations see the completed rounds and the transition model but
/// never the human's current move, and never mutate either.
pub trait Opponent {
    fn choose(&mut self, history: &History, transitions: &Transitions) -> Move;
}
