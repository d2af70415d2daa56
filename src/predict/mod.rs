//! Everything the opponent learns from, and the opponents themselves.
//!
//! - [`Counts`] — per-move tallies with a fixed tie-break order
//! - [`History`] — append-only human and opponent move sequences
//! - [`Transitions`] — first-order counts of previous → next human move
//! - [`Opponent`] — move selection, implemented by [`Markov`] and [`Fish`]
mod counts;
mod fish;
mod history;
mod markov;
mod opponent;
mod transitions;

pub use counts::*;
pub use fish::*;
pub use history::*;
pub use markov::*;
pub use opponent::*;
pub use transitions::*;
