//! Moves, round outcomes, and the words players type.
mod locale;
mod moves;
mod outcome;

pub use locale::*;
pub use moves::*;
pub use outcome::*;
