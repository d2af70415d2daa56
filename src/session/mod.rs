//! The round loop and everything it produces.
//!
//! [`Session`] owns all mutable game state for one run: history,
//! transition model, tallies, and the ordered log of [`Record`]s. Input
//! arrives through a [`Player`], results leave through a [`Sink`].
mod config;
mod event;
mod player;
mod record;
mod session;
mod sink;
mod summary;
mod tally;

pub use config::*;
pub use event::*;
pub use player::*;
pub use record::*;
pub use session::*;
pub use sink::*;
pub use summary::*;
pub use tally::*;
