use crate::*;

/// What the session tells the player as it runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Input that was neither a move nor the exit command.
    Invalid(String),
    /// A round finished.
    Resolved(Record),
    /// The round cap was reached.
    Capped(usize),
    /// The player asked to stop, or input ran dry.
    Exited,
}
