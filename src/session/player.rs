use crate::*;
use std::collections::VecDeque;
use std::io::BufRead;

/// Trait for the human side of the table.
///
/// The session asks for one line of text per prompt and validates it
/// itself, so implementations only move text around: stdin, a terminal
/// prompt, or a script in tests.
pub trait Player {
    /// Next line of input for `round`. `None` once input is exhausted,
    /// which ends the session like the exit command.
    fn decide(&mut self, round: usize) -> Option<String>;
    /// Receive notification of session events.
    fn notify(&mut self, event: &Event);
}

/// Replays a fixed list of tokens and remembers every event it saw.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    inputs: VecDeque<String>,
    events: Vec<Event>,
}

impl Scripted {
    pub fn events(&self) -> &[Event] {
        &self.events
    }
    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl<S> FromIterator<S> for Scripted
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            inputs: iter.into_iter().map(S::into).collect(),
            events: Vec::new(),
        }
    }
}

impl Player for Scripted {
    fn decide(&mut self, _: usize) -> Option<String> {
        self.inputs.pop_front()
    }
    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

/// Reads one line per prompt from any buffered reader.
///
/// Used when stdin is piped rather than a terminal. Events are written to
/// the log rather than echoed.
pub struct Lines<R>(R);

impl<R> From<R> for Lines<R>
where
    R: BufRead,
{
    fn from(reader: R) -> Self {
        Self(reader)
    }
}

impl<R> Player for Lines<R>
where
    R: BufRead,
{
    fn decide(&mut self, round: usize) -> Option<String> {
        let ref mut line = Vec::new();
        match self.0.read_until(b'\n', line) {
            Ok(0) => None,
            Ok(_) => Some(String::from_utf8_lossy(line).into_owned()),
            Err(e) => {
                log::warn!("input closed in round {}: {}", round, e);
                None
            }
        }
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Invalid(input) => log::warn!("ignoring {:?}", input.trim()),
            Event::Resolved(record) => log::info!("{}", record),
            Event::Capped(rounds) => log::info!("round limit of {} reached", rounds),
            Event::Exited => log::info!("input finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_replays_in_order() {
        let mut player = ["rock", "paper"].into_iter().collect::<Scripted>();
        assert_eq!(player.decide(1).as_deref(), Some("rock"));
        assert_eq!(player.remaining(), 1);
        assert_eq!(player.decide(2).as_deref(), Some("paper"));
        assert_eq!(player.decide(3), None);
        player.notify(&Event::Exited);
        assert_eq!(player.events(), &[Event::Exited]);
    }

    #[test]
    fn lines_reads_until_eof() {
        let mut player = Lines::from("rock\n  Paper \nscissors".as_bytes());
        assert_eq!(player.decide(1).as_deref(), Some("rock\n"));
        assert_eq!(player.decide(2).as_deref(), Some("  Paper \n"));
        assert_eq!(player.decide(3).as_deref(), Some("scissors"));
        assert_eq!(player.decide(4), None);
    }

    #[test]
    fn lines_survives_invalid_utf8() {
        let mut player = Lines::from(&b"rock\n\xff\xfe\npaper\n"[..]);
        assert_eq!(player.decide(1).as_deref(), Some("rock\n"));
        assert_eq!(player.decide(2).as_deref(), Some("\u{fffd}\u{fffd}\n"));
        assert_eq!(player.decide(2).as_deref(), Some("paper\n"));
        assert_eq!(player.decide(3), None);
    }
}
