use super::*;

/// One recognised line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Play(Move),
    Exit,
}

/// Spelling of the move names and the exit command.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Locale {
    #[default]
    #[cfg_attr(feature = "cli", value(name = "en"))]
    English,
    #[cfg_attr(feature = "cli", value(name = "es"))]
    Spanish,
}

impl Locale {
    pub const fn name(&self, m: Move) -> &'static str {
        match (self, m) {
            (Self::English, Move::Rock) => "rock",
            (Self::English, Move::Paper) => "paper",
            (Self::English, Move::Scissors) => "scissors",
            (Self::Spanish, Move::Rock) => "piedra",
            (Self::Spanish, Move::Paper) => "papel",
            (Self::Spanish, Move::Scissors) => "tijera",
        }
    }
    pub const fn exit(&self) -> &'static str {
        match self {
            Self::English => "quit",
            Self::Spanish => "salir",
        }
    }
    /// Trims and case-folds `input` before matching. `None` for anything
    /// that is neither a move name nor the exit command.
    pub fn parse(&self, input: &str) -> Option<Token> {
        let ref word = input.trim().to_lowercase();
        if word == self.exit() {
            return Some(Token::Exit);
        }
        Move::all()
            .iter()
            .find(|m| self.name(**m) == word)
            .map(|m| Token::Play(*m))
    }
    /// Move names joined for prompts, e.g. `rock/paper/scissors`.
    pub fn choices(&self) -> String {
        Move::all()
            .iter()
            .map(|m| self.name(*m))
            .collect::<Vec<_>>()
            .join("/")
    }
}
