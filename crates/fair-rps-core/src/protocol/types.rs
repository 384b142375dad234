//! Protocol types.

use std::fmt;
use uuid::Uuid;

/// Input that ends the game without playing
pub const EXIT_TOKEN: &str = "0";

/// Input that shows the help table
pub const HELP_TOKEN: &str = "?";

/// Unique game identifier, used to correlate log events
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameId(Uuid);

impl GameId {
    /// Create a new random game ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameId({})", self.0)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One validated line of user input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveToken {
    /// `0`
    Exit,
    /// `?`
    Help,
    /// `1..=n`, stored zero-based
    Play(usize),
}

impl MoveToken {
    /// Parse a line against a move set of `move_count` moves.
    ///
    /// Returns `None` for anything that is not `?` or a decimal number in
    /// `0..=move_count`.
    pub fn parse(input: &str, move_count: usize) -> Option<Self> {
        let input = input.trim();
        if input == HELP_TOKEN {
            return Some(MoveToken::Help);
        }
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        match input.parse::<usize>().ok()? {
            0 => Some(MoveToken::Exit),
            n if n <= move_count => Some(MoveToken::Play(n - 1)),
            _ => None,
        }
    }
}
