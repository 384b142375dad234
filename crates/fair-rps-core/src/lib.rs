//! Fair RPS Core Library
//!
//! This crate provides the commit-reveal fairness protocol, the circular
//! win rule for odd-sized move sets, and the game session that ties them
//! to a line-based terminal.

pub mod crypto;
pub mod games;
pub mod protocol;
pub mod terminal;

pub use crypto::{Commitment, CryptoError, Secret};
pub use games::{matrix_row, winner_of, ConfigError, HelpTable, MoveSet, Outcome, OutcomeError};
pub use protocol::{GameError, GameId, GameSession, MoveToken, Resolution, SessionEnd, SessionState};
pub use terminal::{ScriptedTerminal, StdTerminal, Terminal, TerminalError};
