//! Game session protocol: commit, collect the user's move, resolve, reveal.

mod session;
mod types;

use crate::crypto::CryptoError;
use crate::games::OutcomeError;
use crate::terminal::TerminalError;
use thiserror::Error;

pub use session::{GameSession, Resolution, SessionEnd, SessionState};
pub use types::{GameId, MoveToken, EXIT_TOKEN, HELP_TOKEN};

/// Fatal errors while running a game session
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Terminal(#[from] TerminalError),

    #[error("internal invariant violated: {0}")]
    InvariantViolation(#[from] OutcomeError),

    #[error("session already finished ({0:?})")]
    AlreadyFinished(SessionState),
}
