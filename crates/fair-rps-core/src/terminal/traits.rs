//! Terminal trait definition.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from terminal operations
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed while waiting for a move")]
    Closed,
}

/// Line-based console used by a game session
///
/// Implementations can be:
/// - StdTerminal for the real process stdin/stdout
/// - ScriptedTerminal for tests
#[async_trait]
pub trait Terminal: Send {
    /// Write one line of output
    async fn write_line(&mut self, line: &str) -> Result<(), TerminalError>;

    /// Show a prompt (no newline) and wait for one line of input.
    ///
    /// The returned line has its terminator stripped. End of input is
    /// reported as `TerminalError::Closed`.
    async fn prompt(&mut self, prompt: &str) -> Result<String, TerminalError>;
}
