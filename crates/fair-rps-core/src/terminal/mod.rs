//! Console I/O abstraction.

mod mock;
mod stdio;
mod traits;

pub use mock::ScriptedTerminal;
pub use stdio::StdTerminal;
pub use traits::{Terminal, TerminalError};
