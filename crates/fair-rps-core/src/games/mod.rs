//! Move sets, move selection, and the circular win rule.

mod moves;
mod outcome;
mod selector;
mod table;

pub use moves::{ConfigError, MoveSet, MIN_MOVES};
pub use outcome::{matrix_row, winner_of, Outcome, OutcomeError};
pub use selector::choose_move;
pub use table::HelpTable;
