//! Circular win rule for move sets of any odd size.

use super::MoveSet;
use std::fmt;
use thiserror::Error;

/// Result of one game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    ComputerWins,
    UserWins,
    Draw,
}

impl Outcome {
    /// Announcement printed when a game is resolved
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::ComputerWins => "Computer wins!",
            Outcome::UserWins => "You win!",
            Outcome::Draw => "It's a draw!",
        }
    }

    /// Help table cell, seen from the user's side
    pub fn cell(&self) -> &'static str {
        match self {
            Outcome::ComputerWins => "Lose",
            Outcome::UserWins => "Win",
            Outcome::Draw => "Draw",
        }
    }

    /// Same game with the two players swapped
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::ComputerWins => Outcome::UserWins,
            Outcome::UserWins => Outcome::ComputerWins,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome engine called with arguments that cannot come from one move set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("computer move {0:?} is not part of the move set")]
    UnknownMove(String),

    #[error("move index {index} out of range for {len} moves")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Decide a game.
///
/// With `n` moves and `half = n / 2`, the distance
/// `(computer - user + n) % n` is zero for a draw, at most `half` when the
/// computer wins, and above `half` when the user wins.
pub fn winner_of(
    moves: &MoveSet,
    user_index: usize,
    computer_move: &str,
) -> Result<Outcome, OutcomeError> {
    let len = moves.len();
    if user_index >= len {
        return Err(OutcomeError::IndexOutOfRange {
            index: user_index,
            len,
        });
    }
    let computer_index = moves
        .index_of(computer_move)
        .ok_or_else(|| OutcomeError::UnknownMove(computer_move.to_string()))?;

    Ok(by_distance((computer_index + len - user_index) % len, moves.half()))
}

fn by_distance(delta: usize, half: usize) -> Outcome {
    if delta == 0 {
        Outcome::Draw
    } else if delta <= half {
        Outcome::ComputerWins
    } else {
        Outcome::UserWins
    }
}

/// One row of the help table.
///
/// The row move is the computer's, each column is a possible user move.
pub fn matrix_row(moves: &MoveSet, row_index: usize) -> Result<Vec<Outcome>, OutcomeError> {
    let computer_move = moves.get(row_index).ok_or(OutcomeError::IndexOutOfRange {
        index: row_index,
        len: moves.len(),
    })?;

    (0..moves.len())
        .map(|column| winner_of(moves, column, computer_move))
        .collect()
}
