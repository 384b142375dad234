//! Computer move selection.

use super::MoveSet;
use rand::{CryptoRng, Rng};

/// Pick one move uniformly at random
pub fn choose_move<'a, R: Rng + CryptoRng>(moves: &'a MoveSet, rng: &mut R) -> &'a str {
    &moves[rng.gen_range(0..moves.len())]
}
