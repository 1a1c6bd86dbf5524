//! Play-time ordering for a round.
//!
//! The `shuffled` flag is applied here, at execution time, not during
//! flattening. The shuffled order must never be persisted back into the
//! session definition.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::session::Round;

/// Exercise codes of a round in the order the player should run them.
///
/// Declared order unless the round is marked shuffled, in which case the
/// codes are permuted with the caller's RNG.
pub fn play_order<R: Rng + ?Sized>(round: &Round, rng: &mut R) -> Vec<String> {
    let mut codes = round.exercises.clone();
    if round.shuffled {
        codes.shuffle(rng);
    }
    codes
}
