//! Timed-duration totals for a session.
//!
//! The `AD` category never counts toward practice time. An exercise listed
//! both standalone and inside a round contributes from both contexts; the
//! two listings are independent authoring decisions and are not collapsed.

use crate::session::{Round, Session};

/// Total planned practice time of a session, in seconds.
///
/// Sums the timed pool exercises, then adds each round's per-pass sum of
/// resolvable timed exercises multiplied by its repetition count.
/// Non-positive repetition counts contribute nothing, matching the
/// flattening skip rule. Returns 0 for a session with no timed content.
pub fn session_duration(session: &Session) -> u64 {
    let base: u64 = session
        .exercises
        .iter()
        .filter(|e| !e.kind.is_untimed())
        .map(|e| e.duration_secs as u64)
        .sum();

    let from_rounds: u64 = session
        .rounds
        .iter()
        .map(|r| round_duration(r, session))
        .sum();

    base + from_rounds
}

/// Timed contribution of a single round, in seconds.
///
/// Unresolvable code references contribute nothing.
pub fn round_duration(round: &Round, session: &Session) -> u64 {
    let per_pass: u64 = round
        .exercises
        .iter()
        .filter_map(|code| session.exercise_by_code(code))
        .filter(|e| !e.kind.is_untimed())
        .map(|e| e.duration_secs as u64)
        .sum();

    per_pass * round.repetitions.max(0) as u64
}
