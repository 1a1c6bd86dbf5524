//! Stable round id assignment.
//!
//! UI expand/collapse state is keyed by round id, so ids must survive
//! re-renders: rounds that already carry an id are never touched.

use uuid::Uuid;

use crate::session::Session;

/// Return a copy of the session in which every round has a unique id.
///
/// Rounds lacking an id receive a freshly generated one; existing ids are
/// preserved, so repeated calls are stable. The caller's session is not
/// mutated.
pub fn ensure_round_ids(session: &Session) -> Session {
    let mut patched = session.clone();
    for round in &mut patched.rounds {
        if round.id.is_none() {
            round.id = Some(Uuid::new_v4().to_string());
        }
    }
    patched
}
