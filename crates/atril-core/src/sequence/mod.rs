//! Session sequencing.
//!
//! This module turns a session definition (exercise pool plus repeated
//! rounds) into the linear execution list the practice player drives,
//! and computes the timed-duration totals the progress views display.

mod duration;
mod flatten;
mod play_order;
mod round_ids;

pub use duration::{round_duration, session_duration};
pub use flatten::{flatten, FlattenedSequence, SequenceWarning, Step, StepOrigin};
pub use play_order::play_order;
pub use round_ids::ensure_round_ids;
