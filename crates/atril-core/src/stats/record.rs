//! Practice-record type.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One recorded practice session.
///
/// Timestamps are local wall-clock time; the progress views group by local
/// calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeRecord {
    pub id: String,
    pub student: String,
    pub started_at: NaiveDateTime,
    /// Real practiced time in seconds
    pub duration_secs: u32,
    /// Exercises completed during the session
    pub completed_blocks: u32,
    /// Exercises skipped during the session
    pub skipped_blocks: u32,
    /// Student satisfaction rating; only positive values count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Practice focus label of the session, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

impl PracticeRecord {
    /// Rating if present and positive, the only form the charts count.
    pub fn counted_rating(&self) -> Option<f64> {
        self.rating.filter(|r| *r > 0.0)
    }
}
