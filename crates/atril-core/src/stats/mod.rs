//! Progress statistics for practice records.
//!
//! This module turns raw per-session practice records into the zero-filled
//! daily series and bucket-aggregated series the progress charts consume.

mod bucket;
mod daily_series;
mod record;

pub use bucket::{aggregate_series, choose_bucket, Bucket, BucketEntry};
pub use daily_series::{build_daily_series, DayEntry};
pub use record::PracticeRecord;
