//! Zero-filled daily series over practice records.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::PracticeRecord;

/// Range guard: five years of daily entries.
const MAX_SERIES_DAYS: u32 = 1825;

/// Aggregated practice activity for one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    /// Total practiced seconds
    pub total_secs: u64,
    /// Number of recorded sessions
    pub sessions: u32,
    /// Exercises completed across the day's sessions
    pub completed: u32,
    /// Exercises skipped across the day's sessions
    pub skipped: u32,
    /// Mean of the day's positive ratings, if any
    pub rating: Option<f64>,
}

impl DayEntry {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_secs: 0,
            sessions: 0,
            completed: 0,
            skipped: 0,
            rating: None,
        }
    }
}

#[derive(Default)]
struct DayBuilder {
    total_secs: u64,
    sessions: u32,
    completed: u32,
    skipped: u32,
    ratings: Vec<f64>,
}

impl DayBuilder {
    fn record(&mut self, r: &PracticeRecord) {
        self.total_secs += r.duration_secs as u64;
        self.sessions += 1;
        self.completed += r.completed_blocks;
        self.skipped += r.skipped_blocks;
        if let Some(rating) = r.counted_rating() {
            self.ratings.push(rating);
        }
    }

    fn build(&self, date: NaiveDate) -> DayEntry {
        let rating = if self.ratings.is_empty() {
            None
        } else {
            Some(self.ratings.iter().sum::<f64>() / self.ratings.len() as f64)
        };

        DayEntry {
            date,
            total_secs: self.total_secs,
            sessions: self.sessions,
            completed: self.completed,
            skipped: self.skipped,
            rating,
        }
    }
}

/// Build a gap-free daily series from raw practice records.
///
/// One entry per local calendar day from `start` to `end` inclusive, with
/// zero-filled entries for days without activity. Missing range bounds are
/// inferred from the records; an empty record slice yields an empty series.
/// The walked range is capped at five years.
pub fn build_daily_series(
    records: &[PracticeRecord],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<DayEntry> {
    if records.is_empty() {
        return Vec::new();
    }

    let days: Vec<NaiveDate> = records.iter().map(|r| r.started_at.date()).collect();
    let (min_day, max_day) = match (days.iter().min(), days.iter().max()) {
        (Some(min), Some(max)) => (*min, *max),
        _ => return Vec::new(),
    };
    let start = start.unwrap_or(min_day);
    let end = end.unwrap_or(max_day);

    let mut by_day: HashMap<NaiveDate, DayBuilder> = HashMap::new();
    for record in records {
        by_day
            .entry(record.started_at.date())
            .or_default()
            .record(record);
    }

    let mut series = Vec::new();
    let mut current = start;
    while current <= end && series.len() < MAX_SERIES_DAYS as usize {
        let entry = match by_day.get(&current) {
            Some(builder) => builder.build(current),
            None => DayEntry::empty(current),
        };
        series.push(entry);
        current = current + Days::new(1);
    }

    series
}
