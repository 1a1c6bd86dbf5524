//! Bucket selection and series aggregation.
//!
//! The thresholds balance chart readability against data density and must
//! stay exactly as shipped: ranges up to 60 days chart daily, up to 120
//! weekly, up to 365 fortnightly (1st-15th / 16th-end of month), and longer
//! ranges monthly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::DayEntry;
use crate::calendar::start_of_monday;

/// Time-grouping unit for the progress charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Day,
    Week,
    Fortnight,
    Month,
}

impl Bucket {
    /// Display label for the bucket mode.
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Day => "Day",
            Bucket::Week => "Week",
            Bucket::Fortnight => "Fortnight",
            Bucket::Month => "Month",
        }
    }
}

/// Pick the bucket granularity for a date range.
///
/// The day count is inclusive of both endpoints; each threshold is
/// inclusive, so a 60-day range still charts daily and a 61-day range
/// switches to weekly.
pub fn choose_bucket(start: NaiveDate, end: NaiveDate) -> Bucket {
    let days = (end - start).num_days().abs() + 1;
    if days <= 60 {
        Bucket::Day
    } else if days <= 120 {
        Bucket::Week
    } else if days <= 365 {
        Bucket::Fortnight
    } else {
        Bucket::Month
    }
}

/// Aggregated practice activity for one chart bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketEntry {
    /// Bucket key: the day itself, the week's Monday, the fortnight's 1st
    /// or 16th, or the month's 1st
    pub start: NaiveDate,
    /// Last day of the series that fell into this bucket
    pub end: NaiveDate,
    pub total_secs: u64,
    pub sessions: u32,
    pub completed: u32,
    pub skipped: u32,
    /// Mean of the day-level rating means, one decimal
    pub rating: Option<f64>,
}

fn bucket_key(date: NaiveDate, bucket: Bucket) -> NaiveDate {
    match bucket {
        Bucket::Day => date,
        Bucket::Week => start_of_monday(date),
        Bucket::Fortnight => {
            let day = if date.day() <= 15 { 1 } else { 16 };
            NaiveDate::from_ymd_opt(date.year(), date.month(), day)
                .expect("1st and 16th exist in every month")
        }
        Bucket::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .expect("1st exists in every month"),
    }
}

/// Aggregate a daily series into chart buckets.
///
/// Sums time, session counts, and completed/skipped totals per bucket. The
/// rating is the mean of the day-level means over days that have one --
/// a two-stage average, not a flat mean of raw ratings -- rounded to one
/// decimal. Output is ordered by bucket start.
pub fn aggregate_series(series: &[DayEntry], bucket: Bucket) -> Vec<BucketEntry> {
    let mut groups: BTreeMap<NaiveDate, Vec<&DayEntry>> = BTreeMap::new();
    for entry in series {
        groups
            .entry(bucket_key(entry.date, bucket))
            .or_default()
            .push(entry);
    }

    groups
        .into_iter()
        .map(|(start, entries)| {
            let end = entries
                .iter()
                .map(|e| e.date)
                .max()
                .expect("bucket groups are non-empty");

            let rated: Vec<f64> = entries.iter().filter_map(|e| e.rating).collect();
            let rating = if rated.is_empty() {
                None
            } else {
                let mean = rated.iter().sum::<f64>() / rated.len() as f64;
                Some((mean * 10.0).round() / 10.0)
            };

            BucketEntry {
                start,
                end,
                total_secs: entries.iter().map(|e| e.total_secs).sum(),
                sessions: entries.iter().map(|e| e.sessions).sum(),
                completed: entries.iter().map(|e| e.completed).sum(),
                skipped: entries.iter().map(|e| e.skipped).sum(),
                rating,
            }
        })
        .collect()
}
