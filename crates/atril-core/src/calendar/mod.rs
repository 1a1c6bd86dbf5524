//! Local calendar-date math.
//!
//! Timezone-naive helpers over `chrono::NaiveDate` used to group practice
//! records into weekly views and chart buckets. Weeks start on Monday;
//! Sunday belongs to the preceding week (ISO-8601 convention).

use chrono::{Datelike, Days, NaiveDate};

use crate::error::ValidationError;

/// Wire format for local dates: `YYYY-MM-DD`.
pub const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` local date.
///
/// Arbitrary external strings must be validated by the caller; anything the
/// formatter counterpart did not produce is rejected.
pub fn parse_local_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s, LOCAL_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// Format a local date as `YYYY-MM-DD`.
pub fn format_local_date(date: NaiveDate) -> String {
    date.format(LOCAL_DATE_FORMAT).to_string()
}

/// Monday of the week containing `date`.
pub fn start_of_monday(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_monday() as u64)
}

/// ISO-8601 week number (weeks start Monday; week 1 contains the year's
/// first Thursday).
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// ISO Monday (`YYYY-MM-DD`) of the week containing a `YYYY-MM-DD` date.
pub fn monday_of(date: &str) -> Result<String, ValidationError> {
    let d = parse_local_date(date)?;
    Ok(format_local_date(start_of_monday(d)))
}

/// Whole weeks from one ISO Monday date to another.
///
/// Negative when `current` precedes `start`.
pub fn week_offset(start: &str, current: &str) -> Result<i64, ValidationError> {
    let start = parse_local_date(start)?;
    let current = parse_local_date(current)?;
    Ok((current - start).num_days().div_euclid(7))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_maps_to_itself() {
        assert_eq!(start_of_monday(date(2025, 9, 1)), date(2025, 9, 1));
    }

    #[test]
    fn midweek_maps_back_to_monday() {
        // 2025-09-04 is a Thursday.
        assert_eq!(start_of_monday(date(2025, 9, 4)), date(2025, 9, 1));
    }

    #[test]
    fn sunday_belongs_to_the_preceding_week() {
        // 2025-09-07 is a Sunday; its week began six days earlier.
        assert_eq!(start_of_monday(date(2025, 9, 7)), date(2025, 9, 1));
    }

    #[test]
    fn iso_week_number_matches_standard_cases() {
        // 2025-01-01 is a Wednesday in week 1.
        assert_eq!(iso_week_number(date(2025, 1, 1)), 1);
        // 2023-01-01 is a Sunday belonging to week 52 of 2022.
        assert_eq!(iso_week_number(date(2023, 1, 1)), 52);
        // 2020-12-31 is a Thursday in week 53.
        assert_eq!(iso_week_number(date(2020, 12, 31)), 53);
    }

    #[test]
    fn parse_and_format_are_inverses() {
        let d = date(2025, 3, 9);
        assert_eq!(parse_local_date(&format_local_date(d)).unwrap(), d);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for bad in ["2025/01/01", "01-02-2025", "2025-13-01", "not a date", ""] {
            assert!(parse_local_date(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn monday_of_formats_the_week_start() {
        assert_eq!(monday_of("2025-09-07").unwrap(), "2025-09-01");
        assert_eq!(monday_of("2025-09-01").unwrap(), "2025-09-01");
    }

    #[test]
    fn week_offset_counts_whole_weeks() {
        assert_eq!(week_offset("2025-09-01", "2025-09-01").unwrap(), 0);
        assert_eq!(week_offset("2025-09-01", "2025-09-08").unwrap(), 1);
        assert_eq!(week_offset("2025-09-01", "2025-10-13").unwrap(), 6);
        assert_eq!(week_offset("2025-09-08", "2025-09-01").unwrap(), -1);
    }
}
