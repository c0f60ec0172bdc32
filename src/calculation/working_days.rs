//! Day detection and working-day counting.
//!
//! This module determines the day type (weekday, Saturday, Sunday) for a
//! calendar date and counts the working days of a report range. Working days
//! are Monday through Friday; no holiday or shift calendar is consulted.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::ReportRange;

/// The type of a calendar day.
///
/// # Example
///
/// ```
/// use hrms_reports::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Monday through Friday.
    pub fn is_working_day(self) -> bool {
        self == DayType::Weekday
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use hrms_reports::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2024-01-06 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2024-01-01 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Counts the Monday–Friday dates in an inclusive range.
///
/// This is the single denominator used for every employee's attendance
/// percentage in a report.
///
/// # Example
///
/// ```
/// use hrms_reports::calculation::count_working_days;
/// use hrms_reports::models::ReportRange;
/// use chrono::NaiveDate;
///
/// // Monday 2024-01-01 through Sunday 2024-01-07
/// let range = ReportRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(count_working_days(&range), 5);
/// ```
pub fn count_working_days(range: &ReportRange) -> u32 {
    let total_days = (range.to() - range.from()).num_days() + 1;
    let full_weeks = total_days / 7;
    let mut count = full_weeks * 5;

    // Walk the leftover partial week; it is at most six days long.
    let leftover_start = range.from() + chrono::Duration::days(full_weeks * 7);
    count += ReportRange::new(leftover_start, range.to())
        .map(|tail| {
            tail.days()
                .filter(|d| get_day_type(*d).is_working_day())
                .count() as i64
        })
        .unwrap_or(0);

    count as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn range(from: &str, to: &str) -> ReportRange {
        ReportRange::new(make_date(from), make_date(to)).unwrap()
    }

    #[test]
    fn test_monday_is_weekday() {
        assert_eq!(get_day_type(make_date("2024-01-01")), DayType::Weekday);
    }

    #[test]
    fn test_friday_is_weekday() {
        assert_eq!(get_day_type(make_date("2024-01-05")), DayType::Weekday);
    }

    #[test]
    fn test_saturday_and_sunday() {
        assert_eq!(get_day_type(make_date("2024-01-06")), DayType::Saturday);
        assert_eq!(get_day_type(make_date("2024-01-07")), DayType::Sunday);
    }

    #[test]
    fn test_full_week_has_five_working_days() {
        assert_eq!(count_working_days(&range("2024-01-01", "2024-01-07")), 5);
    }

    #[test]
    fn test_single_weekend_day_has_none() {
        assert_eq!(count_working_days(&range("2024-01-06", "2024-01-06")), 0);
        assert_eq!(count_working_days(&range("2024-01-06", "2024-01-07")), 0);
    }

    #[test]
    fn test_single_weekday() {
        assert_eq!(count_working_days(&range("2024-01-03", "2024-01-03")), 1);
    }

    #[test]
    fn test_range_starting_on_weekend() {
        // Saturday 2024-01-06 through Wednesday 2024-01-10
        assert_eq!(count_working_days(&range("2024-01-06", "2024-01-10")), 3);
    }

    #[test]
    fn test_four_weeks_has_twenty_working_days() {
        assert_eq!(count_working_days(&range("2024-01-01", "2024-01-26")), 20);
        assert_eq!(count_working_days(&range("2024-01-01", "2024-01-28")), 20);
    }

    #[test]
    fn test_leap_february() {
        // February 2024 has 29 days, starting on Thursday
        assert_eq!(count_working_days(&range("2024-02-01", "2024-02-29")), 21);
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(DayType::Weekday.to_string(), "Weekday");
        assert_eq!(DayType::Sunday.to_string(), "Sunday");
    }
}
