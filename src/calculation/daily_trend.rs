//! Daily attendance trend for the line chart.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{AttendancePunch, AttendanceStatus, DailyTrendPoint, ReportRange};

/// Counts present, late and absent punches per calendar day.
///
/// Only punches inside `range` are counted. Points are sorted ascending by
/// date and truncated to the most recent `window` days that have punches.
///
/// # Example
///
/// ```
/// use hrms_reports::calculation::build_daily_trend;
/// use hrms_reports::models::ReportRange;
/// use chrono::NaiveDate;
///
/// let range = ReportRange::single_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert!(build_daily_trend(&[], &range, 15).is_empty());
/// ```
pub fn build_daily_trend(
    punches: &[AttendancePunch],
    range: &ReportRange,
    window: usize,
) -> Vec<DailyTrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, DailyTrendPoint> = BTreeMap::new();

    for punch in punches.iter().filter(|p| range.contains_date(p.date)) {
        let point = by_date.entry(punch.date).or_insert_with(|| DailyTrendPoint {
            date: punch.date,
            present: 0,
            late: 0,
            absent: 0,
        });

        match punch.status {
            AttendanceStatus::Present | AttendanceStatus::HalfDay => point.present += 1,
            AttendanceStatus::Late => point.late += 1,
            AttendanceStatus::Absent => point.absent += 1,
            AttendanceStatus::Leave | AttendanceStatus::Weekend | AttendanceStatus::Holiday => {}
        }
    }

    let skip = by_date.len().saturating_sub(window);
    by_date.into_values().skip(skip).collect()
}
