//! Attendance punch model.
//!
//! A punch is one attendance record for one employee on one calendar day.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The recorded status of an attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// On time.
    Present,
    /// Did not attend.
    Absent,
    /// Attended but checked in late.
    Late,
    /// Attended for part of the day.
    HalfDay,
    /// On leave.
    Leave,
    /// Weekend day.
    Weekend,
    /// Public or company holiday.
    Holiday,
}

impl AttendanceStatus {
    /// Returns true if the status counts as a present day.
    ///
    /// Late and half-day attendance both count as present.
    ///
    /// # Example
    ///
    /// ```
    /// use hrms_reports::models::AttendanceStatus;
    ///
    /// assert!(AttendanceStatus::Late.counts_as_present());
    /// assert!(!AttendanceStatus::Leave.counts_as_present());
    /// ```
    pub fn counts_as_present(self) -> bool {
        matches!(
            self,
            AttendanceStatus::Present | AttendanceStatus::Late | AttendanceStatus::HalfDay
        )
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::HalfDay => "half_day",
            AttendanceStatus::Leave => "leave",
            AttendanceStatus::Weekend => "weekend",
            AttendanceStatus::Holiday => "holiday",
        };
        write!(f, "{}", label)
    }
}

/// A single attendance record.
///
/// # Example
///
/// ```
/// use hrms_reports::models::{AttendancePunch, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let punch = AttendancePunch {
///     employee_id: "E1".to_string(),
///     employee_name: "Asha Rao".to_string(),
///     department: "Engineering".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     check_in: None,
///     check_out: None,
///     hours_worked: Decimal::new(80, 1),
///     status: AttendanceStatus::Present,
///     overtime_hours: Decimal::ZERO,
///     late_by_minutes: None,
/// };
/// assert!(punch.status.counts_as_present());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePunch {
    /// The employee this punch belongs to.
    pub employee_id: String,
    /// The employee's display name at the time of the punch.
    pub employee_name: String,
    /// The employee's department at the time of the punch.
    pub department: String,
    /// The calendar day of the punch.
    pub date: NaiveDate,
    /// Check-in time, if recorded.
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    /// Check-out time, if recorded.
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    /// Hours worked on the day.
    pub hours_worked: Decimal,
    /// Recorded status for the day.
    pub status: AttendanceStatus,
    /// Overtime hours worked on the day.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Minutes late at check-in, if late.
    #[serde(default)]
    pub late_by_minutes: Option<u32>,
}
