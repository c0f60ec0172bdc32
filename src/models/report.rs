//! Attendance report models.
//!
//! This module contains the [`AttendanceReport`] type and the rows and chart
//! aggregates it is made of. None of these are persisted; they are built
//! fresh for every report request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ReportRange;

/// One employee's attendance summary over a report range.
///
/// `present_days + absent_days + leave_days` always equals
/// `total_working_days`.
///
/// # Example
///
/// ```
/// use hrms_reports::models::AttendanceSummaryRow;
/// use rust_decimal::Decimal;
///
/// let row = AttendanceSummaryRow {
///     employee_id: "E1".to_string(),
///     employee_name: "Asha Rao".to_string(),
///     department: "Engineering".to_string(),
///     present_days: 2,
///     absent_days: 1,
///     leave_days: 0,
///     total_working_days: 3,
///     attendance_percentage: Decimal::new(667, 1),
///     late_arrival_count: 0,
///     average_hours_per_present_day: Decimal::new(8, 0),
///     overtime_hours_total: Decimal::ZERO,
/// };
/// assert_eq!(row.attendance_percentage_label(), "66.7%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummaryRow {
    /// The employee this row summarizes.
    pub employee_id: String,
    /// Display name.
    pub employee_name: String,
    /// Department.
    pub department: String,
    /// Days counted as present (present, late or half-day).
    pub present_days: u32,
    /// Working days neither present nor on approved leave.
    pub absent_days: u32,
    /// Working days on approved leave.
    pub leave_days: u32,
    /// Monday–Friday dates in the report range.
    pub total_working_days: u32,
    /// `present_days / total_working_days * 100`, one decimal place.
    pub attendance_percentage: Decimal,
    /// Number of late check-ins.
    pub late_arrival_count: u32,
    /// Mean hours worked per present day.
    pub average_hours_per_present_day: Decimal,
    /// Sum of overtime hours.
    pub overtime_hours_total: Decimal,
}

impl AttendanceSummaryRow {
    /// Formats the attendance percentage for display, e.g. `"100%"`.
    pub fn attendance_percentage_label(&self) -> String {
        percentage_label(self.attendance_percentage)
    }
}

/// Formats a percentage without trailing zeros, e.g. `"0%"` or `"66.7%"`.
pub fn percentage_label(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

/// Per-department averages used by the department bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRollup {
    /// Department name.
    pub department: String,
    /// Number of employee rows in the department.
    pub employee_count: u32,
    /// Mean present days.
    pub average_present: Decimal,
    /// Mean absent days.
    pub average_absent: Decimal,
    /// Mean leave days.
    pub average_leave: Decimal,
    /// Mean late arrivals.
    pub average_late: Decimal,
}

/// Attendance counts for one calendar day, used by the trend line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrendPoint {
    /// The calendar day.
    pub date: NaiveDate,
    /// Punches with status present or half-day.
    pub present: u32,
    /// Punches with status late.
    pub late: u32,
    /// Punches with status absent.
    pub absent: u32,
}

/// Headline figures for the rows returned in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Number of rows.
    pub employee_count: u32,
    /// Sum of present days.
    pub present_days: u32,
    /// Sum of absent days.
    pub absent_days: u32,
    /// Sum of leave days.
    pub leave_days: u32,
    /// Sum of late arrivals.
    pub late_arrivals: u32,
    /// Present days over all employee working days, as a percentage.
    pub overall_attendance_percentage: Decimal,
    /// Sum of overtime hours.
    pub overtime_hours: Decimal,
}

/// The complete output of an attendance aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// The range the report covers.
    pub range: ReportRange,
    /// Monday–Friday dates in the range.
    pub total_working_days: u32,
    /// One row per employee, after the department filter.
    pub rows: Vec<AttendanceSummaryRow>,
    /// Department averages over all employees.
    pub department_rollup: Vec<DepartmentRollup>,
    /// Most recent days of raw punch counts, ascending by date.
    pub daily_trend: Vec<DailyTrendPoint>,
    /// Totals over `rows`.
    pub totals: ReportTotals,
}

impl AttendanceReport {
    /// Looks up the row for an employee.
    pub fn row(&self, employee_id: &str) -> Option<&AttendanceSummaryRow> {
        self.rows.iter().find(|r| r.employee_id == employee_id)
    }

    /// Looks up the rollup for a department.
    pub fn rollup(&self, department: &str) -> Option<&DepartmentRollup> {
        self.department_rollup
            .iter()
            .find(|r| r.department == department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_label_strips_trailing_zeros() {
        assert_eq!(percentage_label(Decimal::new(1000, 1)), "100%");
        assert_eq!(percentage_label(Decimal::ZERO), "0%");
        assert_eq!(percentage_label(Decimal::new(0, 1)), "0%");
        assert_eq!(percentage_label(Decimal::new(875, 1)), "87.5%");
    }

    #[test]
    fn test_summary_row_serializes_decimals_as_strings() {
        let row = AttendanceSummaryRow {
            employee_id: "E1".to_string(),
            employee_name: "Asha Rao".to_string(),
            department: "Engineering".to_string(),
            present_days: 1,
            absent_days: 0,
            leave_days: 0,
            total_working_days: 1,
            attendance_percentage: Decimal::new(100, 0),
            late_arrival_count: 0,
            average_hours_per_present_day: Decimal::new(75, 1),
            overtime_hours_total: Decimal::ZERO,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["attendance_percentage"], "100");
        assert_eq!(json["average_hours_per_present_day"], "7.5");
        assert_eq!(json["present_days"], 1);
    }
}
