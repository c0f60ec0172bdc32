//! Leave records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ReportRange;

/// Workflow status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting approval.
    Pending,
    /// Approved; the only status that reduces absent days.
    Approved,
    /// Rejected by an approver.
    Rejected,
    /// Withdrawn by the employee.
    Cancelled,
}

/// A leave request as seen by the reports engine.
///
/// Only approved leaves count toward leave-day totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovedLeave {
    /// The employee on leave.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub from_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub to_date: NaiveDate,
    /// Number of leave days as recorded upstream.
    pub total_days: u32,
    /// Workflow status.
    pub status: LeaveStatus,
}

impl ApprovedLeave {
    /// Returns true if the leave has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns the part of the leave span that falls inside `range`.
    ///
    /// Returns `None` when the leave does not touch the range or its own
    /// dates are inverted.
    ///
    /// # Example
    ///
    /// ```
    /// use hrms_reports::models::{ApprovedLeave, LeaveStatus, ReportRange};
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
    /// let leave = ApprovedLeave {
    ///     employee_id: "E1".to_string(),
    ///     from_date: d(29),
    ///     to_date: d(31),
    ///     total_days: 3,
    ///     status: LeaveStatus::Approved,
    /// };
    /// let range = ReportRange::new(d(1), d(30)).unwrap();
    /// let overlap = leave.overlap_with(&range).unwrap();
    /// assert_eq!(overlap.to(), d(30));
    /// ```
    pub fn overlap_with(&self, range: &ReportRange) -> Option<ReportRange> {
        let start = self.from_date.max(range.from());
        let end = self.to_date.min(range.to());
        ReportRange::new(start, end).ok()
    }
}
