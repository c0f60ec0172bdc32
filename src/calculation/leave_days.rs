//! Approved leave totals per employee.

use std::collections::HashMap;

use crate::config::LeavePolicy;
use crate::models::{ApprovedLeave, ReportRange};

use super::working_days::count_working_days;

/// Sums approved leave days per employee for a report range.
///
/// Leaves that are not approved are ignored. Under
/// [`LeavePolicy::ClipToRange`] each leave contributes the working days of
/// its span that fall inside `range`, capped at its recorded `total_days`.
/// Under [`LeavePolicy::FullSpan`] each leave contributes its recorded
/// `total_days` unchanged.
///
/// # Example
///
/// ```
/// use hrms_reports::calculation::total_leave_days;
/// use hrms_reports::config::LeavePolicy;
/// use hrms_reports::models::{ApprovedLeave, LeaveStatus, ReportRange};
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
/// // Monday 2024-01-29 through Friday 2024-02-02
/// let leave = ApprovedLeave {
///     employee_id: "E1".to_string(),
///     from_date: d(1, 29),
///     to_date: d(2, 2),
///     total_days: 5,
///     status: LeaveStatus::Approved,
/// };
/// let january = ReportRange::new(d(1, 1), d(1, 31)).unwrap();
///
/// let clipped = total_leave_days(&[leave.clone()], &january, LeavePolicy::ClipToRange);
/// assert_eq!(clipped["E1"], 3);
///
/// let full = total_leave_days(&[leave], &january, LeavePolicy::FullSpan);
/// assert_eq!(full["E1"], 5);
/// ```
pub fn total_leave_days(
    leaves: &[ApprovedLeave],
    range: &ReportRange,
    policy: LeavePolicy,
) -> HashMap<String, u32> {
    let mut totals: HashMap<String, u32> = HashMap::new();

    for leave in leaves.iter().filter(|l| l.is_approved()) {
        let days = match policy {
            LeavePolicy::FullSpan => leave.total_days,
            LeavePolicy::ClipToRange => match leave.overlap_with(range) {
                Some(overlap) => count_working_days(&overlap).min(leave.total_days),
                None => continue,
            },
        };

        let entry = totals.entry(leave.employee_id.clone()).or_insert(0);
        *entry = entry.saturating_add(days);
    }

    totals
}
