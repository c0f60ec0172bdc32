//! Core data models for the reports engine.
//!
//! This module contains the canonical record shapes the aggregators consume
//! and the derived report types they produce.

mod attendance;
mod employee;
mod expense;
mod leave;
mod report;
mod report_range;

pub use attendance::{AttendancePunch, AttendanceStatus};
pub use employee::EmployeeRosterEntry;
pub use expense::{
    CategoryTotal, Expense, ExpenseFilter, ExpenseStatus, ExpenseSummary, ExpenseType,
    MonthTotal, TypeTotal,
};
pub use leave::{ApprovedLeave, LeaveStatus};
pub use report::{
    AttendanceReport, AttendanceSummaryRow, DailyTrendPoint, DepartmentRollup, ReportTotals,
    percentage_label,
};
pub use report_range::ReportRange;
