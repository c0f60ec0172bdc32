//! HTTP API for attendance and expense reports and table exports.
//!
//! Endpoints:
//! - `POST /reports/attendance`: attendance summary for a date range
//! - `POST /reports/expenses`: filtered expense totals
//! - `POST /export`: CSV or XLSX rendering of flat records

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    parse_attendance_status, parse_leave_status, AttendanceReportRequest, ExpenseReportRequest,
    ExpenseRequest, ExportRequest, LeaveRequest, NormalizedAttendance, PunchRequest,
    RosterRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
