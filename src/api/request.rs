//! Request types for the reports API.
//!
//! These types are the normalization boundary between loosely shaped
//! upstream JSON and the canonical models. They accept the alternate field
//! names the HRMS backend emits (`_id`, `id`, camelCase) and free-form status
//! spellings, and convert into the models with explicit validation. Nothing
//! past this module sees the raw shapes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::AttendanceQuery;
use crate::error::{ReportError, ReportResult};
use crate::export::{ExportFormat, ExportPreset, FieldMap, Record};
use crate::models::{
    ApprovedLeave, AttendancePunch, AttendanceStatus, EmployeeRosterEntry, Expense,
    ExpenseFilter, ExpenseStatus, ExpenseType, LeaveStatus,
};

/// Request body for `POST /reports/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReportRequest {
    /// First day of the report (inclusive).
    #[serde(alias = "fromDate", alias = "startDate", deserialize_with = "deserialize_date")]
    pub from: NaiveDate,
    /// Last day of the report (inclusive).
    #[serde(alias = "toDate", alias = "endDate", deserialize_with = "deserialize_date")]
    pub to: NaiveDate,
    /// Optional department filter.
    #[serde(default)]
    pub department: Option<String>,
    /// Raw attendance records.
    #[serde(default, alias = "attendance")]
    pub punches: Vec<PunchRequest>,
    /// Leave requests; only approved ones count.
    #[serde(default, alias = "approvedLeaves", alias = "approved_leaves")]
    pub leaves: Vec<LeaveRequest>,
    /// Employee roster.
    #[serde(default, alias = "employees")]
    pub roster: Vec<RosterRequest>,
}

/// An attendance report request in canonical form.
#[derive(Debug, Clone)]
pub struct NormalizedAttendance {
    /// Range and department filter.
    pub query: AttendanceQuery,
    /// Attendance records.
    pub punches: Vec<AttendancePunch>,
    /// Leave records.
    pub leaves: Vec<ApprovedLeave>,
    /// Roster entries.
    pub roster: Vec<EmployeeRosterEntry>,
}

impl AttendanceReportRequest {
    /// Converts every record into its canonical model.
    ///
    /// Fails with [`ReportError::InvalidRecord`] naming the first record that
    /// cannot be normalized.
    pub fn normalize(self) -> ReportResult<NormalizedAttendance> {
        let department = self
            .department
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty() && !d.eq_ignore_ascii_case("all"));

        let punches = self
            .punches
            .into_iter()
            .enumerate()
            .map(|(idx, p)| p.into_punch(idx))
            .collect::<ReportResult<Vec<_>>>()?;
        let leaves = self
            .leaves
            .into_iter()
            .enumerate()
            .map(|(idx, l)| l.into_leave(idx))
            .collect::<ReportResult<Vec<_>>>()?;
        let roster = self
            .roster
            .into_iter()
            .enumerate()
            .map(|(idx, r)| r.into_entry(idx))
            .collect::<ReportResult<Vec<_>>>()?;

        Ok(NormalizedAttendance {
            query: AttendanceQuery {
                from: self.from,
                to: self.to,
                department,
            },
            punches,
            leaves,
            roster,
        })
    }
}

/// An attendance record as sent by the HRMS backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// Employee identifier.
    #[serde(alias = "employeeId")]
    pub employee_id: String,
    /// Employee name.
    #[serde(default, alias = "employeeName")]
    pub employee_name: String,
    /// Department.
    #[serde(default)]
    pub department: String,
    /// Day of the record, as a date or an RFC 3339 timestamp.
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Check-in time as `HH:MM` or `HH:MM:SS`.
    #[serde(default, alias = "checkIn")]
    pub check_in: Option<String>,
    /// Check-out time as `HH:MM` or `HH:MM:SS`.
    #[serde(default, alias = "checkOut")]
    pub check_out: Option<String>,
    /// Hours worked.
    #[serde(default, alias = "hoursWorked")]
    pub hours_worked: Option<Decimal>,
    /// Status in any common spelling, e.g. `"Half-Day"`.
    pub status: String,
    /// Overtime hours.
    #[serde(default, alias = "overtimeHours")]
    pub overtime_hours: Option<Decimal>,
    /// Minutes late at check-in.
    #[serde(default, alias = "lateByMinutes")]
    pub late_by_minutes: Option<u32>,
}

impl PunchRequest {
    fn into_punch(self, idx: usize) -> ReportResult<AttendancePunch> {
        let record = format!("punches[{}]", idx);
        let employee_id = require_id(&record, self.employee_id)?;
        let status = parse_attendance_status(&self.status).ok_or_else(|| invalid(
            &record,
            format!("unknown attendance status '{}'", self.status),
        ))?;

        Ok(AttendancePunch {
            employee_name: non_empty_or(self.employee_name, &employee_id),
            employee_id,
            department: self.department.trim().to_string(),
            date: self.date,
            check_in: parse_time(&record, self.check_in.as_deref())?,
            check_out: parse_time(&record, self.check_out.as_deref())?,
            hours_worked: self.hours_worked.unwrap_or(Decimal::ZERO),
            status,
            overtime_hours: self.overtime_hours.unwrap_or(Decimal::ZERO),
            late_by_minutes: self.late_by_minutes,
        })
    }
}

/// A leave request as sent by the HRMS backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Employee identifier.
    #[serde(alias = "employeeId")]
    pub employee_id: String,
    /// First day of leave.
    #[serde(
        alias = "fromDate",
        alias = "startDate",
        alias = "start_date",
        deserialize_with = "deserialize_date"
    )]
    pub from_date: NaiveDate,
    /// Last day of leave.
    #[serde(
        alias = "toDate",
        alias = "endDate",
        alias = "end_date",
        deserialize_with = "deserialize_date"
    )]
    pub to_date: NaiveDate,
    /// Recorded number of days; defaults to the calendar length of the span.
    #[serde(default, alias = "totalDays")]
    pub total_days: Option<u32>,
    /// Status in any capitalization.
    pub status: String,
}

impl LeaveRequest {
    fn into_leave(self, idx: usize) -> ReportResult<ApprovedLeave> {
        let record = format!("leaves[{}]", idx);
        let employee_id = require_id(&record, self.employee_id)?;
        if self.from_date > self.to_date {
            return Err(invalid(
                &record,
                format!("leave starts {} after it ends {}", self.from_date, self.to_date),
            ));
        }
        let status = parse_leave_status(&self.status).ok_or_else(|| {
            invalid(&record, format!("unknown leave status '{}'", self.status))
        })?;
        let span_days = (self.to_date - self.from_date).num_days() as u32 + 1;

        Ok(ApprovedLeave {
            employee_id,
            from_date: self.from_date,
            to_date: self.to_date,
            total_days: self.total_days.unwrap_or(span_days),
            status,
        })
    }
}

/// A roster entry as sent by the HRMS backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    /// Employee identifier.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Employee identifier under its camelCase key.
    #[serde(default, rename = "employeeId")]
    pub employee_id_camel: Option<String>,
    /// Document id from the employee store.
    #[serde(default, rename = "_id")]
    pub document_id: Option<String>,
    /// Plain `id` key.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, alias = "employeeName", alias = "employee_name")]
    pub name: String,
    /// Department.
    #[serde(default)]
    pub department: String,
}

impl RosterRequest {
    fn into_entry(self, idx: usize) -> ReportResult<EmployeeRosterEntry> {
        let record = format!("roster[{}]", idx);
        // Punches reference the employee id, so it wins over store ids.
        let employee_id = pick_id(
            &record,
            [
                self.employee_id,
                self.employee_id_camel,
                self.document_id,
                self.id,
            ],
        )?;
        Ok(EmployeeRosterEntry {
            name: non_empty_or(self.name, &employee_id),
            employee_id,
            department: self.department.trim().to_string(),
        })
    }
}

/// Request body for `POST /reports/expenses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseReportRequest {
    /// Filters applied before summing.
    #[serde(default)]
    pub filter: ExpenseFilter,
    /// Expense records.
    #[serde(default)]
    pub expenses: Vec<ExpenseRequest>,
}

impl ExpenseReportRequest {
    /// Converts every expense into its canonical model.
    pub fn normalize(self) -> ReportResult<(ExpenseFilter, Vec<Expense>)> {
        let expenses = self
            .expenses
            .into_iter()
            .enumerate()
            .map(|(idx, e)| e.into_expense(idx))
            .collect::<ReportResult<Vec<_>>>()?;
        Ok((self.filter, expenses))
    }
}

/// An expense as sent by the HRMS backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRequest {
    /// Expense identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Expense identifier under its snake_case key.
    #[serde(default)]
    pub expense_id: Option<String>,
    /// Expense identifier under its camelCase key.
    #[serde(default, rename = "expenseId")]
    pub expense_id_camel: Option<String>,
    /// Document id from the expense store.
    #[serde(default, rename = "_id")]
    pub document_id: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Vendor.
    #[serde(default)]
    pub vendor: String,
    /// Category.
    #[serde(default)]
    pub category: String,
    /// Site.
    #[serde(default)]
    pub site: String,
    /// Type in any capitalization.
    #[serde(alias = "expenseType", alias = "type")]
    pub expense_type: String,
    /// Amount.
    pub amount: Decimal,
    /// Date incurred, as a date or an RFC 3339 timestamp.
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Status in any capitalization.
    pub status: String,
}

impl ExpenseRequest {
    fn into_expense(self, idx: usize) -> ReportResult<Expense> {
        let record = format!("expenses[{}]", idx);
        let id = pick_id(
            &record,
            [
                self.id,
                self.expense_id,
                self.expense_id_camel,
                self.document_id,
            ],
        )?;
        let expense_type = parse_expense_type(&self.expense_type).ok_or_else(|| {
            invalid(&record, format!("unknown expense type '{}'", self.expense_type))
        })?;
        let status = parse_expense_status(&self.status).ok_or_else(|| {
            invalid(&record, format!("unknown expense status '{}'", self.status))
        })?;

        Ok(Expense {
            id,
            description: self.description,
            vendor: self.vendor,
            category: non_empty_or(self.category, "Uncategorized"),
            site: self.site,
            expense_type,
            amount: self.amount,
            date: self.date,
            status,
        })
    }
}

/// Request body for `POST /export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Flat records to export.
    #[serde(default)]
    pub records: Vec<Record>,
    /// Explicit columns; ignored when `preset` is set.
    #[serde(default)]
    pub fields: FieldMap,
    /// A built-in column set.
    #[serde(default)]
    pub preset: Option<ExportPreset>,
    /// Output format.
    pub format: ExportFormat,
}

impl ExportRequest {
    /// The columns to export.
    pub fn field_map(&self) -> FieldMap {
        match self.preset {
            Some(preset) => preset.field_map(),
            None => self.fields.clone(),
        }
    }
}

fn invalid(record: &str, message: impl Into<String>) -> ReportError {
    ReportError::InvalidRecord {
        record: record.to_string(),
        message: message.into(),
    }
}

fn require_id(record: &str, id: String) -> ReportResult<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(invalid(record, "missing identifier"));
    }
    Ok(id.to_string())
}

/// Returns the first non-blank id among `candidates`.
fn pick_id<const N: usize>(record: &str, candidates: [Option<String>; N]) -> ReportResult<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|id| id.trim().to_string())
        .find(|id| !id.is_empty())
        .ok_or_else(|| invalid(record, "missing identifier"))
}

/// Parses `YYYY-MM-DD`, or the date part of an ISO 8601 timestamp.
///
/// Offset timestamps keep the calendar date they carry, so
/// `2024-01-02T00:00:00.000Z` is 2024-01-02.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw)))
}

fn non_empty_or(value: String, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Lowercases and folds `-` and spaces to `_`.
fn status_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

/// Parses an attendance status in any common spelling.
pub fn parse_attendance_status(raw: &str) -> Option<AttendanceStatus> {
    match status_key(raw).as_str() {
        "present" => Some(AttendanceStatus::Present),
        "absent" => Some(AttendanceStatus::Absent),
        "late" => Some(AttendanceStatus::Late),
        "half_day" | "halfday" => Some(AttendanceStatus::HalfDay),
        "leave" | "on_leave" => Some(AttendanceStatus::Leave),
        "weekend" => Some(AttendanceStatus::Weekend),
        "holiday" => Some(AttendanceStatus::Holiday),
        _ => None,
    }
}

/// Parses a leave status in any capitalization.
pub fn parse_leave_status(raw: &str) -> Option<LeaveStatus> {
    match status_key(raw).as_str() {
        "pending" => Some(LeaveStatus::Pending),
        "approved" => Some(LeaveStatus::Approved),
        "rejected" => Some(LeaveStatus::Rejected),
        "cancelled" | "canceled" => Some(LeaveStatus::Cancelled),
        _ => None,
    }
}

fn parse_expense_type(raw: &str) -> Option<ExpenseType> {
    match status_key(raw).as_str() {
        "operational" => Some(ExpenseType::Operational),
        "office" => Some(ExpenseType::Office),
        "other" => Some(ExpenseType::Other),
        _ => None,
    }
}

fn parse_expense_status(raw: &str) -> Option<ExpenseStatus> {
    match status_key(raw).as_str() {
        "pending" => Some(ExpenseStatus::Pending),
        "approved" => Some(ExpenseStatus::Approved),
        "rejected" => Some(ExpenseStatus::Rejected),
        "paid" => Some(ExpenseStatus::Paid),
        _ => None,
    }
}

fn parse_time(record: &str, raw: Option<&str>) -> ReportResult<Option<NaiveTime>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(Some)
        .map_err(|_| invalid(record, format!("invalid time '{}'", raw)))
}
