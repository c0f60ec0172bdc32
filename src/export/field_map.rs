//! Field maps: which record keys are exported, in what order, under which
//! column headers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Record;

/// One exported column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Key looked up in each record.
    pub key: String,
    /// Column header written to the output.
    pub header: String,
    /// Write numeric-looking text as a number in workbooks.
    #[serde(default)]
    pub numeric: bool,
}

/// An ordered list of exported columns.
///
/// # Example
///
/// ```
/// use hrms_reports::export::FieldMap;
///
/// let fields = FieldMap::new()
///     .with("employee_id", "Employee ID")
///     .with_numeric("attendance_percentage", "Attendance %");
/// assert_eq!(fields.headers(), vec!["Employee ID", "Attendance %"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    fields: Vec<FieldMapping>,
}

impl FieldMap {
    /// Creates an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text column.
    pub fn with(mut self, key: impl Into<String>, header: impl Into<String>) -> Self {
        self.fields.push(FieldMapping {
            key: key.into(),
            header: header.into(),
            numeric: false,
        });
        self
    }

    /// Appends a numeric column.
    pub fn with_numeric(mut self, key: impl Into<String>, header: impl Into<String>) -> Self {
        self.fields.push(FieldMapping {
            key: key.into(),
            header: header.into(),
            numeric: true,
        });
        self
    }

    /// Uses every key of `record` as its own header, in key order.
    pub fn from_record(record: &Record) -> Self {
        record.iter().fold(Self::new(), |map, (key, value)| {
            if value.is_number() {
                map.with_numeric(key.clone(), key.clone())
            } else {
                map.with(key.clone(), key.clone())
            }
        })
    }

    /// Columns in output order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldMapping> {
        self.fields.iter()
    }

    /// Column headers in output order.
    pub fn headers(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.header.as_str()).collect()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Columns for [`AttendanceSummaryRow`](crate::models::AttendanceSummaryRow) records.
    pub fn attendance_summary() -> Self {
        Self::new()
            .with("employee_id", "Employee ID")
            .with("employee_name", "Employee Name")
            .with("department", "Department")
            .with_numeric("present_days", "Present Days")
            .with_numeric("absent_days", "Absent Days")
            .with_numeric("leave_days", "Leave Days")
            .with_numeric("total_working_days", "Working Days")
            .with_numeric("attendance_percentage", "Attendance %")
            .with_numeric("late_arrival_count", "Late Arrivals")
            .with_numeric("average_hours_per_present_day", "Avg Hours / Day")
            .with_numeric("overtime_hours_total", "Overtime Hours")
    }

    /// Columns for raw [`AttendancePunch`](crate::models::AttendancePunch) records.
    pub fn attendance_punches() -> Self {
        Self::new()
            .with("employee_id", "Employee ID")
            .with("employee_name", "Employee Name")
            .with("department", "Department")
            .with("date", "Date")
            .with("check_in", "Check In")
            .with("check_out", "Check Out")
            .with_numeric("hours_worked", "Hours Worked")
            .with("status", "Status")
            .with_numeric("overtime_hours", "Overtime Hours")
            .with_numeric("late_by_minutes", "Late By (min)")
    }

    /// Columns for [`Expense`](crate::models::Expense) records.
    pub fn expenses() -> Self {
        Self::new()
            .with("id", "Expense ID")
            .with("date", "Date")
            .with("description", "Description")
            .with("vendor", "Vendor")
            .with("category", "Category")
            .with("site", "Site")
            .with("expense_type", "Type")
            .with_numeric("amount", "Amount")
            .with("status", "Status")
    }
}

/// Built-in field maps selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportPreset {
    /// [`FieldMap::attendance_summary`].
    AttendanceSummary,
    /// [`FieldMap::attendance_punches`].
    AttendancePunches,
    /// [`FieldMap::expenses`].
    Expenses,
}

impl ExportPreset {
    /// The field map for this preset.
    pub fn field_map(self) -> FieldMap {
        match self {
            ExportPreset::AttendanceSummary => FieldMap::attendance_summary(),
            ExportPreset::AttendancePunches => FieldMap::attendance_punches(),
            ExportPreset::Expenses => FieldMap::expenses(),
        }
    }
}

/// Renders a record value as cell text.
///
/// Strings are written verbatim, numbers and booleans via display, missing
/// and null values as empty text, and nested values as JSON.
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(nested) => nested.to_string(),
    }
}
