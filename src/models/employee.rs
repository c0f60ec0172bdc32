//! Employee roster model.
//!
//! The roster is the authoritative list of employees expected to have
//! attendance, independent of whether any punches exist for them.

use serde::{Deserialize, Serialize};

/// An employee expected to appear in attendance reports.
///
/// # Example
///
/// ```
/// use hrms_reports::models::EmployeeRosterEntry;
///
/// let entry = EmployeeRosterEntry::new("E1", "Asha Rao", "Engineering");
/// assert!(entry.in_department("engineering"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRosterEntry {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub name: String,
    /// Department the employee belongs to.
    pub department: String,
}

impl EmployeeRosterEntry {
    /// Creates a roster entry.
    pub fn new(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            department: department.into(),
        }
    }

    /// Returns true if the employee belongs to `department` (case-insensitive).
    pub fn in_department(&self, department: &str) -> bool {
        self.department.eq_ignore_ascii_case(department)
    }
}
