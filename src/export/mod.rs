//! Export serialization for report tables.
//!
//! Any list of flat records (summary rows, raw punches, expenses) can be
//! written as CSV text or as a single-sheet XLSX workbook. A [`FieldMap`]
//! selects the exported keys, their order and their column headers.
//!
//! # Example
//!
//! ```
//! use hrms_reports::export::{ExportFormat, ExportOutput, FieldMap, serialize, to_records};
//! use hrms_reports::models::EmployeeRosterEntry;
//!
//! let roster = vec![EmployeeRosterEntry::new("E1", "Asha Rao", "Engineering")];
//! let records = to_records(&roster).unwrap();
//! let fields = FieldMap::new().with("employee_id", "ID").with("name", "Name");
//!
//! match serialize(&records, &fields, ExportFormat::Csv).unwrap() {
//!     ExportOutput::Csv(text) => assert_eq!(text, "ID,Name\nE1,Asha Rao\n"),
//!     other => panic!("unexpected output: {:?}", other),
//! }
//! ```

mod delimited;
mod field_map;
mod workbook;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ReportError, ReportResult};

pub use delimited::write_csv;
pub use field_map::{ExportPreset, FieldMap, FieldMapping, stringify};
pub use workbook::{SHEET_NAME, write_xlsx};

/// A flat record: column key to value.
pub type Record = serde_json::Map<String, Value>;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated text.
    Csv,
    /// Excel workbook.
    Xlsx,
}

impl ExportFormat {
    /// MIME type of the output.
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// The result of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    /// There were no records to export. Callers decide how to surface this.
    NoData,
    /// CSV text.
    Csv(String),
    /// XLSX workbook bytes.
    Xlsx(Vec<u8>),
}

impl ExportOutput {
    /// Returns true when there was nothing to export.
    pub fn is_empty(&self) -> bool {
        matches!(self, ExportOutput::NoData)
    }
}

/// Converts serializable rows into flat records.
///
/// Fails with [`ReportError::ExportError`] when a row does not serialize to
/// a JSON object.
pub fn to_records<T: Serialize>(rows: &[T]) -> ReportResult<Vec<Record>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            match serde_json::to_value(row).map_err(|e| ReportError::ExportError {
                message: format!("row {}: {}", idx, e),
            })? {
                Value::Object(map) => Ok(map),
                other => Err(ReportError::ExportError {
                    message: format!("row {} is not a flat record: {}", idx, other),
                }),
            }
        })
        .collect()
}

/// Serializes records in the requested format.
///
/// Returns [`ExportOutput::NoData`] for an empty record list. An empty field
/// map exports every key of the first record, in key order.
pub fn serialize(
    records: &[Record],
    fields: &FieldMap,
    format: ExportFormat,
) -> ReportResult<ExportOutput> {
    let Some(first) = records.first() else {
        return Ok(ExportOutput::NoData);
    };

    let inferred;
    let fields = if fields.is_empty() {
        inferred = FieldMap::from_record(first);
        &inferred
    } else {
        fields
    };

    match format {
        ExportFormat::Csv => write_csv(records, fields).map(ExportOutput::Csv),
        ExportFormat::Xlsx => write_xlsx(records, fields).map(ExportOutput::Xlsx),
    }
}
