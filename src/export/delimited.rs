//! CSV output.

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{ReportError, ReportResult};

use super::Record;
use super::field_map::{FieldMap, stringify};

/// Writes records as CSV text.
///
/// The first line holds the mapped headers. Fields containing a comma, a
/// quote or a line break are quoted, with inner quotes doubled.
///
/// # Example
///
/// ```
/// use hrms_reports::export::{FieldMap, write_csv};
/// use serde_json::json;
///
/// let record = json!({"name": "Rao, Asha", "note": "says \"hi\""});
/// let fields = FieldMap::new().with("name", "Name").with("note", "Note");
///
/// let text = write_csv(&[record.as_object().unwrap().clone()], &fields).unwrap();
/// assert_eq!(text, "Name,Note\n\"Rao, Asha\",\"says \"\"hi\"\"\"\n");
/// ```
pub fn write_csv(records: &[Record], fields: &FieldMap) -> ReportResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(fields.headers())?;
    for record in records {
        writer.write_record(fields.iter().map(|f| stringify(record.get(&f.key))))?;
    }

    let bytes = writer.into_inner().map_err(|e| ReportError::ExportError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| ReportError::ExportError {
        message: e.to_string(),
    })
}
