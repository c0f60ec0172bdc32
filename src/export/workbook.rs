//! XLSX workbook output.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, FormatBorder, Workbook};
use serde_json::Value;

use crate::error::ReportResult;

use super::Record;
use super::field_map::{FieldMap, stringify};

/// Name of the single worksheet in exported workbooks.
pub const SHEET_NAME: &str = "Report";

/// Writes records to an in-memory XLSX workbook with a single sheet.
///
/// Row 1 holds the mapped headers in bold and is frozen. JSON numbers and
/// booleans keep their cell type; text in a numeric column is written as a
/// number when it parses as one. Everything else is written as text.
pub fn write_xlsx(records: &[Record], fields: &FieldMap) -> ReportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);

    for (col, field) in fields.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, &field.header, &header_format)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;

        for (col, field) in fields.iter().enumerate() {
            let col = col as u16;
            let value = record.get(&field.key);

            match value {
                Some(Value::Number(n)) => match n.as_f64() {
                    Some(number) => {
                        worksheet.write_number(row, col, number)?;
                    }
                    None => {
                        worksheet.write_string(row, col, n.to_string())?;
                    }
                },
                Some(Value::Bool(b)) => {
                    worksheet.write_boolean(row, col, *b)?;
                }
                _ => {
                    let text = stringify(value);
                    if text.is_empty() {
                        continue;
                    }
                    match numeric_text(field.numeric, &text) {
                        Some(number) => worksheet.write_number(row, col, number)?,
                        None => worksheet.write_string(row, col, text)?,
                    };
                }
            }
        }
    }

    worksheet.set_freeze_panes(1, 0)?;

    Ok(workbook.save_to_buffer()?)
}

/// Parses text in a numeric column. Decimal strings are how amounts and
/// hours arrive from serialized models.
fn numeric_text(numeric: bool, text: &str) -> Option<f64> {
    if !numeric {
        return None;
    }
    Decimal::from_str(text.trim()).ok()?.to_f64()
}
