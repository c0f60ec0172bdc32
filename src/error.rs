//! Error types for the reports engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building reports.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the reports engine.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hrms_reports::error::ReportError;
///
/// let error = ReportError::InvalidRange {
///     from: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
///     to: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: 2024-02-01 is after 2024-01-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report range starts after it ends.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidRange {
        /// The requested start date.
        from: NaiveDate,
        /// The requested end date.
        to: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input record could not be normalized into its canonical shape.
    #[error("Invalid record '{record}': {message}")]
    InvalidRecord {
        /// Identifier of the offending record (or its position).
        record: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// Serializing records for export failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        ReportError::ExportError {
            message: error.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::ExportError {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
