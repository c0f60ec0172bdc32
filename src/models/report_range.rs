//! Report date range.
//!
//! This module contains the [`ReportRange`] type, the closed date interval
//! every report is computed over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// A closed interval of calendar dates `[from, to]`.
///
/// A range can only be built with `from <= to`, so every function taking a
/// `ReportRange` can rely on it being well formed.
///
/// # Example
///
/// ```
/// use hrms_reports::models::ReportRange;
/// use chrono::NaiveDate;
///
/// let range = ReportRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
/// )
/// .unwrap();
///
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()));
/// assert_eq!(range.days().count(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct ReportRange {
    from: NaiveDate,
    to: NaiveDate,
}

#[derive(Deserialize)]
struct RawRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl TryFrom<RawRange> for ReportRange {
    type Error = ReportError;

    fn try_from(raw: RawRange) -> ReportResult<Self> {
        ReportRange::new(raw.from, raw.to)
    }
}

impl ReportRange {
    /// Creates a range, failing with [`ReportError::InvalidRange`] when
    /// `from` is after `to`.
    ///
    /// # Example
    ///
    /// ```
    /// use hrms_reports::error::ReportError;
    /// use hrms_reports::models::ReportRange;
    /// use chrono::NaiveDate;
    ///
    /// let result = ReportRange::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    /// );
    /// assert!(matches!(result, Err(ReportError::InvalidRange { .. })));
    /// ```
    pub fn new(from: NaiveDate, to: NaiveDate) -> ReportResult<Self> {
        if from > to {
            return Err(ReportError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// A single-day range.
    pub fn single_day(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    /// The first day of the range.
    pub fn from(&self) -> NaiveDate {
        self.from
    }

    /// The last day of the range.
    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Checks if a date falls within the range (inclusive on both ends).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Iterates every calendar date in the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }
}
