//! Reporting engine for an HRMS backend.
//!
//! Turns raw attendance punches, approved leave and an employee roster into
//! per-employee attendance summaries with department and daily-trend
//! rollups, totals filtered expense records, and renders any resulting table
//! as CSV or XLSX. The [`api`] module serves all three over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
