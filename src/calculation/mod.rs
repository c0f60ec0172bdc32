//! Calculation logic for the reports engine.
//!
//! This module contains working-day counting, approved-leave totals, the
//! attendance aggregator with its department rollup and daily trend, and the
//! expense aggregator. Every function here is pure and synchronous.

mod attendance;
mod daily_trend;
mod department_rollup;
mod expense;
mod leave_days;
mod rounding;
mod working_days;

pub use attendance::{AttendanceAggregator, AttendanceQuery};
pub use daily_trend::build_daily_trend;
pub use department_rollup::build_department_rollup;
pub use expense::summarize_expenses;
pub use leave_days::total_leave_days;
pub use rounding::{mean, percentage, round_half_up};
pub use working_days::{DayType, count_working_days, get_day_type};
