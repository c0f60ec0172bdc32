//! Attendance aggregation.
//!
//! This module turns raw punches, approved leaves and the employee roster
//! into one [`AttendanceSummaryRow`] per employee, plus the department and
//! daily-trend chart aggregates built from the same data.
//!
//! Aggregation is a pure function of its inputs: no I/O and no shared state,
//! so independent reports can be computed concurrently.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::models::{
    ApprovedLeave, AttendancePunch, AttendanceReport, AttendanceStatus, AttendanceSummaryRow,
    EmployeeRosterEntry, ReportRange, ReportTotals,
};

use super::daily_trend::build_daily_trend;
use super::department_rollup::build_department_rollup;
use super::leave_days::total_leave_days;
use super::rounding::{mean, percentage, round_half_up};
use super::working_days::count_working_days;

/// The parameters of one attendance report request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceQuery {
    /// First day of the report (inclusive).
    pub from: NaiveDate,
    /// Last day of the report (inclusive).
    pub to: NaiveDate,
    /// Restricts the returned rows to one department (case-insensitive).
    #[serde(default)]
    pub department: Option<String>,
}

impl AttendanceQuery {
    /// Creates a query without a department filter.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            department: None,
        }
    }

    /// Restricts the query to a department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}

/// Running totals for one employee's punches.
#[derive(Debug)]
struct PunchTally<'a> {
    employee_id: &'a str,
    employee_name: &'a str,
    department: &'a str,
    present: u32,
    late: u32,
    total_hours: Decimal,
    overtime_hours: Decimal,
}

impl<'a> PunchTally<'a> {
    fn new(punch: &'a AttendancePunch) -> Self {
        Self {
            employee_id: &punch.employee_id,
            employee_name: &punch.employee_name,
            department: &punch.department,
            present: 0,
            late: 0,
            total_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
        }
    }

    fn record(&mut self, punch: &AttendancePunch) {
        if punch.status.counts_as_present() {
            self.present += 1;
        }
        if punch.status == AttendanceStatus::Late {
            self.late += 1;
        }
        self.total_hours += punch.hours_worked;
        self.overtime_hours += punch.overtime_hours;
    }
}

/// Builds attendance reports.
///
/// # Example
///
/// ```
/// use hrms_reports::calculation::{AttendanceAggregator, AttendanceQuery};
/// use hrms_reports::config::ReportConfig;
/// use hrms_reports::models::EmployeeRosterEntry;
/// use chrono::NaiveDate;
///
/// let config = ReportConfig::default();
/// let aggregator = AttendanceAggregator::new(&config);
/// let query = AttendanceQuery::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
/// );
/// let roster = vec![EmployeeRosterEntry::new("E1", "Asha Rao", "Engineering")];
///
/// let report = aggregator.aggregate(&query, &[], &[], &roster).unwrap();
/// let row = report.row("E1").unwrap();
/// assert_eq!(row.absent_days, 5);
/// assert_eq!(row.attendance_percentage_label(), "0%");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AttendanceAggregator<'a> {
    config: &'a ReportConfig,
}

impl<'a> AttendanceAggregator<'a> {
    /// Creates an aggregator using the given report options.
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Aggregates attendance for the query's range.
    ///
    /// # Returns
    ///
    /// An [`AttendanceReport`] with one row per employee seen in `punches`
    /// (first-seen order) followed by every roster employee without punches
    /// (roster order). Fails only with
    /// [`ReportError::InvalidRange`](crate::error::ReportError::InvalidRange)
    /// when `from` is after `to`.
    ///
    /// # Behavior
    ///
    /// - Punches dated outside the range are ignored
    /// - Present, late and half-day punches count as present; late punches
    ///   also count as late arrivals
    /// - Hours and overtime accumulate regardless of status
    /// - Present days are capped at the working-day count and leave days at
    ///   the working days left, so present + absent + leave always equals
    ///   the working-day count
    /// - The department rollup is built before the department filter so
    ///   chart values stay comparable across filters
    pub fn aggregate(
        &self,
        query: &AttendanceQuery,
        punches: &[AttendancePunch],
        leaves: &[ApprovedLeave],
        roster: &[EmployeeRosterEntry],
    ) -> ReportResult<AttendanceReport> {
        let range = ReportRange::new(query.from, query.to)?;
        let total_working_days = count_working_days(&range);
        let leave_days = total_leave_days(leaves, &range, self.config.leave_policy);

        let mut tallies: Vec<PunchTally<'_>> = Vec::new();
        let mut tally_index: HashMap<&str, usize> = HashMap::new();
        for punch in punches.iter().filter(|p| range.contains_date(p.date)) {
            let idx = *tally_index
                .entry(punch.employee_id.as_str())
                .or_insert_with(|| {
                    tallies.push(PunchTally::new(punch));
                    tallies.len() - 1
                });
            tallies[idx].record(punch);
        }

        let mut roster_by_id: HashMap<&str, &EmployeeRosterEntry> = HashMap::new();
        for entry in roster {
            roster_by_id.entry(entry.employee_id.as_str()).or_insert(entry);
        }

        let mut rows = Vec::with_capacity(tallies.len() + roster.len());
        for tally in &tallies {
            // The roster is authoritative for names and departments.
            let (name, department) = match roster_by_id.get(tally.employee_id) {
                Some(entry) => (entry.name.as_str(), entry.department.as_str()),
                None => (tally.employee_name, tally.department),
            };
            let leave = leave_days.get(tally.employee_id).copied().unwrap_or(0);
            rows.push(self.build_row(
                tally.employee_id,
                name,
                department,
                Some(tally),
                leave,
                total_working_days,
            ));
        }

        let mut emitted: HashSet<&str> = tally_index.keys().copied().collect();
        for entry in roster {
            if !emitted.insert(entry.employee_id.as_str()) {
                continue;
            }
            let leave = leave_days.get(&entry.employee_id).copied().unwrap_or(0);
            rows.push(self.build_row(
                &entry.employee_id,
                &entry.name,
                &entry.department,
                None,
                leave,
                total_working_days,
            ));
        }

        let department_rollup = build_department_rollup(&rows, self.config.hours_precision);
        let daily_trend = build_daily_trend(punches, &range, self.config.trend_window_days);

        if let Some(department) = query.department.as_deref() {
            rows.retain(|r| r.department.eq_ignore_ascii_case(department));
        }
        let totals = self.build_totals(&rows);

        Ok(AttendanceReport {
            range,
            total_working_days,
            rows,
            department_rollup,
            daily_trend,
            totals,
        })
    }

    fn build_row(
        &self,
        employee_id: &str,
        employee_name: &str,
        department: &str,
        tally: Option<&PunchTally<'_>>,
        leave: u32,
        total_working_days: u32,
    ) -> AttendanceSummaryRow {
        let raw_present = tally.map_or(0, |t| t.present);
        let present_days = raw_present.min(total_working_days);
        let leave_days = leave.min(total_working_days - present_days);
        let absent_days = total_working_days - present_days - leave_days;

        let total_hours = tally.map_or(Decimal::ZERO, |t| t.total_hours);
        let overtime = tally.map_or(Decimal::ZERO, |t| t.overtime_hours);

        AttendanceSummaryRow {
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            department: department.to_string(),
            present_days,
            absent_days,
            leave_days,
            total_working_days,
            attendance_percentage: percentage(
                present_days,
                total_working_days,
                self.config.percentage_precision,
            ),
            late_arrival_count: tally.map_or(0, |t| t.late),
            average_hours_per_present_day: mean(
                total_hours,
                raw_present,
                self.config.hours_precision,
            ),
            overtime_hours_total: round_half_up(overtime, self.config.hours_precision),
        }
    }

    fn build_totals(&self, rows: &[AttendanceSummaryRow]) -> ReportTotals {
        let mut totals = ReportTotals {
            employee_count: rows.len() as u32,
            present_days: 0,
            absent_days: 0,
            leave_days: 0,
            late_arrivals: 0,
            overall_attendance_percentage: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
        };
        let mut working_days: u32 = 0;

        for row in rows {
            totals.present_days += row.present_days;
            totals.absent_days += row.absent_days;
            totals.leave_days += row.leave_days;
            totals.late_arrivals += row.late_arrival_count;
            totals.overtime_hours += row.overtime_hours_total;
            working_days += row.total_working_days;
        }

        totals.overall_attendance_percentage = percentage(
            totals.present_days,
            working_days,
            self.config.percentage_precision,
        );
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeavePolicy;
    use crate::error::ReportError;
    use crate::models::LeaveStatus;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn punch(employee: &str, department: &str, day: u32, status: AttendanceStatus, hours: &str) -> AttendancePunch {
        AttendancePunch {
            employee_id: employee.to_string(),
            employee_name: format!("Name {}", employee),
            department: department.to_string(),
            date: date(day),
            check_in: None,
            check_out: None,
            hours_worked: dec(hours),
            status,
            overtime_hours: Decimal::ZERO,
            late_by_minutes: None,
        }
    }

    fn approved_leave(employee: &str, from: u32, to: u32, total_days: u32) -> ApprovedLeave {
        ApprovedLeave {
            employee_id: employee.to_string(),
            from_date: date(from),
            to_date: date(to),
            total_days,
            status: LeaveStatus::Approved,
        }
    }

    /// The twenty weekdays of 2024-01-01 through 2024-01-26.
    fn weekdays_of_first_four_weeks() -> Vec<u32> {
        (1..=26)
            .filter(|d| !matches!(d, 6 | 7 | 13 | 14 | 20 | 21))
            .collect()
    }

    fn first_week() -> AttendanceQuery {
        AttendanceQuery::new(date(1), date(7))
    }

    #[test]
    fn test_inverted_range_fails() {
        let config = ReportConfig::default();
        let query = AttendanceQuery::new(date(10), date(1));

        let result = AttendanceAggregator::new(&config).aggregate(&query, &[], &[], &[]);
        assert!(matches!(result, Err(ReportError::InvalidRange { .. })));
    }

    #[test]
    fn test_empty_inputs_give_empty_report() {
        let config = ReportConfig::default();
        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &[], &[], &[])
            .unwrap();

        assert_eq!(report.total_working_days, 5);
        assert!(report.rows.is_empty());
        assert!(report.department_rollup.is_empty());
        assert!(report.daily_trend.is_empty());
        assert_eq!(report.totals.employee_count, 0);
        assert_eq!(report.totals.overall_attendance_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_roster_only_employee_is_fully_absent() {
        let config = ReportConfig::default();
        let roster = vec![EmployeeRosterEntry::new("E1", "Asha", "Ops")];

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &[], &[], &roster)
            .unwrap();

        let row = report.row("E1").unwrap();
        assert_eq!(row.present_days, 0);
        assert_eq!(row.absent_days, 5);
        assert_eq!(row.leave_days, 0);
        assert_eq!(row.attendance_percentage_label(), "0%");
        assert_eq!(row.average_hours_per_present_day, Decimal::ZERO);
    }

    #[test]
    fn test_full_attendance_is_one_hundred_percent() {
        let config = ReportConfig::default();
        let punches: Vec<_> = (1..=5)
            .map(|d| punch("E1", "Ops", d, AttendanceStatus::Present, "8"))
            .collect();

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &punches, &[], &[])
            .unwrap();

        let row = report.row("E1").unwrap();
        assert_eq!(row.present_days, 5);
        assert_eq!(row.absent_days, 0);
        assert_eq!(row.attendance_percentage_label(), "100%");
        assert_eq!(row.average_hours_per_present_day, dec("8"));
    }

    #[test]
    fn test_late_and_half_day_count_as_present() {
        let config = ReportConfig::default();
        let punches = vec![
            punch("E1", "Ops", 1, AttendanceStatus::Present, "8"),
            punch("E1", "Ops", 2, AttendanceStatus::Late, "7.5"),
            punch("E1", "Ops", 3, AttendanceStatus::HalfDay, "4"),
            punch("E1", "Ops", 4, AttendanceStatus::Absent, "0"),
        ];

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &punches, &[], &[])
            .unwrap();

        let row = report.row("E1").unwrap();
        assert_eq!(row.present_days, 3);
        assert_eq!(row.late_arrival_count, 1);
        assert_eq!(row.absent_days, 2);
        assert_eq!(row.attendance_percentage, dec("60"));
        // 19.5 hours over 3 present days
        assert_eq!(row.average_hours_per_present_day, dec("6.5"));
    }

    #[test]
    fn test_overtime_accumulates_regardless_of_status() {
        let config = ReportConfig::default();
        let mut weekend = punch("E1", "Ops", 6, AttendanceStatus::Weekend, "3");
        weekend.overtime_hours = dec("3");
        let mut monday = punch("E1", "Ops", 1, AttendanceStatus::Present, "9.5");
        monday.overtime_hours = dec("1.5");

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &[monday, weekend], &[], &[])
            .unwrap();

        let row = report.row("E1").unwrap();
        assert_eq!(row.overtime_hours_total, dec("4.5"));
        assert_eq!(row.present_days, 1);
        // All hours are averaged over present days only
        assert_eq!(row.average_hours_per_present_day, dec("12.5"));
    }

    #[test]
    fn test_approved_leave_reduces_absent_days() {
        let config = ReportConfig::default();
        let punches = vec![
            punch("E1", "Ops", 1, AttendanceStatus::Present, "8"),
            punch("E1", "Ops", 2, AttendanceStatus::Present, "8"),
        ];
        let leaves = vec![approved_leave("E1", 3, 4, 2)];

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &punches, &leaves, &[])
            .unwrap();

        let row = report.row("E1").unwrap();
        assert_eq!(row.present_days, 2);
        assert_eq!(row.leave_days, 2);
        assert_eq!(row.absent_days, 1);
        assert_eq!(row.attendance_percentage, dec("40"));
    }

    #[test]
    fn test_leave_clamped_so_row_adds_up() {
        let config = ReportConfig {
            leave_policy: LeavePolicy::FullSpan,
            ..ReportConfig::default()
        };
        let punches: Vec<_> = (1..=4)
            .map(|d| punch("E1", "Ops", d, AttendanceStatus::Present, "8"))
            .collect();
        let leaves = vec![approved_leave("E1", 1, 10, 8)];

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &punches, &leaves, &[])
            .unwrap();

        let row = report.row("E1").unwrap();
        assert_eq!(row.present_days, 4);
        assert_eq!(row.leave_days, 1);
        assert_eq!(row.absent_days, 0);
        assert_eq!(
            row.present_days + row.absent_days + row.leave_days,
            row.total_working_days
        );
    }

    #[test]
    fn test_present_capped_at_working_days() {
        let config = ReportConfig::default();
        let punches: Vec<_> = (1..=7)
            .map(|d| punch("E1", "Ops", d, AttendanceStatus::Present, "8"))
            .collect();

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &punches, &[], &[])
            .unwrap();

        let row = report.row("E1").unwrap();
        assert_eq!(row.present_days, 5);
        assert_eq!(row.absent_days, 0);
        assert_eq!(row.attendance_percentage, dec("100"));
        // 56 hours over the 7 days actually worked
        assert_eq!(row.average_hours_per_present_day, dec("8"));
    }

    #[test]
    fn test_weekend_only_range_has_zero_percentage() {
        let config = ReportConfig::default();
        let query = AttendanceQuery::new(date(6), date(6));
        let punches = vec![punch("E1", "Ops", 6, AttendanceStatus::Present, "4")];
        let roster = vec![
            EmployeeRosterEntry::new("E1", "Asha", "Ops"),
            EmployeeRosterEntry::new("E2", "Ravi", "Ops"),
        ];

        let report = AttendanceAggregator::new(&config)
            .aggregate(&query, &punches, &[], &roster)
            .unwrap();

        assert_eq!(report.total_working_days, 0);
        for row in &report.rows {
            assert_eq!(row.attendance_percentage_label(), "0%");
            assert_eq!(row.absent_days, 0);
        }
    }

    #[test]
    fn test_punches_outside_range_are_ignored() {
        let config = ReportConfig::default();
        let punches = vec![
            punch("E1", "Ops", 2, AttendanceStatus::Present, "8"),
            punch("E1", "Ops", 9, AttendanceStatus::Present, "8"),
            punch("E2", "Ops", 10, AttendanceStatus::Present, "8"),
        ];

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &punches, &[], &[])
            .unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.row("E1").unwrap().present_days, 1);
    }

    #[test]
    fn test_row_order_punches_first_then_roster() {
        let config = ReportConfig::default();
        let punches = vec![
            punch("E3", "Ops", 1, AttendanceStatus::Present, "8"),
            punch("E1", "Ops", 1, AttendanceStatus::Present, "8"),
            punch("E3", "Ops", 2, AttendanceStatus::Present, "8"),
        ];
        let roster = vec![
            EmployeeRosterEntry::new("E1", "One", "Ops"),
            EmployeeRosterEntry::new("E2", "Two", "Ops"),
            EmployeeRosterEntry::new("E3", "Three", "Ops"),
            EmployeeRosterEntry::new("E2", "Two again", "Ops"),
        ];

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &punches, &[], &roster)
            .unwrap();

        let ids: Vec<_> = report.rows.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["E3", "E1", "E2"]);
        assert_eq!(report.row("E2").unwrap().employee_name, "Two");
    }

    #[test]
    fn test_roster_names_take_precedence_over_punch_names() {
        let config = ReportConfig::default();
        let punches = vec![punch("E1", "Old Dept", 1, AttendanceStatus::Present, "8")];
        let roster = vec![EmployeeRosterEntry::new("E1", "Asha Rao", "Engineering")];

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &punches, &[], &roster)
            .unwrap();

        let row = report.row("E1").unwrap();
        assert_eq!(row.employee_name, "Asha Rao");
        assert_eq!(row.department, "Engineering");
    }

    #[test]
    fn test_employee_missing_from_roster_uses_punch_details() {
        let config = ReportConfig::default();
        let punches = vec![punch("E9", "Contractors", 1, AttendanceStatus::Present, "8")];

        let report = AttendanceAggregator::new(&config)
            .aggregate(&first_week(), &punches, &[], &[])
            .unwrap();

        let row = report.row("E9").unwrap();
        assert_eq!(row.employee_name, "Name E9");
        assert_eq!(row.department, "Contractors");
    }

    #[test]
    fn test_department_filter_applies_after_rollup() {
        let config = ReportConfig::default();
        let roster = vec![
            EmployeeRosterEntry::new("E1", "One", "Sales"),
            EmployeeRosterEntry::new("E2", "Two", "Admin"),
        ];
        let query = first_week().with_department("sales");

        let report = AttendanceAggregator::new(&config)
            .aggregate(&query, &[], &[], &roster)
            .unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].employee_id, "E1");
        assert_eq!(report.department_rollup.len(), 2);
        assert!(report.rollup("Admin").is_some());
        assert_eq!(report.totals.employee_count, 1);
    }

    #[test]
    fn test_twenty_day_scenario_with_department_rollup() {
        let config = ReportConfig::default();
        let roster = vec![
            EmployeeRosterEntry::new("E1", "One", "Dept A"),
            EmployeeRosterEntry::new("E2", "Two", "Dept A"),
        ];
        let punches: Vec<_> = weekdays_of_first_four_weeks()
            .into_iter()
            .map(|d| punch("E1", "Dept A", d, AttendanceStatus::Present, "8"))
            .collect();
        let query = AttendanceQuery::new(date(1), date(26));

        let report = AttendanceAggregator::new(&config)
            .aggregate(&query, &punches, &[], &roster)
            .unwrap();

        assert_eq!(report.total_working_days, 20);

        let e1 = report.row("E1").unwrap();
        assert_eq!(e1.present_days, 20);
        assert_eq!(e1.absent_days, 0);
        assert_eq!(e1.attendance_percentage_label(), "100%");

        let e2 = report.row("E2").unwrap();
        assert_eq!(e2.present_days, 0);
        assert_eq!(e2.absent_days, 20);
        assert_eq!(e2.attendance_percentage_label(), "0%");

        let rollup = report.rollup("Dept A").unwrap();
        assert_eq!(rollup.average_present, dec("10"));
        assert_eq!(rollup.average_absent, dec("10"));

        assert_eq!(report.totals.present_days, 20);
        assert_eq!(report.totals.absent_days, 20);
        assert_eq!(report.totals.overall_attendance_percentage, dec("50"));
        assert_eq!(report.daily_trend.len(), 15);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let config = ReportConfig::default();
        let punches = vec![
            punch("E1", "Ops", 1, AttendanceStatus::Late, "7"),
            punch("E2", "Sales", 2, AttendanceStatus::Present, "8"),
        ];
        let roster = vec![EmployeeRosterEntry::new("E3", "Three", "Ops")];
        let aggregator = AttendanceAggregator::new(&config);

        let first = aggregator.aggregate(&first_week(), &punches, &[], &roster).unwrap();
        let second = aggregator.aggregate(&first_week(), &punches, &[], &roster).unwrap();
        assert_eq!(first, second);
    }
}
