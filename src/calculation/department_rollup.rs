//! Department averages for the department bar chart.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{AttendanceSummaryRow, DepartmentRollup};

use super::rounding::mean;

#[derive(Default)]
struct DepartmentSums {
    employees: u32,
    present: u32,
    absent: u32,
    leave: u32,
    late: u32,
}

/// Averages present, absent, leave and late counts per department.
///
/// Departments are grouped case-insensitively, matching the department
/// filter, and labelled with the first spelling seen. They appear in the
/// order they are first seen in `rows`. Every row carries equal weight.
pub fn build_department_rollup(rows: &[AttendanceSummaryRow], dp: u32) -> Vec<DepartmentRollup> {
    let mut order: Vec<(String, &str)> = Vec::new();
    let mut sums: HashMap<String, DepartmentSums> = HashMap::new();

    for row in rows {
        let key = row.department.to_ascii_lowercase();
        let entry = sums.entry(key.clone()).or_insert_with(|| {
            order.push((key, row.department.as_str()));
            DepartmentSums::default()
        });
        entry.employees += 1;
        entry.present += row.present_days;
        entry.absent += row.absent_days;
        entry.leave += row.leave_days;
        entry.late += row.late_arrival_count;
    }

    order
        .into_iter()
        .filter_map(|(key, department)| {
            let s = sums.get(&key)?;
            Some(DepartmentRollup {
                department: department.to_string(),
                employee_count: s.employees,
                average_present: mean(Decimal::from(s.present), s.employees, dp),
                average_absent: mean(Decimal::from(s.absent), s.employees, dp),
                average_leave: mean(Decimal::from(s.leave), s.employees, dp),
                average_late: mean(Decimal::from(s.late), s.employees, dp),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, department: &str, present: u32, absent: u32, leave: u32, late: u32) -> AttendanceSummaryRow {
        AttendanceSummaryRow {
            employee_id: id.to_string(),
            employee_name: id.to_string(),
            department: department.to_string(),
            present_days: present,
            absent_days: absent,
            leave_days: leave,
            total_working_days: present + absent + leave,
            attendance_percentage: Decimal::ZERO,
            late_arrival_count: late,
            average_hours_per_present_day: Decimal::ZERO,
            overtime_hours_total: Decimal::ZERO,
        }
    }

    #[test]
    fn test_simple_mean_per_department() {
        let rows = vec![
            row("E1", "Dept A", 20, 0, 0, 2),
            row("E2", "Dept A", 0, 20, 0, 0),
            row("E3", "Dept B", 15, 3, 2, 1),
        ];

        let rollup = build_department_rollup(&rows, 2);
        assert_eq!(rollup.len(), 2);

        assert_eq!(rollup[0].department, "Dept A");
        assert_eq!(rollup[0].employee_count, 2);
        assert_eq!(rollup[0].average_present, Decimal::from(10));
        assert_eq!(rollup[0].average_absent, Decimal::from(10));
        assert_eq!(rollup[0].average_leave, Decimal::ZERO);
        assert_eq!(rollup[0].average_late, Decimal::from(1));

        assert_eq!(rollup[1].department, "Dept B");
        assert_eq!(rollup[1].average_present, Decimal::from(15));
    }

    #[test]
    fn test_first_seen_order() {
        let rows = vec![
            row("E1", "Sales", 1, 0, 0, 0),
            row("E2", "Admin", 1, 0, 0, 0),
            row("E3", "Sales", 1, 0, 0, 0),
        ];
        let names: Vec<_> = build_department_rollup(&rows, 2)
            .into_iter()
            .map(|r| r.department)
            .collect();
        assert_eq!(names, vec!["Sales", "Admin"]);
    }

    #[test]
    fn test_department_spellings_share_one_group() {
        let rows = vec![
            row("E1", "Sales", 4, 1, 0, 0),
            row("E2", "sales", 2, 3, 0, 2),
            row("E3", "SALES", 0, 5, 0, 0),
        ];
        let rollup = build_department_rollup(&rows, 2);
        assert_eq!(rollup.len(), 1);
        assert_eq!(rollup[0].department, "Sales");
        assert_eq!(rollup[0].employee_count, 3);
        assert_eq!(rollup[0].average_present, Decimal::from(2));
        assert_eq!(rollup[0].average_absent, Decimal::from(3));
    }

    #[test]
    fn test_fractional_average_is_rounded() {
        let rows = vec![
            row("E1", "Ops", 1, 0, 0, 0),
            row("E2", "Ops", 1, 0, 0, 0),
            row("E3", "Ops", 0, 1, 0, 0),
        ];
        let rollup = build_department_rollup(&rows, 2);
        assert_eq!(rollup[0].average_present, Decimal::new(67, 2));
        assert_eq!(rollup[0].average_absent, Decimal::new(33, 2));
    }

    #[test]
    fn test_empty_rows() {
        assert!(build_department_rollup(&[], 2).is_empty());
    }
}
