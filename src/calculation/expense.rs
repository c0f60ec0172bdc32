//! Expense aggregation.
//!
//! Filters an expense list and sums the remaining amounts by type, by
//! category and by calendar month.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{ReportError, ReportResult};
use crate::models::{
    CategoryTotal, Expense, ExpenseFilter, ExpenseSummary, ExpenseType, MonthTotal, TypeTotal,
};

/// Returns true if the expense passes every set field of the filter.
///
/// `needle` is the lowercased, trimmed search text, if any.
fn passes_filter(expense: &Expense, filter: &ExpenseFilter, needle: Option<&str>) -> bool {
    if filter.status.is_some_and(|s| s != expense.status) {
        return false;
    }
    if filter.expense_type.is_some_and(|t| t != expense.expense_type) {
        return false;
    }
    if filter.from.is_some_and(|from| expense.date < from) {
        return false;
    }
    if filter.to.is_some_and(|to| expense.date > to) {
        return false;
    }
    needle.is_none_or(|n| expense.matches_search(n))
}

/// Filters expenses and returns grouped totals.
///
/// # Returns
///
/// An [`ExpenseSummary`] whose `by_type` lists every [`ExpenseType`] (zero
/// when none matched), `by_category` is alphabetical and `by_month` is keyed
/// `YYYY-MM` in ascending order. Fails with [`ReportError::InvalidRange`]
/// when both filter dates are set and `from` is after `to`.
///
/// # Example
///
/// ```
/// use hrms_reports::calculation::summarize_expenses;
/// use hrms_reports::models::ExpenseFilter;
/// use rust_decimal::Decimal;
///
/// let summary = summarize_expenses(&[], &ExpenseFilter::default()).unwrap();
/// assert_eq!(summary.total_amount, Decimal::ZERO);
/// assert_eq!(summary.by_type.len(), 3);
/// ```
pub fn summarize_expenses(
    expenses: &[Expense],
    filter: &ExpenseFilter,
) -> ReportResult<ExpenseSummary> {
    if let (Some(from), Some(to)) = (filter.from, filter.to) {
        if from > to {
            return Err(ReportError::InvalidRange { from, to });
        }
    }

    let needle = filter
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let mut by_type: BTreeMap<ExpenseType, (u32, Decimal)> = ExpenseType::ALL
        .iter()
        .map(|t| (*t, (0, Decimal::ZERO)))
        .collect();
    let mut by_category: BTreeMap<&str, (u32, Decimal)> = BTreeMap::new();
    let mut by_month: BTreeMap<String, (u32, Decimal)> = BTreeMap::new();
    let mut expense_count: u32 = 0;
    let mut total_amount = Decimal::ZERO;

    for expense in expenses
        .iter()
        .filter(|e| passes_filter(e, filter, needle.as_deref()))
    {
        expense_count += 1;
        total_amount += expense.amount;

        let buckets = [
            by_type.entry(expense.expense_type).or_default(),
            by_category.entry(expense.category.as_str()).or_default(),
            by_month
                .entry(expense.date.format("%Y-%m").to_string())
                .or_default(),
        ];
        for bucket in buckets {
            bucket.0 += 1;
            bucket.1 += expense.amount;
        }
    }

    Ok(ExpenseSummary {
        expense_count,
        total_amount,
        by_type: by_type
            .into_iter()
            .map(|(expense_type, (count, amount))| TypeTotal {
                expense_type,
                count,
                amount,
            })
            .collect(),
        by_category: by_category
            .into_iter()
            .map(|(category, (count, amount))| CategoryTotal {
                category: category.to_string(),
                count,
                amount,
            })
            .collect(),
        by_month: by_month
            .into_iter()
            .map(|(month, (count, amount))| MonthTotal {
                month,
                count,
                amount,
            })
            .collect(),
    })
}
