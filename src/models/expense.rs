//! Expense models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The accounting bucket an expense belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseType {
    /// Site and field operations.
    Operational,
    /// Office running costs.
    Office,
    /// Anything else.
    Other,
}

impl ExpenseType {
    /// All expense types in reporting order.
    pub const ALL: [ExpenseType; 3] = [
        ExpenseType::Operational,
        ExpenseType::Office,
        ExpenseType::Other,
    ];
}

/// Workflow status of an expense claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    /// Submitted, not yet reviewed.
    Pending,
    /// Approved for payment.
    Approved,
    /// Rejected.
    Rejected,
    /// Paid out.
    Paid,
}

/// A single expense claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense identifier.
    pub id: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Vendor or payee.
    #[serde(default)]
    pub vendor: String,
    /// Category, e.g. "Travel".
    pub category: String,
    /// Site the expense was incurred for.
    #[serde(default)]
    pub site: String,
    /// Accounting bucket.
    pub expense_type: ExpenseType,
    /// Amount claimed.
    pub amount: Decimal,
    /// Date incurred.
    pub date: NaiveDate,
    /// Workflow status.
    pub status: ExpenseStatus,
}

impl Expense {
    /// Returns true if `needle` (already lowercased) occurs in any searchable
    /// text field.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        [
            &self.id,
            &self.description,
            &self.vendor,
            &self.category,
            &self.site,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Filters applied to expenses before they are summed.
///
/// Every field is optional; an empty filter keeps every expense.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Keep only this status.
    #[serde(default)]
    pub status: Option<ExpenseStatus>,
    /// Keep only this type.
    #[serde(default)]
    pub expense_type: Option<ExpenseType>,
    /// Keep expenses dated on or after this day.
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Keep expenses dated on or before this day.
    #[serde(default)]
    pub to: Option<NaiveDate>,
    /// Case-insensitive text matched against id, description, vendor,
    /// category and site.
    #[serde(default)]
    pub search: Option<String>,
}

/// Sum of expenses for one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTotal {
    /// The expense type.
    pub expense_type: ExpenseType,
    /// Number of expenses.
    pub count: u32,
    /// Sum of amounts.
    pub amount: Decimal,
}

/// Sum of expenses for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category.
    pub category: String,
    /// Number of expenses.
    pub count: u32,
    /// Sum of amounts.
    pub amount: Decimal,
}

/// Sum of expenses for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotal {
    /// Month key formatted `YYYY-MM`.
    pub month: String,
    /// Number of expenses.
    pub count: u32,
    /// Sum of amounts.
    pub amount: Decimal,
}

/// Grouped totals over a filtered expense list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Number of expenses that passed the filter.
    pub expense_count: u32,
    /// Sum of all filtered amounts.
    pub total_amount: Decimal,
    /// Totals per type, always listing every type.
    pub by_type: Vec<TypeTotal>,
    /// Totals per category, alphabetical.
    pub by_category: Vec<CategoryTotal>,
    /// Totals per month, ascending.
    pub by_month: Vec<MonthTotal>,
}
