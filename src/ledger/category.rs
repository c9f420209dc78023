//! Fixed income and expense category catalogs.

use serde::Serialize;

use super::transaction::TransactionKind;

/// A selectable category: stored `value` plus its display `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> CategoryOption {
    CategoryOption { value, label }
}

pub const INCOME_CATEGORIES: &[CategoryOption] = &[
    option("salary", "Salary"),
    option("freelance", "Freelance"),
    option("bonus", "Bonus"),
    option("investment", "Investment"),
    option("gift", "Gift"),
    option("refund", "Refund"),
    option("side_hustle", "Side Hustle"),
    option("scholarship", "Scholarship"),
    option("rental", "Rental Income"),
    option("other", "Other Income"),
];

pub const EXPENSE_CATEGORIES: &[CategoryOption] = &[
    option("rent", "Rent"),
    option("groceries", "Groceries"),
    option("utilities", "Utilities"),
    option("transportation", "Transportation"),
    option("dining", "Dining Out"),
    option("healthcare", "Healthcare"),
    option("entertainment", "Entertainment"),
    option("education", "Education"),
    option("shopping", "Shopping"),
    option("travel", "Travel"),
    option("other", "Other Expense"),
];

/// Category fallback used when a transaction carries no category value.
pub const FALLBACK_CATEGORY: &str = "other";

pub fn options(kind: TransactionKind) -> &'static [CategoryOption] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Returns the label for `value`, or `value` itself when it is not catalogued.
pub fn label(value: &str, kind: TransactionKind) -> String {
    options(kind)
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn is_valid(value: &str, kind: TransactionKind) -> bool {
    options(kind).iter().any(|option| option.value == value)
}
