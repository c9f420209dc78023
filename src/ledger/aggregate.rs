//! Pure derivations over a slice of transactions: totals, budget ratios,
//! category breakdowns, month grouping, and recency ordering.

use std::collections::HashMap;

use serde::Serialize;

use super::{
    category::{self, FALLBACK_CATEGORY},
    date::month_label,
    transaction::{Transaction, TransactionKind},
};

/// Number of entries returned by [`recent`] when no limit is configured.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

pub fn filter_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| txn.kind() == kind)
        .cloned()
        .collect()
}

pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind() == kind)
        .map(Transaction::amount)
        .sum()
}

/// Income minus expenses.
pub fn net_balance(transactions: &[Transaction]) -> f64 {
    total_by_kind(transactions, TransactionKind::Income)
        - total_by_kind(transactions, TransactionKind::Expense)
}

/// Share of income consumed by expenses, in percent. Zero without income.
pub fn budget_percentage(expense_total: f64, income_total: f64) -> f64 {
    if income_total <= 0.0 {
        return 0.0;
    }
    expense_total / income_total * 100.0
}

pub fn is_over_budget(remaining: f64) -> bool {
    remaining < 0.0
}

/// How far spending exceeds income; zero when not over budget.
pub fn over_budget_amount(remaining: f64) -> f64 {
    if is_over_budget(remaining) {
        -remaining
    } else {
        0.0
    }
}

/// Aggregated amount and count for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub label: String,
    pub amount: f64,
    pub count: usize,
}

/// Sums `kind` transactions per category, largest amount first.
///
/// Categories with equal totals keep the order in which they were first seen.
pub fn group_by_category(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions.iter().filter(|txn| txn.kind() == kind) {
        let key = if txn.category().is_empty() {
            FALLBACK_CATEGORY
        } else {
            txn.category()
        };
        match index.get(key) {
            Some(&slot) => {
                groups[slot].amount += txn.amount();
                groups[slot].count += 1;
            }
            None => {
                index.insert(key, groups.len());
                groups.push(CategoryTotal {
                    category: key.to_string(),
                    label: category::label(key, kind),
                    amount: txn.amount(),
                    count: 1,
                });
            }
        }
    }

    groups.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    groups
}

/// Newest first by calendar date; same-day entries keep their input order.
pub fn sorted_descending(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date().cmp(a.date()));
    sorted
}

pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = sorted_descending(transactions);
    sorted.truncate(limit);
    sorted
}

/// Transactions sharing a `YYYY-MM` key.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub key: String,
    pub transactions: Vec<Transaction>,
}

impl MonthGroup {
    pub fn total_by_kind(&self, kind: TransactionKind) -> f64 {
        total_by_kind(&self.transactions, kind)
    }
}

/// Buckets transactions by month, newest month first and newest entry first
/// inside each bucket.
pub fn group_by_month(transactions: &[Transaction]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for txn in sorted_descending(transactions) {
        let key = txn.date().month_key().to_string();
        if let Some(group) = groups.last_mut().filter(|group| group.key == key) {
            group.transactions.push(txn);
            continue;
        }
        groups.push(MonthGroup {
            key,
            transactions: vec![txn],
        });
    }
    groups
}

/// A year/month pair present in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn label(&self) -> String {
        month_label(self.year, self.month)
    }
}

/// Distinct months that have transactions, newest first.
pub fn available_months(transactions: &[Transaction]) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = transactions
        .iter()
        .map(|txn| MonthKey {
            year: txn.date().year(),
            month: txn.date().month(),
        })
        .collect();
    months.sort_unstable_by(|a, b| b.cmp(a));
    months.dedup();
    months
}

/// Distinct years that have transactions, newest first.
pub fn available_years(transactions: &[Transaction]) -> Vec<i32> {
    let mut years: Vec<i32> = transactions.iter().map(|txn| txn.date().year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Descriptive statistics over a set of expenses.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ExpenseStats {
    pub total: f64,
    pub average: f64,
    pub highest: f64,
    pub count: usize,
}

pub fn expense_stats(expenses: &[Transaction]) -> ExpenseStats {
    if expenses.is_empty() {
        return ExpenseStats::default();
    }
    let total: f64 = expenses.iter().map(Transaction::amount).sum();
    let highest = expenses
        .iter()
        .map(Transaction::amount)
        .fold(f64::MIN, f64::max);
    ExpenseStats {
        total,
        average: total / expenses.len() as f64,
        highest,
        count: expenses.len(),
    }
}

/// Headline figures for a (usually filtered) set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
    pub transaction_count: usize,
    pub expense_ratio: f64,
    pub savings_rate: f64,
    pub average_transaction: f64,
}

impl ReportSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_income = total_by_kind(transactions, TransactionKind::Income);
        let total_expenses = total_by_kind(transactions, TransactionKind::Expense);
        let net_balance = total_income - total_expenses;
        let transaction_count = transactions.len();
        let savings_rate = if total_income > 0.0 {
            net_balance / total_income * 100.0
        } else {
            0.0
        };
        let average_transaction = if transaction_count == 0 {
            0.0
        } else {
            (total_income + total_expenses) / transaction_count as f64
        };
        Self {
            total_income,
            total_expenses,
            net_balance,
            transaction_count,
            expense_ratio: budget_percentage(total_expenses, total_income),
            savings_rate,
            average_transaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::date::IsoDate;

    fn txn(
        kind: TransactionKind,
        description: &str,
        category: &str,
        amount: f64,
        date: &str,
    ) -> Transaction {
        Transaction::create(
            kind,
            description,
            category,
            amount,
            Some(IsoDate::parse(date).unwrap()),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(TransactionKind::Expense, "Rent", "rent", 1200.0, "2026-01-01"),
            txn(TransactionKind::Income, "Salary", "salary", 3000.0, "2026-01-05"),
            txn(TransactionKind::Expense, "Coffee", "dining", 4.5, "2026-01-10"),
            txn(TransactionKind::Expense, "Dinner", "dining", 40.0, "2025-12-20"),
            txn(TransactionKind::Expense, "Cinema", "entertainment", 44.5, "2025-12-21"),
        ]
    }

    #[test]
    fn totals_and_net_balance() {
        let data = sample();
        assert_eq!(total_by_kind(&data, TransactionKind::Income), 3000.0);
        assert_eq!(total_by_kind(&data, TransactionKind::Expense), 1289.0);
        assert_eq!(net_balance(&data), 1711.0);
        assert_eq!(net_balance(&[]), 0.0);
    }

    #[test]
    fn budget_helpers() {
        assert_eq!(budget_percentage(50.0, 0.0), 0.0);
        assert_eq!(budget_percentage(50.0, -10.0), 0.0);
        assert_eq!(budget_percentage(150.0, 100.0), 150.0);
        assert!(is_over_budget(-0.01));
        assert!(!is_over_budget(0.0));
        assert_eq!(over_budget_amount(-25.0), 25.0);
        assert_eq!(over_budget_amount(25.0), 0.0);
        assert_eq!(over_budget_amount(0.0), 0.0);
    }

    #[test]
    fn category_groups_sum_and_sort_descending() {
        let data = sample();
        let groups = group_by_category(&data, TransactionKind::Expense);
        let keys: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(keys, vec!["rent", "dining", "entertainment"]);
        assert_eq!(groups[1].amount, 44.5);
        assert_eq!(groups[1].count, 2);
        assert_eq!(groups[1].label, "Dining Out");
        let sum: f64 = groups.iter().map(|g| g.amount).sum();
        assert_eq!(sum, total_by_kind(&data, TransactionKind::Expense));
    }

    #[test]
    fn category_ties_keep_first_seen_order() {
        let data = vec![
            txn(TransactionKind::Expense, "Bus", "transportation", 10.0, "2026-01-01"),
            txn(TransactionKind::Expense, "Book", "education", 10.0, "2026-01-02"),
            txn(TransactionKind::Expense, "Game", "entertainment", 10.0, "2026-01-03"),
        ];
        let keys: Vec<String> = group_by_category(&data, TransactionKind::Expense)
            .into_iter()
            .map(|g| g.category)
            .collect();
        assert_eq!(keys, vec!["transportation", "education", "entertainment"]);
    }

    #[test]
    fn uncatalogued_categories_keep_raw_label() {
        let data = vec![txn(TransactionKind::Income, "Coins", "crypto", 5.0, "2026-01-01")];
        let groups = group_by_category(&data, TransactionKind::Income);
        assert_eq!(groups[0].label, "crypto");
    }

    #[test]
    fn sorted_descending_is_stable_for_same_day() {
        let data = vec![
            txn(TransactionKind::Expense, "first", "rent", 1.0, "2026-01-01"),
            txn(TransactionKind::Expense, "second", "rent", 1.0, "2026-01-02"),
            txn(TransactionKind::Expense, "third", "rent", 1.0, "2026-01-01"),
        ];
        let sorted = sorted_descending(&data);
        let order: Vec<&str> = sorted.iter().map(Transaction::description).collect();
        assert_eq!(order, vec!["second", "first", "third"]);
    }

    #[test]
    fn recent_takes_newest_entries() {
        let data = sample();
        let latest = recent(&data, 2);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].description(), "Coffee");
        assert_eq!(latest[1].description(), "Salary");
        assert_eq!(recent(&data, DEFAULT_RECENT_LIMIT).len(), 5);
        assert!(recent(&data, 0).is_empty());
    }

    #[test]
    fn groups_by_month_newest_first() {
        let groups = group_by_month(&sample());
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["2026-01", "2025-12"]);
        assert_eq!(groups[0].transactions.len(), 3);
        assert_eq!(groups[0].transactions[0].description(), "Coffee");
        assert_eq!(groups[1].total_by_kind(TransactionKind::Expense), 84.5);
    }

    #[test]
    fn available_months_and_years_are_unique_and_descending() {
        let data = sample();
        let months = available_months(&data);
        assert_eq!(
            months,
            vec![
                MonthKey { year: 2026, month: 1 },
                MonthKey { year: 2025, month: 12 }
            ]
        );
        assert_eq!(months[1].key(), "2025-12");
        assert_eq!(months[0].label(), "Jan 2026");
        assert_eq!(available_years(&data), vec![2026, 2025]);
    }

    #[test]
    fn expense_stats_cover_empty_and_populated_sets() {
        assert_eq!(expense_stats(&[]), ExpenseStats::default());
        let expenses = filter_by_kind(&sample(), TransactionKind::Expense);
        let stats = expense_stats(&expenses);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.total, 1289.0);
        assert_eq!(stats.highest, 1200.0);
        assert_eq!(stats.average, 322.25);
    }

    #[test]
    fn report_summary_ratios() {
        let summary = ReportSummary::from_transactions(&sample());
        assert_eq!(summary.transaction_count, 5);
        assert_eq!(summary.net_balance, 1711.0);
        assert!((summary.expense_ratio - 42.966_666).abs() < 1e-3);
        assert!((summary.savings_rate - 57.033_333).abs() < 1e-3);

        let empty = ReportSummary::from_transactions(&[]);
        assert_eq!(empty, ReportSummary::default());
    }
}
