use serde::Serialize;

use crate::ledger::{
    aggregate::{self, CategoryTotal, MonthGroup, MonthKey, ReportSummary},
    Ledger, TransactionFilter, TransactionKind,
};

/// Income against spending for the budget view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub income: f64,
    pub expenses: f64,
    pub remaining: f64,
    pub percentage_used: f64,
    pub over_budget: bool,
    pub over_budget_amount: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Headline figures for the transactions selected by `filter`.
    pub fn summarize(ledger: &Ledger, filter: &TransactionFilter) -> ReportSummary {
        let selected = filter.apply(ledger.transactions());
        ReportSummary::from_transactions(&selected)
    }

    pub fn overview(ledger: &Ledger, filter: &TransactionFilter) -> BudgetOverview {
        let selected = filter.apply(ledger.transactions());
        let income = aggregate::total_by_kind(&selected, TransactionKind::Income);
        let expenses = aggregate::total_by_kind(&selected, TransactionKind::Expense);
        let remaining = income - expenses;
        BudgetOverview {
            income,
            expenses,
            remaining,
            percentage_used: aggregate::budget_percentage(expenses, income),
            over_budget: aggregate::is_over_budget(remaining),
            over_budget_amount: aggregate::over_budget_amount(remaining),
        }
    }

    pub fn breakdown(
        ledger: &Ledger,
        filter: &TransactionFilter,
        kind: TransactionKind,
    ) -> Vec<CategoryTotal> {
        let selected = filter.apply(ledger.transactions());
        aggregate::group_by_category(&selected, kind)
    }

    pub fn months(ledger: &Ledger, filter: &TransactionFilter) -> Vec<MonthGroup> {
        let selected = filter.apply(ledger.transactions());
        aggregate::group_by_month(&selected)
    }

    pub fn available_months(ledger: &Ledger) -> Vec<MonthKey> {
        aggregate::available_months(ledger.transactions())
    }
}
