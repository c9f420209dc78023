//! Date based transaction filters shared by listings, summaries and exports.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{
    date::{month_label, IsoDate},
    transaction::Transaction,
};

/// Which transactions a view should include.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    /// Inclusive on both ends.
    DateRange { start: IsoDate, end: IsoDate },
    /// `month` is 1-12.
    MonthYear { year: i32, month: u32 },
}

impl TransactionFilter {
    pub fn date_range(start: IsoDate, end: IsoDate) -> Self {
        TransactionFilter::DateRange { start, end }
    }

    pub fn month_year(year: i32, month: u32) -> Self {
        TransactionFilter::MonthYear { year, month }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, TransactionFilter::All)
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let date = transaction.date();
        match self {
            TransactionFilter::All => true,
            TransactionFilter::DateRange { start, end } => start <= date && date <= end,
            TransactionFilter::MonthYear { year, month } => {
                date.year() == *year && date.month() == *month
            }
        }
    }

    /// Keeps the matching transactions.
    ///
    /// `All` and empty input hand back the input slice untouched.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Cow<'a, [Transaction]> {
        if transactions.is_empty() || !self.is_active() {
            return Cow::Borrowed(transactions);
        }
        Cow::Owned(
            transactions
                .iter()
                .filter(|txn| self.matches(txn))
                .cloned()
                .collect(),
        )
    }

    /// Label shown on reports, e.g. `2026-01-02 to 2026-01-09` or `Jan 2026`.
    pub fn describe(&self) -> String {
        match self {
            TransactionFilter::All => "All Transactions".into(),
            TransactionFilter::DateRange { start, end } => format!("{start} to {end}"),
            TransactionFilter::MonthYear { year, month } => month_label(*year, *month),
        }
    }

    /// Export file name without extension.
    pub fn file_stem(&self, today: &IsoDate) -> String {
        match self {
            TransactionFilter::All => format!("transactions_{today}"),
            TransactionFilter::DateRange { start, end } => {
                format!("transactions_{start}_to_{end}")
            }
            TransactionFilter::MonthYear { year, month } => {
                format!("transactions_{year:04}-{month:02}")
            }
        }
    }
}

/// Loosely typed filter descriptor as it arrives from forms or JSON.
///
/// Unknown types and descriptors missing their parameters resolve to
/// [`TransactionFilter::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
}

impl FilterSpec {
    pub fn into_filter(self) -> TransactionFilter {
        match self.kind.as_deref() {
            Some("dateRange") => {
                let start = self.start_date.as_deref().and_then(|s| IsoDate::parse(s).ok());
                let end = self.end_date.as_deref().and_then(|s| IsoDate::parse(s).ok());
                match (start, end) {
                    (Some(start), Some(end)) => TransactionFilter::DateRange { start, end },
                    _ => TransactionFilter::All,
                }
            }
            Some("monthYear") => match (self.year, self.month) {
                (Some(year), Some(month)) if year != 0 && month != 0 => {
                    TransactionFilter::MonthYear { year, month }
                }
                _ => TransactionFilter::All,
            },
            _ => TransactionFilter::All,
        }
    }
}

impl From<&TransactionFilter> for FilterSpec {
    fn from(filter: &TransactionFilter) -> Self {
        match filter {
            TransactionFilter::All => FilterSpec {
                kind: Some("all".into()),
                ..FilterSpec::default()
            },
            TransactionFilter::DateRange { start, end } => FilterSpec {
                kind: Some("dateRange".into()),
                start_date: Some(start.to_string()),
                end_date: Some(end.to_string()),
                ..FilterSpec::default()
            },
            TransactionFilter::MonthYear { year, month } => FilterSpec {
                kind: Some("monthYear".into()),
                year: Some(*year),
                month: Some(*month),
                ..FilterSpec::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::transaction::TransactionKind;

    fn date(value: &str) -> IsoDate {
        IsoDate::parse(value).unwrap()
    }

    fn txn(description: &str, value: &str) -> Transaction {
        Transaction::create(
            TransactionKind::Expense,
            description,
            "other",
            1.0,
            Some(date(value)),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("new year", "2026-01-01"),
            txn("mid", "2026-01-15"),
            txn("feb", "2026-02-01"),
            txn("last year", "2025-01-15"),
        ]
    }

    fn descriptions(list: &[Transaction]) -> Vec<&str> {
        list.iter().map(Transaction::description).collect()
    }

    #[test]
    fn all_returns_input_unchanged() {
        let data = sample();
        let result = TransactionFilter::All.apply(&data);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.as_ref(), data.as_slice());
    }

    #[test]
    fn empty_input_stays_empty() {
        let filter = TransactionFilter::month_year(2026, 1);
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn date_range_is_inclusive() {
        let data = sample();
        let filter = TransactionFilter::date_range(date("2026-01-01"), date("2026-01-15"));
        let result = filter.apply(&data);
        assert_eq!(descriptions(&result), vec!["new year", "mid"]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let data = sample();
        let filter = TransactionFilter::date_range(date("2026-02-01"), date("2026-01-01"));
        assert!(filter.apply(&data).is_empty());
    }

    #[test]
    fn month_year_matches_both_components() {
        let data = sample();
        let result = TransactionFilter::month_year(2026, 1).apply(&data);
        assert_eq!(descriptions(&result), vec!["new year", "mid"]);
        assert!(TransactionFilter::month_year(2026, 13).apply(&data).is_empty());
    }

    #[test]
    fn describe_and_file_stem() {
        let today = date("2026-10-18");
        assert_eq!(TransactionFilter::All.describe(), "All Transactions");
        assert_eq!(
            TransactionFilter::All.file_stem(&today),
            "transactions_2026-10-18"
        );
        let range = TransactionFilter::date_range(date("2026-01-02"), date("2026-01-09"));
        assert_eq!(range.describe(), "2026-01-02 to 2026-01-09");
        assert_eq!(
            range.file_stem(&today),
            "transactions_2026-01-02_to_2026-01-09"
        );
        let month = TransactionFilter::month_year(2026, 3);
        assert_eq!(month.describe(), "Mar 2026");
        assert_eq!(month.file_stem(&today), "transactions_2026-03");
    }

    #[test]
    fn incomplete_or_unknown_specs_fall_back_to_all() {
        let cases = [
            r#"{"type":"all"}"#,
            r#"{}"#,
            r#"{"type":"weekly"}"#,
            r#"{"type":"dateRange","startDate":"2026-01-01"}"#,
            r#"{"type":"dateRange","startDate":"2026-01-01","endDate":"soon"}"#,
            r#"{"type":"monthYear","year":2026}"#,
            r#"{"type":"monthYear","year":2026,"month":0}"#,
        ];
        for raw in cases {
            let descriptor: FilterSpec = serde_json::from_str(raw).unwrap();
            assert_eq!(descriptor.into_filter(), TransactionFilter::All, "{raw}");
        }
    }

    #[test]
    fn complete_specs_convert() {
        let descriptor: FilterSpec = serde_json::from_str(
            r#"{"type":"dateRange","startDate":"2026-01-02","endDate":"2026-01-09"}"#,
        )
        .unwrap();
        let filter = descriptor.into_filter();
        assert_eq!(
            filter,
            TransactionFilter::date_range(date("2026-01-02"), date("2026-01-09"))
        );
        assert_eq!(FilterSpec::from(&filter).into_filter(), filter);

        let descriptor: FilterSpec =
            serde_json::from_str(r#"{"type":"monthYear","year":2026,"month":1}"#).unwrap();
        assert_eq!(descriptor.into_filter(), TransactionFilter::month_year(2026, 1));
    }
}
