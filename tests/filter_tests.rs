mod common;

use common::{date, january_ledger};
use moneyflow::ledger::{FilterSpec, TransactionFilter};

#[test]
fn all_returns_identical_contents() {
    let ledger = january_ledger();
    let filtered = TransactionFilter::All.apply(ledger.transactions());
    assert_eq!(&*filtered, ledger.transactions());
    assert!(TransactionFilter::All.apply(&[]).is_empty());
}

#[test]
fn month_filter_selects_january() {
    let ledger = january_ledger();
    let filtered = TransactionFilter::month_year(2026, 1).apply(ledger.transactions());
    assert_eq!(filtered.len(), 3);
    assert!(TransactionFilter::month_year(2025, 12)
        .apply(ledger.transactions())
        .is_empty());
}

#[test]
fn date_range_keeps_only_dates_between_bounds() {
    let ledger = january_ledger();
    let between = TransactionFilter::date_range(date("2026-01-02"), date("2026-01-09"));
    let filtered = between.apply(ledger.transactions());
    let descriptions: Vec<&str> = filtered.iter().map(|txn| txn.description()).collect();
    assert_eq!(descriptions, ["Salary"]);

    let gap = TransactionFilter::date_range(date("2026-01-11"), date("2026-01-31"));
    assert!(gap.apply(ledger.transactions()).is_empty());
}

#[test]
fn date_range_bounds_are_inclusive() {
    let ledger = january_ledger();
    let filter = TransactionFilter::date_range(date("2026-01-01"), date("2026-01-05"));
    let filtered = filter.apply(ledger.transactions());
    let descriptions: Vec<&str> = filtered.iter().map(|txn| txn.description()).collect();
    assert_eq!(descriptions, ["Rent", "Salary"]);
    for txn in filtered.iter() {
        assert!(txn.date().as_str() >= "2026-01-01" && txn.date().as_str() <= "2026-01-05");
    }
}

#[test]
fn loose_descriptors_fall_back_to_all() {
    let descriptor: FilterSpec = serde_json::from_str(r#"{"type":"dateRange","startDate":"2026-01-02"}"#)
        .unwrap();
    assert_eq!(descriptor.into_filter(), TransactionFilter::All);

    let descriptor: FilterSpec = serde_json::from_str(r#"{"type":"monthYear","year":2026,"month":1}"#)
        .unwrap();
    assert_eq!(descriptor.into_filter(), TransactionFilter::month_year(2026, 1));

    let descriptor: FilterSpec = serde_json::from_str(r#"{"type":"weekly"}"#).unwrap();
    assert_eq!(descriptor.into_filter(), TransactionFilter::All);
}
