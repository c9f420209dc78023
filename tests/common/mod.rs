#![allow(dead_code)]

use moneyflow::ledger::{IsoDate, Ledger, TransactionKind};

pub fn date(value: &str) -> IsoDate {
    IsoDate::parse(value).expect("valid test date")
}

/// Rent, salary and coffee spread over early January 2026.
pub fn january_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .add(TransactionKind::Expense, "Rent", "rent", 1200.0, Some(date("2026-01-01")))
        .expect("rent is valid");
    ledger
        .add(TransactionKind::Income, "Salary", "salary", 3000.0, Some(date("2026-01-05")))
        .expect("salary is valid");
    ledger
        .add(TransactionKind::Expense, "Coffee", "dining", 4.50, Some(date("2026-01-10")))
        .expect("coffee is valid");
    ledger
}
