mod common;

use common::{date, january_ledger};
use moneyflow::{
    core::services::{NewTransaction, SummaryService, TransactionService},
    ledger::{aggregate, validate, Ledger, TransactionFilter, TransactionKind, ValidationError},
};

#[test]
fn january_scenario_totals() {
    let ledger = january_ledger();
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.total_by_kind(TransactionKind::Income), 3000.0);
    assert_eq!(ledger.total_by_kind(TransactionKind::Expense), 1204.5);
    assert_eq!(ledger.net_balance(), 1795.5);
}

#[test]
fn net_balance_is_income_minus_expenses() {
    assert_eq!(Ledger::new().net_balance(), 0.0);

    let ledger = january_ledger();
    let diff = ledger.total_by_kind(TransactionKind::Income)
        - ledger.total_by_kind(TransactionKind::Expense);
    assert_eq!(diff, ledger.net_balance());
}

#[test]
fn rejected_adds_leave_the_ledger_alone() {
    let mut ledger = january_ledger();

    let missing = ledger
        .add(TransactionKind::Expense, "", "rent", 50.0, None)
        .unwrap_err();
    assert_eq!(missing.errors(), &[ValidationError::MissingDescription]);
    assert!(missing.messages()[0].ends_with("description is required"));

    let negative = ledger
        .add(TransactionKind::Income, "Bonus", "bonus", -10.0, None)
        .unwrap_err();
    assert_eq!(negative.errors(), &[ValidationError::InvalidAmount]);

    assert_eq!(ledger.len(), 3);
}

#[test]
fn validation_collects_every_problem() {
    assert!(validate("Groceries", 12.0).is_valid());
    let both = validate("   ", f64::NAN);
    assert_eq!(
        both.errors(),
        &[ValidationError::MissingDescription, ValidationError::InvalidAmount]
    );
    assert!(!validate(&"x".repeat(101), 1.0).is_valid());
}

#[test]
fn accepted_add_stores_normalized_fields() {
    let mut ledger = Ledger::new();
    let draft = NewTransaction::parse(
        "income",
        "  Freelance gig  ",
        "Freelance",
        "$1,250.00",
        Some("2026-02-03"),
    )
    .unwrap();
    let txn = TransactionService::add(&mut ledger, draft).unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(txn.description(), "Freelance gig");
    assert_eq!(txn.category(), "freelance");
    assert_eq!(txn.amount(), 1250.0);
    assert_eq!(txn.date().as_str(), "2026-02-03");
}

#[test]
fn remove_twice_is_idempotent() {
    let mut ledger = january_ledger();
    let id = ledger.transactions()[0].id();
    assert!(TransactionService::remove(&mut ledger, id).is_some());
    assert!(TransactionService::remove(&mut ledger, id).is_none());
    assert_eq!(ledger.len(), 2);
}

#[test]
fn update_revalidates_and_keeps_identity() {
    let mut ledger = january_ledger();
    let coffee = ledger.transactions()[2].clone();

    TransactionService::update(&mut ledger, coffee.id(), "Espresso", 3.0).unwrap();
    let updated = ledger.transaction(coffee.id()).unwrap();
    assert_eq!(updated.description(), "Espresso");
    assert_eq!(updated.amount(), 3.0);
    assert_eq!(updated.date(), coffee.date());
    assert_eq!(updated.category(), coffee.category());

    assert!(TransactionService::update(&mut ledger, coffee.id(), "", 3.0).is_err());
    assert_eq!(ledger.transaction(coffee.id()).unwrap().description(), "Espresso");
}

#[test]
fn category_groups_sum_to_type_totals() {
    let mut ledger = january_ledger();
    ledger
        .add(TransactionKind::Expense, "Lunch", "dining", 15.5, Some(date("2026-01-12")))
        .unwrap();
    let groups = aggregate::group_by_category(ledger.transactions(), TransactionKind::Expense);
    assert_eq!(groups[0].category, "rent");
    assert_eq!(groups[1].category, "dining");
    assert_eq!(groups[1].amount, 20.0);
    assert_eq!(groups[1].count, 2);

    let sum: f64 = groups.iter().map(|group| group.amount).sum();
    assert_eq!(sum, ledger.total_by_kind(TransactionKind::Expense));
}

#[test]
fn recent_and_sorted_are_newest_first() {
    let ledger = january_ledger();
    let sorted = aggregate::sorted_descending(ledger.transactions());
    let dates: Vec<&str> = sorted.iter().map(|txn| txn.date().as_str()).collect();
    assert_eq!(dates, ["2026-01-10", "2026-01-05", "2026-01-01"]);

    let recent = aggregate::recent(ledger.transactions(), 2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].description(), "Coffee");
}

#[test]
fn overview_reports_budget_usage() {
    let ledger = january_ledger();
    let overview = SummaryService::overview(&ledger, &TransactionFilter::All);
    assert_eq!(overview.remaining, 1795.5);
    assert!(!overview.over_budget);
    assert_eq!(overview.over_budget_amount, 0.0);
    assert!((overview.percentage_used - 40.15).abs() < 1e-9);
}

#[test]
fn clearing_by_kind_keeps_the_other_kind() {
    let mut ledger = january_ledger();
    assert_eq!(
        TransactionService::clear(&mut ledger, Some(TransactionKind::Expense)),
        2
    );
    assert_eq!(ledger.len(), 1);
    assert_eq!(TransactionService::clear(&mut ledger, None), 1);
    assert!(ledger.is_empty());
}

#[test]
fn stored_transactions_cannot_smuggle_invalid_entries() {
    let negative = r#"[{"id":"11111111-1111-4111-8111-111111111111","type":"expense",
        "description":"","category":"RENT","amount":-500.0,"dateISO":"2026-01-01"}]"#;
    assert!(serde_json::from_str::<Vec<moneyflow::ledger::Transaction>>(negative).is_err());

    let valid = r#"[{"id":"11111111-1111-4111-8111-111111111111","type":"expense",
        "description":"Rent","category":"RENT","amount":500.0,"dateISO":"2026-01-01"}]"#;
    let restored: Vec<moneyflow::ledger::Transaction> = serde_json::from_str(valid).unwrap();
    assert_eq!(restored[0].category(), "rent");
    assert!(restored.iter().all(|txn| txn.amount() >= 0.0));
}
