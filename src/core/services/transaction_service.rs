//! Business logic helpers for managing transactions.

use tracing::{debug, info};
use uuid::Uuid;

use crate::core::services::{CategoryService, ServiceResult};
use crate::ledger::{IsoDate, Ledger, Transaction, TransactionKind};

/// Raw input for a transaction that has not been accepted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: Option<IsoDate>,
}

impl NewTransaction {
    /// Builds a draft from user-typed tokens.
    ///
    /// An amount that does not parse becomes NaN so validation reports it
    /// with the usual amount message.
    pub fn parse(
        kind: &str,
        description: &str,
        category: &str,
        amount: &str,
        date: Option<&str>,
    ) -> ServiceResult<Self> {
        let kind = kind.parse::<TransactionKind>()?;
        let date = date.map(IsoDate::parse).transpose()?;
        Ok(Self {
            kind,
            description: description.to_string(),
            category: category.to_string(),
            amount: parse_amount(amount),
            date,
        })
    }
}

/// Parses a user-typed amount, tolerating a leading `$` and grouping commas.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',')
        .collect();
    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates the draft, checks its category and appends it.
    pub fn add(ledger: &mut Ledger, draft: NewTransaction) -> ServiceResult<Transaction> {
        let category = CategoryService::ensure_valid(&draft.category, draft.kind)?;
        let txn = ledger.add(
            draft.kind,
            &draft.description,
            &category,
            draft.amount,
            draft.date,
        )?;
        info!(id = %txn.short_id(), kind = %txn.kind(), "transaction recorded");
        Ok(txn)
    }

    /// Replaces description and amount; unknown ids are ignored.
    pub fn update(
        ledger: &mut Ledger,
        id: Uuid,
        description: &str,
        amount: f64,
    ) -> ServiceResult<()> {
        ledger.update(id, description, amount)?;
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Option<Transaction> {
        ledger.remove(id)
    }

    /// Clears every transaction, or only those of `kind`.
    pub fn clear(ledger: &mut Ledger, kind: Option<TransactionKind>) -> usize {
        let before = ledger.len();
        match kind {
            Some(kind) => ledger.clear_kind(kind),
            None => ledger.clear(),
        }
        let removed = before - ledger.len();
        debug!(removed, "transactions cleared");
        removed
    }
}
