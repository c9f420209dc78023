use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use super::{
    aggregate,
    date::IsoDate,
    transaction::{Transaction, TransactionKind},
    validation::{validate, Validation},
};

/// In-memory collection of transactions.
///
/// Storage is copy-on-write: a [`Ledger::snapshot`] taken before a mutation
/// keeps seeing the collection as it was.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Arc<Vec<Transaction>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Shared, immutable view of the current collection.
    pub fn snapshot(&self) -> Arc<Vec<Transaction>> {
        Arc::clone(&self.transactions)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    /// Validates and appends a new transaction.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        description: &str,
        category: &str,
        amount: f64,
        date: Option<IsoDate>,
    ) -> Result<Transaction, Validation> {
        if let Err(rejected) = validate(description, amount).into_result() {
            warn!(%kind, errors = ?rejected.messages(), "transaction rejected");
            return Err(rejected);
        }
        let transaction = Transaction::create(kind, description, category, amount, date);
        Arc::make_mut(&mut self.transactions).push(transaction.clone());
        debug!(id = %transaction.id(), %kind, amount, "transaction added");
        Ok(transaction)
    }

    /// Replaces description and amount of the transaction with `id`.
    ///
    /// An unknown `id` is not an error; the ledger is left unchanged.
    pub fn update(&mut self, id: Uuid, description: &str, amount: f64) -> Result<(), Validation> {
        if let Err(rejected) = validate(description, amount).into_result() {
            warn!(%id, errors = ?rejected.messages(), "transaction update rejected");
            return Err(rejected);
        }
        let Some(index) = self.position(id) else {
            debug!(%id, "update skipped: transaction not found");
            return Ok(());
        };
        Arc::make_mut(&mut self.transactions)[index].apply_update(description, amount);
        debug!(%id, amount, "transaction updated");
        Ok(())
    }

    /// Removes the transaction with `id`, returning it if it was present.
    pub fn remove(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.position(id)?;
        let removed = Arc::make_mut(&mut self.transactions).remove(index);
        debug!(%id, "transaction removed");
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.transactions = Arc::new(Vec::new());
        debug!("ledger cleared");
    }

    /// Drops every transaction of `kind`, keeping the rest in order.
    pub fn clear_kind(&mut self, kind: TransactionKind) {
        let kept: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|txn| txn.kind() != kind)
            .cloned()
            .collect();
        self.transactions = Arc::new(kept);
        debug!(%kind, "ledger cleared by kind");
    }

    pub fn total_by_kind(&self, kind: TransactionKind) -> f64 {
        aggregate::total_by_kind(&self.transactions, kind)
    }

    pub fn net_balance(&self) -> f64 {
        aggregate::net_balance(&self.transactions)
    }

    /// Resolves a unique id prefix (or full id) to a transaction id.
    pub fn resolve_id(&self, prefix: &str) -> Option<Uuid> {
        let needle = prefix.trim().to_lowercase().replace('-', "");
        if needle.is_empty() {
            return None;
        }
        let mut matches = self
            .transactions
            .iter()
            .filter(|txn| txn.id().simple().to_string().starts_with(&needle));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first.id())
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.transactions.iter().position(|txn| txn.id() == id)
    }
}
