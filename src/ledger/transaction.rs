use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::date::IsoDate;
use super::validation::{validate, Validation};
use crate::errors::LedgerError;

/// Whether a transaction brings money in or takes it out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Capitalised label used in exports, e.g. `Income`.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(LedgerError::InvalidKind(s.to_string())),
        }
    }
}

/// A single income or expense record.
///
/// Fields are private so the only ways to obtain one are
/// [`Transaction::create`] and deserialization, which re-validates; only the
/// ledger may change the description and amount afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    id: Uuid,
    #[serde(rename = "type")]
    kind: TransactionKind,
    description: String,
    category: String,
    amount: f64,
    #[serde(rename = "dateISO")]
    date: IsoDate,
}

/// Wire shape accepted before the checks in `create` are applied.
#[derive(Deserialize)]
struct RawTransaction {
    id: Uuid,
    #[serde(rename = "type")]
    kind: TransactionKind,
    description: String,
    category: String,
    amount: f64,
    #[serde(rename = "dateISO")]
    date: IsoDate,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = Validation;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        validate(&raw.description, raw.amount).into_result()?;
        Ok(Self {
            id: raw.id,
            ..Self::create(
                raw.kind,
                &raw.description,
                &raw.category,
                raw.amount,
                Some(raw.date),
            )
        })
    }
}

impl Transaction {
    /// Builds a transaction from already validated input.
    ///
    /// The description is trimmed, the category lower-cased and the amount
    /// clamped to zero. A missing date means today's local calendar date.
    pub fn create(
        kind: TransactionKind,
        description: &str,
        category: &str,
        amount: f64,
        date: Option<IsoDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            description: description.trim().to_string(),
            category: category.trim().to_lowercase(),
            amount: clamp_amount(amount),
            date: date.unwrap_or_else(IsoDate::today),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date(&self) -> &IsoDate {
        &self.date
    }

    /// Short identifier shown in listings.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    pub(crate) fn apply_update(&mut self, description: &str, amount: f64) {
        self.description = description.trim().to_string();
        self.amount = clamp_amount(amount);
    }
}

/// `max(0, amount)`, with non-finite input collapsing to zero.
pub(crate) fn clamp_amount(amount: f64) -> f64 {
    if amount.is_finite() {
        amount.max(0.0)
    } else {
        0.0
    }
}
