//! Ledger domain models, validation, derivations, and filters.

pub mod aggregate;
pub mod category;
pub mod date;
pub mod filter;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;
pub mod validation;

pub use aggregate::{
    CategoryTotal, ExpenseStats, MonthGroup, MonthKey, ReportSummary, DEFAULT_RECENT_LIMIT,
};
pub use category::CategoryOption;
pub use date::IsoDate;
pub use filter::{FilterSpec, TransactionFilter};
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};
pub use validation::{validate, Validation, ValidationError, MAX_DESCRIPTION_LEN};
