pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::CategoryService;
pub use summary_service::{BudgetOverview, SummaryService};
pub use transaction_service::{NewTransaction, TransactionService};

use crate::errors::LedgerError;
use crate::ledger::Validation;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Validation(#[from] Validation),
}
