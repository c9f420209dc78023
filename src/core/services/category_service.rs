use crate::errors::LedgerError;
use crate::ledger::{category, CategoryOption, TransactionKind};

use super::ServiceResult;

pub struct CategoryService;

impl CategoryService {
    pub fn options(kind: TransactionKind) -> &'static [CategoryOption] {
        category::options(kind)
    }

    pub fn label(value: &str, kind: TransactionKind) -> String {
        category::label(value, kind)
    }

    /// Normalizes `value` and checks it against the catalog for `kind`.
    pub fn ensure_valid(value: &str, kind: TransactionKind) -> ServiceResult<String> {
        let normalized = value.trim().to_lowercase();
        if category::is_valid(&normalized, kind) {
            Ok(normalized)
        } else {
            Err(LedgerError::UnknownCategory {
                value: value.trim().to_string(),
                kind: kind.to_string(),
            }
            .into())
        }
    }
}
