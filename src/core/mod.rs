//! Service layer sitting between the shell and the ledger.

pub mod services;
