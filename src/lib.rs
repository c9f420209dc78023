#![doc(test(attr(deny(warnings))))]

//! MoneyFlow keeps an in-memory ledger of income and expense transactions and
//! derives totals, category breakdowns, month groupings, and exportable
//! reports from it.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("MoneyFlow tracing initialized.");
    });
}
