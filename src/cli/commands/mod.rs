pub mod config;
pub mod export;
pub mod summary;
pub mod system;
pub mod transaction;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::ledger::TransactionKind;

const ROOT_COMMAND_ORDER: &[&str] = &[
    "add",
    "edit",
    "remove",
    "clear",
    "list",
    "recent",
    "filter",
    "summary",
    "breakdown",
    "months",
    "categories",
    "export",
    "config",
    "help",
    "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut entries = Vec::new();
    entries.extend(transaction::definitions());
    entries.extend(summary::definitions());
    entries.extend(export::definitions());
    entries.extend(config::definitions());
    entries.extend(system::definitions());
    entries
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

/// Parses an `income`/`expense` argument, reporting `usage` when it is wrong.
pub(crate) fn parse_kind(raw: &str, usage: &str) -> Result<TransactionKind, CommandError> {
    raw.parse::<TransactionKind>()
        .map_err(|err| CommandError::InvalidArguments(format!("{err}. usage: {usage}")))
}

pub(crate) fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {text}"))
}
