use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::{transaction_service::parse_amount, NewTransaction, TransactionService};
use crate::ledger::{aggregate, category, Transaction};

use super::{parse_kind, usage};

const ADD_USAGE: &str = "add <income|expense> <description> <category> <amount> [YYYY-MM-DD]";
const EDIT_USAGE: &str = "edit <id> <description> <amount>";
const CLEAR_USAGE: &str = "clear [all|income|expense]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an income or expense", ADD_USAGE, cmd_add),
        CommandEntry::new(
            "edit",
            "Change a transaction's description and amount",
            EDIT_USAGE,
            cmd_edit,
        ),
        CommandEntry::new("remove", "Delete a transaction", "remove <id>", cmd_remove),
        CommandEntry::new(
            "clear",
            "Delete all transactions, or all of one type",
            CLEAR_USAGE,
            cmd_clear,
        ),
        CommandEntry::new(
            "list",
            "List transactions matching the active filter, newest first",
            "list",
            cmd_list,
        ),
        CommandEntry::new(
            "recent",
            "Show the most recent transactions",
            "recent [count]",
            cmd_recent,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind, description, category, amount, rest @ ..] = args else {
        return Err(usage(ADD_USAGE));
    };
    if rest.len() > 1 {
        return Err(usage(ADD_USAGE));
    }
    parse_kind(kind, ADD_USAGE)?;
    let draft = NewTransaction::parse(kind, description, category, amount, rest.first().copied())?;
    let txn = TransactionService::add(&mut context.ledger, draft)?;
    output::success(format!(
        "Added {} `{}` ({}) for {} on {}.",
        txn.kind(),
        txn.description(),
        txn.short_id(),
        context.format_amount(txn.amount()),
        txn.date()
    ));
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [reference, description, amount] = args else {
        return Err(usage(EDIT_USAGE));
    };
    let id = context.resolve_transaction(reference)?;
    TransactionService::update(&mut context.ledger, id, description, parse_amount(amount))?;
    if let Some(txn) = context.ledger.transaction(id) {
        output::success(format!(
            "Updated {}: `{}` {}.",
            txn.short_id(),
            txn.description(),
            context.format_amount(txn.amount())
        ));
    }
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [reference] = args else {
        return Err(usage("remove <id>"));
    };
    let id = context.resolve_transaction(reference)?;
    if let Some(removed) = TransactionService::remove(&mut context.ledger, id) {
        output::success(format!(
            "Removed {} `{}`.",
            removed.short_id(),
            removed.description()
        ));
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kind = match args {
        [] => None,
        [scope] if scope.eq_ignore_ascii_case("all") => None,
        [scope] => Some(parse_kind(scope, CLEAR_USAGE)?),
        _ => return Err(usage(CLEAR_USAGE)),
    };
    let scope = kind.map_or("all".to_string(), |kind| format!("all {kind}"));
    if !context.confirm(&format!("Delete {scope} transactions?"))? {
        output::info("Operation cancelled.");
        return Ok(());
    }
    let removed = TransactionService::clear(&mut context.ledger, kind);
    output::success(format!("Cleared {removed} transaction(s)."));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(usage("list"));
    }
    let transactions = aggregate::sorted_descending(&context.filtered());
    output::section(format!("Transactions: {}", context.filter.describe()));
    print_transactions(context, &transactions);
    Ok(())
}

fn cmd_recent(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let limit = match args {
        [] => context.config.recent_limit,
        [count] => count
            .parse::<usize>()
            .ok()
            .filter(|count| *count > 0)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!("`{count}` is not a positive count"))
            })?,
        _ => return Err(usage("recent [count]")),
    };
    let transactions = aggregate::recent(context.ledger.transactions(), limit);
    output::section("Recent transactions");
    print_transactions(context, &transactions);
    Ok(())
}

fn print_transactions(context: &ShellContext, transactions: &[Transaction]) {
    if transactions.is_empty() {
        output::info("No transactions to show.");
        return;
    }
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Date"),
        TableColumn::left("Description").max_width(40),
        TableColumn::left("Category"),
        TableColumn::left("Type"),
        TableColumn::right("Amount"),
    ]);
    for txn in transactions {
        table.push_row(vec![
            txn.short_id(),
            txn.date().to_string(),
            txn.description().to_string(),
            category::label(txn.category(), txn.kind()),
            txn.kind().label().to_string(),
            context.format_amount(txn.amount()),
        ]);
    }
    output::info(table.render());
    output::info(format!("{} transaction(s).", transactions.len()));
}
