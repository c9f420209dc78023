use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::{CategoryService, SummaryService};
use crate::ledger::{aggregate, date::month_label, IsoDate, TransactionFilter, TransactionKind};

use super::{parse_kind, usage};

const FILTER_USAGE: &str = "filter [all|range <start> <end>|month <year> <month>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "filter",
            "Show or change the date filter used by listings, summaries and exports",
            FILTER_USAGE,
            cmd_filter,
        ),
        CommandEntry::new(
            "summary",
            "Show income, expenses, balance and budget usage",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "breakdown",
            "Totals per category, largest first",
            "breakdown [income|expense]",
            cmd_breakdown,
        ),
        CommandEntry::new(
            "months",
            "Totals per month, newest first",
            "months",
            cmd_months,
        ),
        CommandEntry::new(
            "categories",
            "List the available categories",
            "categories [income|expense]",
            cmd_categories,
        ),
    ]
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = match args {
        [] => {
            output::info(format!("Active filter: {}", context.filter.describe()));
            let months = SummaryService::available_months(&context.ledger);
            if !months.is_empty() {
                let labels: Vec<String> = months.iter().map(|month| month.label()).collect();
                output::info(format!("Months with data: {}", labels.join(", ")));
            }
            return Ok(());
        }
        [scope] if scope.eq_ignore_ascii_case("all") => TransactionFilter::All,
        [scope, start, end] if scope.eq_ignore_ascii_case("range") => {
            TransactionFilter::date_range(IsoDate::parse(start)?, IsoDate::parse(end)?)
        }
        [scope, year, month] if scope.eq_ignore_ascii_case("month") => {
            let year = year.parse::<i32>().map_err(|_| {
                CommandError::InvalidArguments(format!("`{year}` is not a valid year"))
            })?;
            let month = month
                .parse::<u32>()
                .ok()
                .filter(|month| (1..=12).contains(month))
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!(
                        "`{month}` is not a month number between 1 and 12"
                    ))
                })?;
            TransactionFilter::month_year(year, month)
        }
        _ => return Err(usage(FILTER_USAGE)),
    };
    context.filter = filter;
    output::success(format!(
        "Filter set to {} ({} transaction(s)).",
        context.filter.describe(),
        context.filtered().len()
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let overview = SummaryService::overview(&context.ledger, &context.filter);
    let summary = SummaryService::summarize(&context.ledger, &context.filter);

    output::section(format!("Summary: {}", context.filter.describe()));
    output::info(format!("  Income        : {}", context.format_amount(overview.income)));
    output::info(format!("  Expenses      : {}", context.format_amount(overview.expenses)));
    output::info(format!("  Net balance   : {}", context.format_amount(overview.remaining)));
    output::info(format!("  Transactions  : {}", summary.transaction_count));
    output::info(format!("  Budget used   : {:.1}%", overview.percentage_used));
    output::info(format!("  Savings rate  : {:.1}%", summary.savings_rate));

    let expenses = aggregate::filter_by_kind(&context.filtered(), TransactionKind::Expense);
    let stats = aggregate::expense_stats(&expenses);
    if stats.count > 0 {
        output::info(format!(
            "  Avg expense   : {} (highest {})",
            context.format_amount(stats.average),
            context.format_amount(stats.highest)
        ));
    }

    if overview.over_budget {
        output::warning(format!(
            "Over budget by {}.",
            context.format_amount(overview.over_budget_amount)
        ));
    }
    Ok(())
}

fn cmd_breakdown(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kind = match args {
        [] => TransactionKind::Expense,
        [kind] => parse_kind(kind, "breakdown [income|expense]")?,
        _ => return Err(usage("breakdown [income|expense]")),
    };
    let rows = SummaryService::breakdown(&context.ledger, &context.filter, kind);
    output::section(format!("{} by category: {}", kind.label(), context.filter.describe()));
    if rows.is_empty() {
        output::info(format!("No {kind} transactions to show."));
        return Ok(());
    }

    let total: f64 = rows.iter().map(|row| row.amount).sum();
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Count"),
        TableColumn::right("Amount"),
        TableColumn::right("Share"),
    ]);
    for row in &rows {
        let share = if total > 0.0 { row.amount / total * 100.0 } else { 0.0 };
        table.push_row(vec![
            row.label.clone(),
            row.count.to_string(),
            context.format_amount(row.amount),
            format!("{share:.1}%"),
        ]);
    }
    output::info(table.render());
    Ok(())
}

fn cmd_months(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let groups = SummaryService::months(&context.ledger, &context.filter);
    output::section("Monthly totals");
    if groups.is_empty() {
        output::info("No transactions to show.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Count"),
        TableColumn::right("Income"),
        TableColumn::right("Expenses"),
        TableColumn::right("Net"),
    ]);
    for group in &groups {
        let income = group.total_by_kind(TransactionKind::Income);
        let expenses = group.total_by_kind(TransactionKind::Expense);
        let label = group
            .transactions
            .first()
            .map(|txn| month_label(txn.date().year(), txn.date().month()))
            .unwrap_or_else(|| group.key.clone());
        table.push_row(vec![
            label,
            group.transactions.len().to_string(),
            context.format_amount(income),
            context.format_amount(expenses),
            context.format_amount(income - expenses),
        ]);
    }
    output::info(table.render());
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kinds = match args {
        [] => TransactionKind::ALL.to_vec(),
        [kind] => vec![parse_kind(kind, "categories [income|expense]")?],
        _ => return Err(usage("categories [income|expense]")),
    };
    for kind in kinds {
        output::section(format!("{} categories", kind.label()));
        for option in CategoryService::options(kind) {
            output::info(format!("  {:<16} {}", option.value, option.label));
        }
    }
    Ok(())
}
