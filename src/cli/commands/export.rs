use std::path::PathBuf;

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::export::{export_to_file, ExportFormat, ExportRequest};
use crate::ledger::{aggregate, IsoDate};

use super::usage;

const EXPORT_USAGE: &str = "export <csv|json|report> [path]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "export",
        "Write the filtered transactions to a CSV, JSON or printable report file",
        EXPORT_USAGE,
        cmd_export,
    )]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (format, target) = match args {
        [format] => (format.parse::<ExportFormat>()?, None),
        [format, path] => (format.parse::<ExportFormat>()?, Some(PathBuf::from(path))),
        _ => return Err(usage(EXPORT_USAGE)),
    };

    let transactions = aggregate::sorted_descending(&context.filtered());
    let request = ExportRequest {
        transactions: &transactions,
        filter: &context.filter,
        currency: context.config.currency_code(),
        page_lines: context.config.report_page_lines,
        generated_on: IsoDate::today(),
    };
    let path = match target {
        Some(path) if path.is_dir() => path.join(request.file_name(format)),
        Some(path) => path,
        None => context
            .config_manager
            .export_dir(&context.config)
            .join(request.file_name(format)),
    };

    export_to_file(format, &request, &path)?;
    output::success(format!(
        "Exported {} transaction(s) as {format} to {}.",
        transactions.len(),
        path.display()
    ));
    Ok(())
}
