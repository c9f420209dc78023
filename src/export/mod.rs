//! File exports of a (filtered) transaction list: CSV, JSON and a paginated
//! plain-text report.

pub mod csv_file;
pub mod json_file;
pub mod report;

use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use tracing::info;

use crate::{
    currency::CurrencyCode,
    errors::LedgerError,
    ledger::{IsoDate, ReportSummary, Transaction, TransactionFilter},
    utils::paths::ensure_dir,
};

pub use report::PrintableReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Report,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Report];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Report => "txt",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Report => "report",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "report" | "txt" | "pdf" => Ok(ExportFormat::Report),
            other => Err(LedgerError::Config(format!(
                "unknown export format `{other}` (expected csv, json or report)"
            ))),
        }
    }
}

/// Everything an export needs besides the destination.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub transactions: &'a [Transaction],
    pub filter: &'a TransactionFilter,
    pub currency: CurrencyCode,
    pub page_lines: usize,
    pub generated_on: IsoDate,
}

impl ExportRequest<'_> {
    /// `transactions_<...>.<ext>` derived from the active filter.
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!(
            "{}.{}",
            self.filter.file_stem(&self.generated_on),
            format.extension()
        )
    }
}

/// Writes the export in `format` to `writer`.
pub fn write_export<W: Write>(
    format: ExportFormat,
    request: &ExportRequest<'_>,
    writer: W,
) -> Result<(), LedgerError> {
    match format {
        ExportFormat::Csv => csv_file::write_transactions(writer, request.transactions, &request.currency),
        ExportFormat::Json => json_file::write_transactions(writer, request.transactions),
        ExportFormat::Report => {
            let summary = ReportSummary::from_transactions(request.transactions);
            let report = PrintableReport::build(
                request.transactions,
                &summary,
                &request.filter.describe(),
                &request.generated_on,
                request.page_lines,
                &request.currency,
            );
            report.write_to(writer)
        }
    }
}

/// Creates (or truncates) `path` and writes the export into it.
pub fn export_to_file(
    format: ExportFormat,
    request: &ExportRequest<'_>,
    path: &Path,
) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_export(format, request, &mut writer)?;
    writer.flush()?;
    info!(
        %format,
        path = %path.display(),
        count = request.transactions.len(),
        "export written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;

    #[test]
    fn formats_parse_and_name_files() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Report);
        assert!("xlsx".parse::<ExportFormat>().is_err());

        let filter = TransactionFilter::month_year(2026, 1);
        let request = ExportRequest {
            transactions: &[],
            filter: &filter,
            currency: CurrencyCode::default(),
            page_lines: 50,
            generated_on: IsoDate::parse("2026-10-18").unwrap(),
        };
        assert_eq!(request.file_name(ExportFormat::Csv), "transactions_2026-01.csv");
        assert_eq!(request.file_name(ExportFormat::Report), "transactions_2026-01.txt");
    }

    #[test]
    fn export_to_file_creates_parent_directories() {
        let temp = tempfile::tempdir().unwrap();
        let txns = vec![Transaction::create(
            TransactionKind::Expense,
            "Rent",
            "rent",
            1200.0,
            Some(IsoDate::parse("2026-01-01").unwrap()),
        )];
        let filter = TransactionFilter::All;
        let request = ExportRequest {
            transactions: &txns,
            filter: &filter,
            currency: CurrencyCode::default(),
            page_lines: 50,
            generated_on: IsoDate::parse("2026-10-18").unwrap(),
        };
        for format in ExportFormat::ALL {
            let path = temp.path().join("out").join(request.file_name(format));
            export_to_file(format, &request, &path).unwrap();
            let written = std::fs::read_to_string(&path).unwrap();
            assert!(written.contains("Rent"), "{format}: {written}");
        }
    }
}
