//! Paginated plain-text financial report.

use std::io::Write;

use crate::{
    currency::{plain_amount, CurrencyCode},
    errors::LedgerError,
    ledger::{IsoDate, ReportSummary, Transaction},
};

/// Column width descriptions are wrapped at.
pub const DESCRIPTION_WIDTH: usize = 30;
/// Separates pages in the rendered output.
pub const PAGE_BREAK: char = '\u{c}';

/// Section title, table header and a four-line row fit on any page.
pub const MIN_PAGE_LINES: usize = 7;

const DATE_WIDTH: usize = 13;
const TYPE_WIDTH: usize = 8;
const AMOUNT_WIDTH: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintableReport {
    pages: Vec<Vec<String>>,
}

impl PrintableReport {
    /// Lays out title, summary and the transaction table over pages of at
    /// most `page_lines` lines, raised to [`MIN_PAGE_LINES`]. Table headers
    /// are repeated on every page the table spans. A transaction's wrapped
    /// lines stay on one page unless they outnumber a page below the header.
    pub fn build(
        transactions: &[Transaction],
        summary: &ReportSummary,
        filter_label: &str,
        generated_on: &IsoDate,
        page_lines: usize,
        currency: &CurrencyCode,
    ) -> Self {
        let mut pages = Pages::new(page_lines.max(MIN_PAGE_LINES));

        pages.push("Financial Report".into());
        pages.push(format!("Generated: {}", long_date(generated_on)));
        if !filter_label.is_empty() {
            pages.push(format!("Filter: {filter_label}"));
        }
        pages.push(String::new());
        pages.push("Summary".into());
        for line in summary_lines(summary, currency) {
            pages.push(line);
        }
        pages.push(String::new());

        let first_row = transactions
            .first()
            .map(|txn| transaction_row(txn, currency).len())
            .unwrap_or(0);
        pages.reserve(1 + table_header().len() + first_row);
        pages.push("Transaction Details".into());
        pages.push_all(table_header());

        if transactions.is_empty() {
            pages.push("No transactions.".into());
        }
        for txn in transactions {
            let row = transaction_row(txn, currency);
            if !pages.fits(row.len()) {
                pages.break_page();
                pages.push_all(table_header());
            }
            pages.push_all(row);
        }

        Self {
            pages: pages.finish(),
        }
    }

    pub fn pages(&self) -> &[Vec<String>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages joined by form feeds.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, page) in self.pages.iter().enumerate() {
            if index > 0 {
                out.push(PAGE_BREAK);
                out.push('\n');
            }
            for line in page {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), LedgerError> {
        writer.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

struct Pages {
    limit: usize,
    done: Vec<Vec<String>>,
    current: Vec<String>,
}

impl Pages {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            done: Vec::new(),
            current: Vec::new(),
        }
    }

    fn fits(&self, lines: usize) -> bool {
        self.current.len() + lines <= self.limit
    }

    /// Starts a new page unless `lines` more still fit on this one.
    fn reserve(&mut self, lines: usize) {
        if !self.fits(lines) && !self.current.is_empty() {
            self.break_page();
        }
    }

    fn push(&mut self, line: String) {
        if self.current.len() >= self.limit {
            self.break_page();
        }
        if line.is_empty() && self.current.is_empty() {
            return;
        }
        self.current.push(line);
    }

    fn push_all(&mut self, lines: Vec<String>) {
        for line in lines {
            self.push(line);
        }
    }

    fn break_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.done.push(page);
    }

    fn finish(mut self) -> Vec<Vec<String>> {
        if !self.current.is_empty() {
            self.break_page();
        }
        self.done
    }
}

fn long_date(date: &IsoDate) -> String {
    date.to_naive()
        .map(|naive| naive.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

fn summary_lines(summary: &ReportSummary, currency: &CurrencyCode) -> Vec<String> {
    vec![
        format!("Total Income: {}", plain_amount(summary.total_income, currency)),
        format!("Total Expenses: {}", plain_amount(summary.total_expenses, currency)),
        format!("Net Balance: {}", plain_amount(summary.net_balance, currency)),
        format!("Number of Transactions: {}", summary.transaction_count),
        format!("Average Transaction: {}", plain_amount(summary.average_transaction, currency)),
        format!("Expense Ratio: {:.1}%", summary.expense_ratio),
        format!("Savings Rate: {:.1}%", summary.savings_rate),
    ]
}

fn table_header() -> Vec<String> {
    let header = format_columns("Date", "Description", "Type", "Amount");
    let rule = "-".repeat(header.chars().count());
    vec![header, rule]
}

fn format_columns(date: &str, description: &str, kind: &str, amount: &str) -> String {
    format!(
        "{date:<DATE_WIDTH$} {description:<DESCRIPTION_WIDTH$} {kind:<TYPE_WIDTH$} {amount:>AMOUNT_WIDTH$}"
    )
    .trim_end()
    .to_string()
}

fn transaction_row(txn: &Transaction, currency: &CurrencyCode) -> Vec<String> {
    let wrapped = wrap_text(txn.description(), DESCRIPTION_WIDTH);
    let mut lines = Vec::with_capacity(wrapped.len());
    for (index, part) in wrapped.iter().enumerate() {
        if index == 0 {
            lines.push(format_columns(
                &txn.date().display(),
                part,
                txn.kind().label(),
                &plain_amount(txn.amount(), currency),
            ));
        } else {
            lines.push(format_columns("", part, "", ""));
        }
    }
    lines
}

/// Greedy word wrap; words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
