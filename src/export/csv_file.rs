use std::io::{self, Write};

use csv::Writer;
use serde::Serialize;

use crate::{
    currency::{plain_amount, CurrencyCode},
    errors::LedgerError,
    ledger::Transaction,
};

const HEADERS: [&str; 5] = ["Date", "Description", "Category", "Type", "Amount"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CsvRow<'a> {
    date: String,
    description: &'a str,
    category: &'a str,
    #[serde(rename = "Type")]
    kind: &'static str,
    amount: String,
}

impl<'a> CsvRow<'a> {
    fn new(txn: &'a Transaction, currency: &CurrencyCode) -> Self {
        Self {
            date: txn.date().display(),
            description: txn.description(),
            category: txn.category(),
            kind: txn.kind().label(),
            amount: plain_amount(txn.amount(), currency),
        }
    }
}

/// Writes one CSV row per transaction, preceded by the header row.
pub fn write_transactions<W: Write>(
    writer: W,
    transactions: &[Transaction],
    currency: &CurrencyCode,
) -> Result<(), LedgerError> {
    let mut csv = Writer::from_writer(writer);
    if transactions.is_empty() {
        csv.write_record(HEADERS)?;
    }
    for txn in transactions {
        csv.serialize(CsvRow::new(txn, currency))?;
    }
    csv.flush()?;
    Ok(())
}

pub fn to_string(transactions: &[Transaction], currency: &CurrencyCode) -> Result<String, LedgerError> {
    let mut buffer = Vec::new();
    write_transactions(&mut buffer, transactions, currency)?;
    into_text(buffer)
}

fn into_text(buffer: Vec<u8>) -> Result<String, LedgerError> {
    String::from_utf8(buffer)
        .map_err(|err| LedgerError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
