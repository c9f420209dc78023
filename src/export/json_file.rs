use std::io::Write;

use crate::{errors::LedgerError, ledger::Transaction};

/// Pretty JSON array using the transaction wire names (`type`, `dateISO`).
pub fn write_transactions<W: Write>(mut writer: W, transactions: &[Transaction]) -> Result<(), LedgerError> {
    serde_json::to_writer_pretty(&mut writer, transactions)?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{IsoDate, TransactionKind};

    #[test]
    fn writes_array_that_reads_back() {
        let txns = vec![Transaction::create(
            TransactionKind::Income,
            "Salary",
            "salary",
            3000.0,
            Some(IsoDate::parse("2026-01-05").unwrap()),
        )];
        let mut buffer = Vec::new();
        write_transactions(&mut buffer, &txns).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["type"], "income");
        assert_eq!(value[0]["dateISO"], "2026-01-05");
        let back: Vec<Transaction> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(back, txns);
    }
}
