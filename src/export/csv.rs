//! CSV Export functionality
//!
//! One row per transaction, in the column layout of the ledger file.

use std::io::Write;

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

#[derive(Serialize)]
struct CsvRow<'a> {
    person: &'a str,
    amount: String,
    date: String,
    purpose: &'a str,
    is_repayment: bool,
    timestamp: String,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            person: &txn.person,
            amount: format!("{:.2}", txn.amount.to_decimal()),
            date: txn.occurred_on.format("%Y-%m-%d").to_string(),
            purpose: &txn.purpose,
            is_repayment: txn.is_repayment,
            timestamp: txn.recorded_at.to_string(),
        }
    }
}

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer
            .write_record([
                "person",
                "amount",
                "date",
                "purpose",
                "is_repayment",
                "timestamp",
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    for txn in transactions {
        csv_writer
            .serialize(CsvRow::from(txn))
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordedAt};
    use chrono::NaiveDate;

    fn export(transactions: &[Transaction]) -> String {
        let mut buffer = Vec::new();
        export_transactions_csv(transactions, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_export_transactions_csv() {
        let txn = Transaction::new(
            "Alice",
            Money::from_cents(-505),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            RecordedAt::parse("2024-01-02 08:15:00").unwrap(),
        )
        .with_purpose("Coffee, cake")
        .as_repayment();

        let output = export(&[txn]);
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("person,amount,date,purpose,is_repayment,timestamp")
        );
        assert_eq!(
            lines.next(),
            Some("Alice,-5.05,2024-01-02,\"Coffee, cake\",true,2024-01-02 08:15:00")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_export_has_header() {
        assert_eq!(
            export(&[]),
            "person,amount,date,purpose,is_repayment,timestamp\n"
        );
    }
}
