//! YAML Export functionality
//!
//! Human-readable export carrying the same document as the JSON export.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::models::Transaction;

/// Export transactions to YAML
pub fn export_ledger_yaml<W: Write>(transactions: &[Transaction], writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::new(transactions);
    let map_err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# IOU Ledger Export").map_err(map_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(map_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(map_err)?;
    writeln!(writer).map_err(map_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordedAt};
    use chrono::NaiveDate;

    #[test]
    fn test_export_yaml() {
        let txn = Transaction::new(
            "Alice",
            Money::from_cents(2000),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            RecordedAt::parse("2024-01-01 12:00:00").unwrap(),
        );

        let mut buffer = Vec::new();
        export_ledger_yaml(&[txn.clone()], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("# IOU Ledger Export"));
        assert!(output.contains("person: Alice"));
        assert!(output.contains("2024-01-01 12:00:00"));

        let parsed: LedgerExport = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.transactions, vec![txn]);
    }
}
