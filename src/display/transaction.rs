//! Transaction display formatting
//!
//! Register views and single-transaction details for terminal output.

use crate::models::{Money, Transaction};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let repayment_icon = if txn.is_repayment { "↺" } else { " " };

    let purpose_display = if txn.purpose.is_empty() {
        "-".to_string()
    } else {
        txn.purpose.clone()
    };

    format!(
        "{} {} {:16} {:>12}  {:24} {}",
        repayment_icon,
        txn.occurred_on.format("%Y-%m-%d"),
        truncate(&txn.person, 16),
        txn.amount.format_signed(symbol),
        truncate(&purpose_display, 24),
        txn.recorded_at
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:1} {:10} {:16} {:>12}  {:24} {}\n",
        "R", "Date", "Person", "Amount", "Purpose", "Recorded"
    ));
    output.push_str(&"-".repeat(90));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    let net: Money = transactions.iter().map(|t| t.amount).sum();
    output.push_str(&"-".repeat(90));
    output.push('\n');
    output.push_str(&format!(
        "{} transaction(s), net {}\n",
        transactions.len(),
        net.format_signed(symbol)
    ));

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Recorded:  {}\n", txn.recorded_at));
    output.push_str(&format!("Date:      {}\n", txn.occurred_on.format("%Y-%m-%d")));
    output.push_str(&format!("Person:    {}\n", txn.person));
    output.push_str(&format!(
        "Amount:    {} ({})\n",
        txn.amount.format_signed(symbol),
        txn.direction_label()
    ));

    if !txn.purpose.is_empty() {
        output.push_str(&format!("Purpose:   {}\n", txn.purpose));
    }
    if txn.is_repayment {
        output.push_str("Type:      Repayment\n");
    }

    output
}

/// Truncate a string to a maximum width, padding short ones
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
