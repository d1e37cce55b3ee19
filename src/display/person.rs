//! Person display formatting
//!
//! Formats person balances for terminal output in table and detail views.

use crate::models::Money;
use crate::reports::{PersonSummary, TopBalances};
use crate::services::PersonBalance;

use super::report::format_bar;
use super::transaction::format_transaction_register;

/// What a balance means from the user's side
pub fn balance_status_label(balance: Money) -> &'static str {
    if balance.is_positive() {
        "owes you"
    } else if balance.is_negative() {
        "you owe"
    } else {
        "settled"
    }
}

/// Format person rows as a table
pub fn format_person_list(rows: &[PersonSummary], symbol: &str) -> String {
    if rows.is_empty() {
        return "No people found.\n".to_string();
    }

    let name_width = rows
        .iter()
        .map(|r| r.person.display().chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:<8}  {:>5}  {}\n",
        "Person",
        "Balance",
        "Status",
        "Txns",
        "Last Activity",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:-<8}  {:->5}  {:-<13}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for row in rows {
        let last = row
            .last_activity
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:<8}  {:>5}  {}\n",
            row.person.display(),
            row.balance.format_signed(symbol),
            balance_status_label(row.balance),
            row.transaction_count,
            last,
            name_width = name_width,
        ));
    }

    output
}

/// Format one person's balance and history
pub fn format_balance_details(result: &PersonBalance, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Person:   {}\n", result.person));
    output.push_str(&format!(
        "Balance:  {} ({})\n",
        result.balance.format_signed(symbol),
        balance_status_label(result.balance)
    ));

    if result.transactions.is_empty() {
        output.push_str("No transactions with this person.\n");
        return output;
    }

    output.push('\n');
    output.push_str(&format_transaction_register(&result.transactions, symbol));
    output
}

/// Format the largest balances on each side with bars
pub fn format_top_balances(top: &TopBalances, symbol: &str) -> String {
    let mut output = String::new();

    let max_cents = top
        .owed_to_me
        .iter()
        .chain(&top.i_owe)
        .map(|r| r.balance.abs().cents())
        .max()
        .unwrap_or(0) as f64;

    let mut section = |title: &str, rows: &[PersonSummary]| {
        output.push_str(title);
        output.push('\n');
        if rows.is_empty() {
            output.push_str("  (none)\n");
        }
        for row in rows {
            output.push_str(&format!(
                "  {:<16} {:>12}  {}\n",
                row.person.display(),
                row.balance.abs().format_with_symbol(symbol),
                format_bar(row.balance.abs().cents() as f64, max_cents, 20)
            ));
        }
    };

    section("Owed to you", &top.owed_to_me);
    section("You owe", &top.i_owe);

    output
}
