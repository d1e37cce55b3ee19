//! Activity over time
//!
//! Monthly net flow and a day-by-day cumulative position.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction};

/// Net flow for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyActivity {
    /// Month as `YYYY-MM`
    pub month: String,
    pub net: Money,
    pub transaction_count: usize,
}

/// Net flow per month, oldest first
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub months: Vec<MonthlyActivity>,
}

impl MonthlyReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut buckets: BTreeMap<String, (Money, usize)> = BTreeMap::new();
        for txn in transactions {
            let entry = buckets
                .entry(txn.occurred_on.format("%Y-%m").to_string())
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let months = buckets
            .into_iter()
            .map(|(month, (net, transaction_count))| MonthlyActivity {
                month,
                net,
                transaction_count,
            })
            .collect();

        Self { months }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Activity\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.months.is_empty() {
            output.push_str("No transactions recorded.\n");
            return output;
        }

        output.push_str(&format!("{:<10} {:>16} {:>10}\n", "Month", "Net", "Count"));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for month in &self.months {
            output.push_str(&format!(
                "{:<10} {:>16} {:>10}\n",
                month.month,
                month.net.format_signed(symbol),
                month.transaction_count
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

        csv_writer
            .write_record(["month", "net", "transaction_count"])
            .map_err(export_err)?;
        for month in &self.months {
            csv_writer
                .write_record([
                    month.month.clone(),
                    format!("{:.2}", month.net.to_decimal()),
                    month.transaction_count.to_string(),
                ])
                .map_err(export_err)?;
        }

        csv_writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))
    }
}

/// One day of the cumulative flow
#[derive(Debug, Clone, PartialEq)]
pub struct FlowPoint {
    pub date: NaiveDate,
    /// Net of that day's transactions
    pub net: Money,
    /// Running net position up to and including `date`
    pub cumulative: Money,
}

/// Cumulative net position per transaction date
#[derive(Debug, Clone)]
pub struct FlowReport {
    pub points: Vec<FlowPoint>,
}

impl FlowReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut daily: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for txn in transactions {
            *daily.entry(txn.occurred_on).or_default() += txn.amount;
        }

        let mut running = Money::zero();
        let points = daily
            .into_iter()
            .map(|(date, net)| {
                running += net;
                FlowPoint {
                    date,
                    net,
                    cumulative: running,
                }
            })
            .collect();

        Self { points }
    }

    /// Position after the last day, zero when empty
    pub fn final_position(&self) -> Money {
        self.points
            .last()
            .map(|p| p.cumulative)
            .unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Cumulative Flow\n");
        output.push_str(&"=".repeat(46));
        output.push('\n');

        if self.points.is_empty() {
            output.push_str("No transactions recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<12} {:>16} {:>16}\n",
            "Date", "Day Net", "Position"
        ));
        output.push_str(&"-".repeat(46));
        output.push('\n');
        for point in &self.points {
            output.push_str(&format!(
                "{:<12} {:>16} {:>16}\n",
                point.date.format("%Y-%m-%d"),
                point.net.format_signed(symbol),
                point.cumulative.format_signed(symbol)
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

        csv_writer
            .write_record(["date", "net", "cumulative"])
            .map_err(export_err)?;
        for point in &self.points {
            csv_writer
                .write_record([
                    point.date.format("%Y-%m-%d").to_string(),
                    format!("{:.2}", point.net.to_decimal()),
                    format!("{:.2}", point.cumulative.to_decimal()),
                ])
                .map_err(export_err)?;
        }

        csv_writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordedAt;

    fn txn(cents: i64, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            "Alice",
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            RecordedAt::parse("2024-06-01 00:00:00").unwrap(),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(2000, 2024, 2, 10),
            txn(-500, 2024, 1, 5),
            txn(-300, 2024, 2, 10),
            txn(1000, 2023, 12, 31),
        ]
    }

    #[test]
    fn test_monthly_buckets_ascending() {
        let report = MonthlyReport::generate(&sample());
        let months: Vec<_> = report.months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-02"]);

        let feb = &report.months[2];
        assert_eq!(feb.net, Money::from_cents(1700));
        assert_eq!(feb.transaction_count, 2);
    }

    #[test]
    fn test_flow_is_cumulative() {
        let report = FlowReport::generate(&sample());
        let cumulative: Vec<_> = report.points.iter().map(|p| p.cumulative.cents()).collect();
        assert_eq!(cumulative, vec![1000, 500, 2200]);
        assert_eq!(report.points[2].net, Money::from_cents(1700));
        assert_eq!(report.final_position(), Money::from_cents(2200));
    }

    #[test]
    fn test_empty_reports() {
        assert!(MonthlyReport::generate(&[]).months.is_empty());
        let flow = FlowReport::generate(&[]);
        assert_eq!(flow.final_position(), Money::zero());
        assert!(flow.format_terminal("$").contains("No transactions"));
    }

    #[test]
    fn test_monthly_format() {
        let output = MonthlyReport::generate(&sample()).format_terminal("$");
        assert!(output.contains("2024-02"));
        assert!(output.contains("+$17.00"));
        assert!(output.contains("-$5.00"));
    }

    #[test]
    fn test_export_csv() {
        let mut buffer = Vec::new();
        FlowReport::generate(&sample())
            .export_csv(&mut buffer)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            "date,net,cumulative\n2023-12-31,10.00,10.00\n2024-01-05,-5.00,5.00\n2024-02-10,17.00,22.00\n"
        );
    }
}
