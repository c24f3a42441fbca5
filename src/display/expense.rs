//! Expense display formatting
//!
//! Text views for the live session list and the monthly ledger summary.

use crate::models::{Expense, Money};
use crate::storage::MonthSummary;

const DESCRIPTION_WIDTH: usize = 30;
const AMOUNT_WIDTH: usize = 12;

/// Format one description/amount pair as a list row
pub fn format_expense_row(description: &str, amount: Money, symbol: &str) -> String {
    format!(
        "{} {:>width$}",
        truncate(description, DESCRIPTION_WIDTH),
        amount.format_with_symbol(symbol),
        width = AMOUNT_WIDTH
    )
}

/// Format the expenses entered this session plus their running total
pub fn format_session_view(entries: &[Expense], total: Money, symbol: &str) -> String {
    let mut output = String::new();

    if entries.is_empty() {
        output.push_str("No expenses entered yet.\n");
    } else {
        for expense in entries {
            output.push_str(&format_expense_row(
                expense.description(),
                expense.amount(),
                symbol,
            ));
            output.push('\n');
        }
    }

    output.push_str(&format!("Total Expense: {}\n", total.format_with_symbol(symbol)));
    output
}

/// Format a month's ledger: every entry, the total, and a skipped-line notice
pub fn format_month_summary(summary: &MonthSummary, symbol: &str, show_skipped: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Monthly Expenses for {}\n", summary.month));
    output.push_str(&"-".repeat(DESCRIPTION_WIDTH + AMOUNT_WIDTH + 1));
    output.push('\n');

    if summary.entries.is_empty() {
        output.push_str("No expenses recorded this month.\n");
    } else {
        for entry in &summary.entries {
            output.push_str(&format_expense_row(&entry.description, entry.amount, symbol));
            output.push('\n');
        }
    }

    output.push_str(&format!(
        "Monthly Total: {}\n",
        summary.total.format_with_symbol(symbol)
    ));

    if show_skipped && !summary.skipped.is_empty() {
        output.push_str(&format!(
            "Warning: {} malformed line(s) in the ledger were ignored.\n",
            summary.skipped.len()
        ));
        for skipped in &summary.skipped {
            output.push_str(&format!("  line {}: {}\n", skipped.line, skipped.reason));
        }
    }

    output
}

/// Pad or cut to a fixed number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthKey;
    use crate::storage::{LedgerEntry, SkipReason, SkippedLine};

    fn summary(entries: Vec<LedgerEntry>, skipped: Vec<SkippedLine>) -> MonthSummary {
        let total = entries.iter().map(|e| e.amount).sum();
        MonthSummary {
            month: MonthKey::new(2024, 3).unwrap(),
            entries,
            total,
            skipped,
        }
    }

    #[test]
    fn test_row_alignment() {
        let row = format_expense_row("Coffee", Money::from_cents(350), "$");
        assert!(row.starts_with("Coffee "));
        assert!(row.ends_with("       $3.50"));
        assert_eq!(row.chars().count(), DESCRIPTION_WIDTH + 1 + AMOUNT_WIDTH);
    }

    #[test]
    fn test_long_description_truncated() {
        let long = "ü".repeat(50);
        let row = format_expense_row(&long, Money::from_cents(100), "$");
        assert!(row.contains("..."));
        assert_eq!(row.chars().count(), DESCRIPTION_WIDTH + 1 + AMOUNT_WIDTH);
    }

    #[test]
    fn test_session_view() {
        let entries = vec![
            Expense::new("Lunch", Money::from_cents(1200)).unwrap(),
            Expense::new("Taxi", Money::from_cents(825)).unwrap(),
        ];
        let output = format_session_view(&entries, Money::from_cents(2025), "$");

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Lunch"));
        assert!(lines[1].starts_with("Taxi"));
        assert_eq!(lines[2], "Total Expense: $20.25");
    }

    #[test]
    fn test_empty_session_view() {
        let output = format_session_view(&[], Money::zero(), "$");
        assert!(output.contains("No expenses entered yet."));
        assert!(output.contains("Total Expense: $0.00"));
    }

    #[test]
    fn test_month_summary() {
        let output = format_month_summary(
            &summary(
                vec![LedgerEntry::new("Lunch", Money::from_cents(1200))],
                Vec::new(),
            ),
            "€",
            true,
        );

        assert!(output.starts_with("Monthly Expenses for 2024-03\n"));
        assert!(output.contains("Lunch"));
        assert!(output.contains("Monthly Total: €12.00"));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_month_summary_skipped_notice() {
        let skipped = vec![SkippedLine {
            line: 2,
            text: "junk".into(),
            reason: SkipReason::FieldCount(1),
        }];

        let shown = format_month_summary(&summary(Vec::new(), skipped.clone()), "$", true);
        assert!(shown.contains("No expenses recorded this month."));
        assert!(shown.contains("1 malformed line(s)"));
        assert!(shown.contains("line 2: expected 2 fields, found 1"));

        let hidden = format_month_summary(&summary(Vec::new(), skipped), "$", false);
        assert!(!hidden.contains("malformed"));
    }
}
