//! One-shot expense commands
//!
//! `add` records a single expense; `month` prints the current month's
//! ledger.

use std::io::Write;

use crate::config::settings::Settings;
use crate::display::{format_month_summary, format_session_view};
use crate::error::ExpenseResult;
use crate::models::MonthKey;
use crate::services::ExpenseSession;
use crate::storage::MonthSummary;

/// Record one expense and print the result
///
/// A validation failure is returned as an error. A failed ledger write is
/// only reported, since the expense was still accepted.
pub fn handle_add_command<W: Write>(
    session: &mut ExpenseSession,
    settings: &Settings,
    description: &str,
    amount: &str,
    out: &mut W,
) -> ExpenseResult<()> {
    let recorded = session.add_expense(description, amount)?;

    writeln!(
        out,
        "Added: {} ({})",
        recorded.expense.description(),
        recorded
            .expense
            .amount()
            .format_with_symbol(&settings.currency_symbol)
    )?;

    if let Some(e) = &recorded.persist_error {
        writeln!(out, "Warning: error saving expense to file: {}", e)?;
    }

    write!(
        out,
        "{}",
        format_session_view(
            session.list_entries(),
            session.running_total(),
            &settings.currency_symbol
        )
    )?;

    Ok(())
}

/// Print the current month's entries and total
///
/// An unreadable ledger is reported and shown as an empty month.
pub fn handle_month_command<W: Write>(
    session: &ExpenseSession,
    settings: &Settings,
    json: bool,
    out: &mut W,
) -> ExpenseResult<()> {
    let summary = load_month_summary(session, out)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(
            out,
            "{}",
            format_month_summary(
                &summary,
                &settings.currency_symbol,
                settings.report_skipped_lines
            )
        )?;
    }

    Ok(())
}

pub(crate) fn load_month_summary<W: Write>(
    session: &ExpenseSession,
    out: &mut W,
) -> ExpenseResult<MonthSummary> {
    match session.current_month_summary() {
        Ok(summary) => Ok(summary),
        Err(e) => {
            writeln!(out, "Could not read this month's ledger ({}); no data available.", e)?;
            Ok(MonthSummary::empty(MonthKey::current()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::storage::LedgerStore;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_session(temp_dir: &TempDir) -> ExpenseSession {
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        ExpenseSession::new(LedgerStore::new(paths))
    }

    #[test]
    fn test_add_prints_expense_and_total() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = create_test_session(&temp_dir);
        let mut out = Vec::new();

        handle_add_command(&mut session, &Settings::default(), "Coffee", "3.5", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Added: Coffee ($3.50)"));
        assert!(text.contains("Total Expense: $3.50"));
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = create_test_session(&temp_dir);
        let mut out = Vec::new();

        let err = handle_add_command(&mut session, &Settings::default(), "Coffee", "-1", &mut out)
            .unwrap_err();

        assert!(err.is_validation());
        assert!(out.is_empty());
        assert!(session.list_entries().is_empty());
    }

    #[test]
    fn test_add_reports_save_failure() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ledgers"), "").unwrap();
        let mut session = create_test_session(&temp_dir);
        let mut out = Vec::new();

        handle_add_command(&mut session, &Settings::default(), "Coffee", "3.50", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Warning: error saving expense to file"));
        assert!(text.contains("Total Expense: $3.50"));
    }

    #[test]
    fn test_month_unreadable_shows_no_data() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ledgers"), "").unwrap();
        let session = create_test_session(&temp_dir);
        let mut out = Vec::new();

        handle_month_command(&session, &Settings::default(), false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("no data available"));
        assert!(text.contains("Monthly Total: $0.00"));
    }

    #[test]
    fn test_month_json() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = create_test_session(&temp_dir);
        let month = MonthKey::current();
        session.add_expense("Lunch", "12").unwrap();
        let mut out = Vec::new();

        handle_month_command(&session, &Settings::default(), true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        if value["month"] == month.to_string() {
            assert_eq!(value["total"], 1200);
            assert_eq!(value["entries"][0]["description"], "Lunch");
        }
    }
}
