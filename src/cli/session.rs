//! Interactive entry form
//!
//! Prompts for a description and an amount, keeps the live list and running
//! total on screen, and shows the monthly ledger on request.

use std::io::{BufRead, Write};

use super::expense::load_month_summary;
use crate::config::settings::Settings;
use crate::display::{format_month_summary, format_session_view};
use crate::error::ExpenseResult;
use crate::services::ExpenseSession;

/// Typed at the description prompt to show the monthly ledger
pub const MONTH_COMMAND: &str = ":month";
/// Typed at the description prompt to leave the form
pub const QUIT_COMMAND: &str = ":quit";

/// Run the form until `:quit` or end of input
pub fn run_session<R: BufRead, W: Write>(
    session: &mut ExpenseSession,
    settings: &Settings,
    input: &mut R,
    out: &mut W,
) -> ExpenseResult<()> {
    writeln!(
        out,
        "Expense Tracker. Type {} to see this month's ledger, {} to exit.",
        MONTH_COMMAND, QUIT_COMMAND
    )?;
    write!(
        out,
        "{}",
        format_session_view(
            session.list_entries(),
            session.running_total(),
            &settings.currency_symbol
        )
    )?;

    loop {
        let Some(description) = prompt(input, out, "Description: ")? else {
            break;
        };

        match description.trim() {
            QUIT_COMMAND => break,
            MONTH_COMMAND => {
                let summary = load_month_summary(session, out)?;
                write!(
                    out,
                    "{}",
                    format_month_summary(
                        &summary,
                        &settings.currency_symbol,
                        settings.report_skipped_lines
                    )
                )?;
                continue;
            }
            _ => {}
        }

        let Some(amount) = prompt(input, out, "Amount: ")? else {
            break;
        };

        match session.add_expense(&description, &amount) {
            Ok(recorded) => {
                if let Some(e) = &recorded.persist_error {
                    writeln!(out, "Error saving expense to file: {}", e)?;
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
            }
            Err(e) => {
                writeln!(
                    out,
                    "Invalid input: {}. Please enter a valid description and amount.",
                    e
                )?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Print a prompt and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> ExpenseResult<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
}
