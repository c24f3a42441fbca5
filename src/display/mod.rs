//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_expense_row, format_month_summary, format_session_view};
