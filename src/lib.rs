//! Expense Ledger - a single-user expense recorder
//!
//! Expenses are entered as description/amount pairs. Each run keeps a live
//! list and running total in memory, and every accepted expense is appended
//! to a plain-text ledger for the current calendar month.
//!
//! # Architecture
//!
//! - `config`: Data directory and user settings
//! - `error`: Custom error types
//! - `models`: Money, month keys and expenses
//! - `storage`: Monthly ledger files
//! - `services`: The in-memory session
//! - `display`: Text formatting for the terminal
//! - `cli`: Command handlers and the interactive form
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_ledger::config::ExpensePaths;
//! use expense_ledger::services::ExpenseSession;
//! use expense_ledger::storage::LedgerStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let paths = ExpensePaths::new()?;
//! let mut session = ExpenseSession::new(LedgerStore::new(paths));
//! session.add_expense("Coffee", "3.50")?;
//! println!("{}", session.format_total());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult, ValidationError};
