//! Core data models for the expense ledger

pub mod expense;
pub mod money;
pub mod month;

pub use expense::Expense;
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
