//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Reasons a submitted expense is rejected before anything is recorded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Description was empty or only whitespace
    #[error("description must not be empty")]
    EmptyDescription,

    /// Amount text could not be parsed as a number
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    /// Amount parsed but was below zero
    #[error("amount must not be negative (got '{0}')")]
    NegativeAmount(String),

    /// Amount has more than two decimal places
    #[error("amount must have at most two decimal places (got '{0}')")]
    TooManyDecimals(String),

    /// Amount, or the running total it would produce, is above the maximum
    #[error("amount is too large (got '{0}')")]
    AmountTooLarge(String),
}

/// The main error type for expense ledger operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected input
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Ledger storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the filesystem or ledger storage
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Storage(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense ledger operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
