//! Expense model
//!
//! An expense is a description and a non-negative amount. Once built it is
//! never changed.

use std::fmt;

use super::money::{Money, MoneyParseError};
use crate::error::ValidationError;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    description: String,
    amount: Money,
}

impl Expense {
    /// Build an expense from already-typed values
    ///
    /// The description is trimmed; it must be non-empty and the amount must
    /// not be negative.
    pub fn new(description: impl AsRef<str>, amount: Money) -> Result<Self, ValidationError> {
        let description = description.as_ref().trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if amount.is_negative() {
            return Err(ValidationError::NegativeAmount(amount.to_decimal_string()));
        }

        Ok(Self {
            description: description.to_string(),
            amount,
        })
    }

    /// Build an expense from raw form input
    pub fn from_input(description: &str, amount_text: &str) -> Result<Self, ValidationError> {
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let text = amount_text.trim().to_string();

        // A minus sign on any non-zero digits is negative, however small
        let minus_nonzero = text.strip_prefix('-').map_or(false, |rest| {
            rest.bytes().all(|b| b.is_ascii_digit() || b == b'.' || b == b'$')
                && rest.bytes().any(|b| b.is_ascii_digit() && b != b'0')
        });
        if minus_nonzero {
            return Err(ValidationError::NegativeAmount(text));
        }

        let amount = Money::parse(&text).map_err(|e| match e {
            MoneyParseError::InvalidFormat(_) => ValidationError::InvalidAmount(text.clone()),
            MoneyParseError::TooPrecise(_) => ValidationError::TooManyDecimals(text.clone()),
            MoneyParseError::OutOfRange(_) => ValidationError::AmountTooLarge(text.clone()),
        })?;
        if amount.is_negative() {
            return Err(ValidationError::NegativeAmount(text));
        }

        Self::new(description, amount)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.description, self.amount)
    }
}
