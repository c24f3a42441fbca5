//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount either parser accepts: 999,999,999,999.99
    ///
    /// Far enough below `i64::MAX` that summing a ledger cannot realistically
    /// reach the saturation point of [`Add`].
    pub const MAX: Money = Money(99_999_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add, returning None on i64 overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parse a money amount typed by a user
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.", ".5".
    /// At most two decimal places; no exponent; magnitude up to [`Money::MAX`].
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let number = Decimal::split(s)?;

        if number.frac.len() > 2 {
            return Err(MoneyParseError::TooPrecise(number.original.to_string()));
        }
        if number.exponent.is_some() {
            return Err(MoneyParseError::InvalidFormat(number.original.to_string()));
        }

        number.to_money()
    }

    /// Parse an amount read back from a ledger file
    ///
    /// More forgiving than [`Money::parse`]: also accepts exponent notation
    /// ("1.2345678E7") and extra decimal places, rounded half away from zero
    /// to the nearest cent.
    pub fn parse_ledger(s: &str) -> Result<Self, MoneyParseError> {
        Decimal::split(s)?.to_money()
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, self.to_decimal_string().trim_start_matches('-'))
        } else {
            format!("{}{}", symbol, self.to_decimal_string())
        }
    }

    /// Plain two-decimal rendering with no symbol, e.g. "20.25"
    ///
    /// This is also the amount form written to ledger files.
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

/// A decimal literal split into its validated parts
struct Decimal<'a> {
    original: &'a str,
    negative: bool,
    whole: &'a str,
    frac: &'a str,
    exponent: Option<i64>,
}

impl<'a> Decimal<'a> {
    fn split(s: &'a str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (negative, rest) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, original.strip_prefix('+').unwrap_or(original)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (mantissa, exponent) = match rest.split_once(|c: char| c == 'e' || c == 'E') {
            Some((mantissa, exp)) => {
                let exp = exp.parse::<i64>().map_err(|_| invalid())?;
                (mantissa, Some(exp))
            }
            None => (rest, None),
        };

        let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        Ok(Self {
            original,
            negative,
            whole,
            frac,
            exponent,
        })
    }

    fn to_money(&self) -> Result<Money, MoneyParseError> {
        let out_of_range = || MoneyParseError::OutOfRange(self.original.to_string());

        let whole = self.whole.trim_start_matches('0');
        let digits: Vec<i64> = whole
            .bytes()
            .chain(self.frac.bytes())
            .map(|b| i64::from(b - b'0'))
            .collect();

        // Digits left of this index form the whole number of cents
        let cents_len = (whole.len() as i64)
            .saturating_add(self.exponent.unwrap_or(0))
            .saturating_add(2);
        if cents_len > 18 {
            return Err(out_of_range());
        }

        let mut cents: i64 = 0;
        for i in 0..cents_len.max(0) {
            let digit = digits.get(i as usize).copied().unwrap_or(0);
            cents = cents * 10 + digit;
        }

        let round_up = cents_len >= 0
            && digits
                .get(cents_len as usize)
                .map_or(false, |&digit| digit >= 5);
        if round_up {
            cents += 1;
        }

        if cents > Money::MAX.0 {
            return Err(out_of_range());
        }

        Ok(Money(if self.negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

/// Saturates at the i64 bounds instead of overflowing
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    /// More than two decimal places
    TooPrecise(String),
    /// Larger than [`Money::MAX`]
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "At most two decimal places allowed: {}", s)
            }
            MoneyParseError::OutOfRange(s) => write!(
                f,
                "Amount exceeds the maximum of {}: {}",
                Money::MAX.to_decimal_string(),
                s
            ),
        }
    }
}

impl std::error::Error for MoneyParseError {}
