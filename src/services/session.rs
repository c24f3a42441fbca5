//! Expense session
//!
//! Keeps the expenses entered during this run and their running total, and
//! forwards each one to the ledger store. The in-memory list is updated
//! first; a failed write is reported but never rolls it back.

use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult, ValidationError};
use crate::models::{Expense, Money, MonthKey};
use crate::storage::{LedgerStore, MonthSummary};

/// Outcome of a successful submission
#[derive(Debug)]
pub struct Recorded {
    pub expense: Expense,
    /// Set when the expense is counted in memory but the ledger write failed
    pub persist_error: Option<ExpenseError>,
}

impl Recorded {
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Live state for one run of the program
pub struct ExpenseSession {
    store: LedgerStore,
    entries: Vec<Expense>,
    total: Money,
}

impl ExpenseSession {
    /// Start an empty session backed by a ledger store
    pub fn new(store: LedgerStore) -> Self {
        Self {
            store,
            entries: Vec::new(),
            total: Money::zero(),
        }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Validate and record an expense in the current month's ledger
    pub fn add_expense(
        &mut self,
        description: &str,
        amount_text: &str,
    ) -> Result<Recorded, ValidationError> {
        self.add_expense_in(MonthKey::current(), description, amount_text)
    }

    /// Validate and record an expense in a specific month's ledger
    pub fn add_expense_in(
        &mut self,
        month: MonthKey,
        description: &str,
        amount_text: &str,
    ) -> Result<Recorded, ValidationError> {
        let expense = Expense::from_input(description, amount_text)?;
        let total = self
            .total
            .checked_add(expense.amount())
            .ok_or_else(|| ValidationError::AmountTooLarge(amount_text.trim().to_string()))?;

        self.entries.push(expense.clone());
        self.total = total;

        let persist_error = match self.store.append(month, &expense) {
            Ok(()) => {
                info!(%month, description = expense.description(), "expense recorded");
                None
            }
            Err(e) => {
                warn!(%month, error = %e, "expense kept in session but not saved");
                Some(e)
            }
        };

        Ok(Recorded {
            expense,
            persist_error,
        })
    }

    /// Sum of everything added this session
    pub fn running_total(&self) -> Money {
        self.total
    }

    /// Running total with two decimal places, e.g. "20.25"
    pub fn format_total(&self) -> String {
        self.total.to_decimal_string()
    }

    /// Expenses added this session, oldest first
    pub fn list_entries(&self) -> &[Expense] {
        &self.entries
    }

    /// Ledger contents for the current month, including earlier runs
    pub fn current_month_summary(&self) -> ExpenseResult<MonthSummary> {
        self.store.summary(MonthKey::current())
    }

    pub fn month_summary(&self, month: MonthKey) -> ExpenseResult<MonthSummary> {
        self.store.summary(month)
    }
}
