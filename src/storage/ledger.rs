//! Monthly ledger store
//!
//! One append-only file per calendar month. Appends never rewrite existing
//! lines; reads parse the file from the top each time and skip anything that
//! isn't a `description,amount` record.

use std::fmt;
use std::fs::File;
use std::path::PathBuf;

use csv::{StringRecord, StringRecordsIntoIter};
use serde::Serialize;
use tracing::{debug, warn};

use super::file_io::{append_record, read_records};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::{Expense, Money, MonthKey};

/// One record read back from a ledger file
///
/// Ledger lines are not re-validated as expenses: an empty description or a
/// negative amount written by another tool is still counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub description: String,
    pub amount: Money,
}

impl LedgerEntry {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

impl From<&Expense> for LedgerEntry {
    fn from(expense: &Expense) -> Self {
        Self::new(expense.description(), expense.amount())
    }
}

/// Why a ledger line was left out of a read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The line did not split into exactly two fields
    FieldCount(usize),
    /// The amount field was not a number
    InvalidAmount(String),
    /// The line could not be decoded at all
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCount(n) => write!(f, "expected 2 fields, found {}", n),
            SkipReason::InvalidAmount(s) => write!(f, "invalid amount '{}'", s),
            SkipReason::Unreadable(e) => write!(f, "unreadable line: {}", e),
        }
    }
}

/// A malformed line found while reading a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number, 0 if unknown
    pub line: u64,
    pub text: String,
    pub reason: SkipReason,
}

/// Lazy iterator over the well-formed records of one ledger file
///
/// Holds the file open until it is dropped. Malformed lines are skipped and
/// collected; see [`LedgerEntries::skipped`].
pub struct LedgerEntries {
    records: Option<StringRecordsIntoIter<File>>,
    path: PathBuf,
    skipped: Vec<SkippedLine>,
}

impl LedgerEntries {
    fn new(records: Option<StringRecordsIntoIter<File>>, path: PathBuf) -> Self {
        Self {
            records,
            path,
            skipped: Vec::new(),
        }
    }

    pub fn into_skipped(self) -> Vec<SkippedLine> {
        self.skipped
    }

    fn skip(&mut self, skipped: SkippedLine) {
        warn!(
            path = %self.path.display(),
            line = skipped.line,
            reason = %skipped.reason,
            "skipping malformed ledger line"
        );
        self.skipped.push(skipped);
    }
}

impl Iterator for LedgerEntries {
    type Item = LedgerEntry;

    fn next(&mut self) -> Option<LedgerEntry> {
        loop {
            let result = self.records.as_mut()?.next()?;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                        // The reader can't make progress past an I/O error
                        self.records = None;
                    }
                    self.skip(SkippedLine {
                        line,
                        text: String::new(),
                        reason: SkipReason::Unreadable(e.to_string()),
                    });
                    continue;
                }
            };

            match decode_record(&record) {
                Ok(entry) => return Some(entry),
                Err(reason) => {
                    let line = record.position().map(|p| p.line()).unwrap_or(0);
                    let text = record.iter().collect::<Vec<_>>().join(",");
                    self.skip(SkippedLine { line, text, reason });
                }
            }
        }
    }
}

fn decode_record(record: &StringRecord) -> Result<LedgerEntry, SkipReason> {
    if record.len() != 2 {
        return Err(SkipReason::FieldCount(record.len()));
    }

    let amount_text = &record[1];
    let amount = Money::parse_ledger(amount_text)
        .map_err(|_| SkipReason::InvalidAmount(amount_text.trim().to_string()))?;

    Ok(LedgerEntry::new(&record[0], amount))
}

/// Everything recorded for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub month: MonthKey,
    pub entries: Vec<LedgerEntry>,
    pub total: Money,
    pub skipped: Vec<SkippedLine>,
}

impl MonthSummary {
    /// A summary with no entries, used when a ledger can't be read
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            entries: Vec::new(),
            total: Money::zero(),
            skipped: Vec::new(),
        }
    }
}

/// Durable append and read-back of monthly expense logs
#[derive(Debug, Clone)]
pub struct LedgerStore {
    paths: ExpensePaths,
}

impl LedgerStore {
    pub fn new(paths: ExpensePaths) -> Self {
        Self { paths }
    }

    /// File backing the ledger for a month
    pub fn ledger_path(&self, month: MonthKey) -> PathBuf {
        self.paths.ledger_file(month)
    }

    /// Append one expense to a month's ledger, creating the ledger if needed
    pub fn append(&self, month: MonthKey, expense: &Expense) -> ExpenseResult<()> {
        let path = self.ledger_path(month);
        let amount = expense.amount().to_decimal_string();

        append_record(&path, &[expense.description(), &amount])?;

        debug!(%month, description = expense.description(), %amount, "appended expense");
        Ok(())
    }

    /// Iterate a month's records in file order
    ///
    /// A missing ledger yields an empty iterator. Each call reads the file
    /// afresh.
    pub fn read_all(&self, month: MonthKey) -> ExpenseResult<LedgerEntries> {
        let path = self.ledger_path(month);
        let records = read_records(&path)?;

        if records.is_none() {
            debug!(%month, "no ledger file yet");
        }

        Ok(LedgerEntries::new(records, path))
    }

    /// Sum of all amounts in a month's ledger
    pub fn month_total(&self, month: MonthKey) -> ExpenseResult<Money> {
        Ok(self.read_all(month)?.map(|entry| entry.amount).sum())
    }

    /// Entries, total and skipped lines for a month in a single read
    pub fn summary(&self, month: MonthKey) -> ExpenseResult<MonthSummary> {
        let mut reader = self.read_all(month)?;
        let entries: Vec<LedgerEntry> = reader.by_ref().collect();
        let total = entries.iter().map(|entry| entry.amount).sum();

        Ok(MonthSummary {
            month,
            entries,
            total,
            skipped: reader.into_skipped(),
        })
    }
}
