//! Storage layer for the expense ledger
//!
//! Monthly ledgers are plain text files, appended to one record at a time
//! and read back lazily.

pub mod file_io;
pub mod ledger;

pub use file_io::{append_record, read_records};
pub use ledger::{
    LedgerEntries, LedgerEntry, LedgerStore, MonthSummary, SkipReason, SkippedLine,
};
