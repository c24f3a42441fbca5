//! Service layer for the expense ledger
//!
//! The service layer sits between the front end and the storage layer,
//! handling validation and the live session state.

pub mod session;

pub use session::{ExpenseSession, Recorded};
