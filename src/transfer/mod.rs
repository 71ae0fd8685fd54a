//! Fund transfers between accounts
//!
//! # Architecture
//!
//! - [`TransferEngine`]: the only code path that moves money. One transfer is
//!   one atomic unit of work on the [`LedgerStore`](crate::persistence::LedgerStore).
//! - [`TransactionService`]: request-level entry point, plus read access to
//!   committed transfer records.
//!
//! # Safety Invariants
//!
//! 1. **All-or-nothing**: both balance updates and the record commit together or not at all
//! 2. **No overdraft**: a source balance never goes below zero
//! 3. **Conservation**: the sum of the two balances is unchanged by a transfer
//! 4. **No double spend**: concurrent transfers from one account serialise on its row lock

pub mod engine;
pub mod service;
pub mod types;


// Re-exports for convenience
pub use engine::TransferEngine;
pub use service::TransactionService;
pub use types::{NewTransaction, TransactionRecord};
