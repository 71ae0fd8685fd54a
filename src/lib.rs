//! Internal Transfers - account balances and atomic fund transfers
//!
//! # Modules
//!
//! - [`core_types`] - Core type definitions (AccountId, TransactionId)
//! - [`error`] - Ledger error taxonomy
//! - [`persistence`] - Store capability traits, PostgreSQL and in-memory stores
//! - [`account`] - Accounts and the account service
//! - [`transfer`] - Transfer engine and transaction service
//! - [`db`] - PostgreSQL connection pool
//! - [`gateway`] - HTTP API
//! - [`config`] / [`logging`] - Service configuration and tracing setup

// Core types - must be first!
pub mod core_types;
pub mod error;

pub mod account;
pub mod persistence;
pub mod transfer;

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use account::{Account, AccountService};
pub use core_types::{AccountId, TransactionId};
pub use error::LedgerError;
pub use transfer::{TransactionRecord, TransactionService, TransferEngine};
