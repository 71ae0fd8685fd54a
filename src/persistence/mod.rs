//! Persistence for accounts and transfer records
//!
//! - [`repository`]: store capability traits used by the services and engine
//! - [`postgres`]: PostgreSQL implementation (row locks + transactions)
//! - [`memory`]: in-process implementation for development and tests
//! - [`schema`]: PostgreSQL DDL

pub mod memory;
pub mod postgres;
pub mod repository;
pub mod schema;

pub use memory::{FailPoint, MemoryStore};
pub use postgres::PgStore;
pub use repository::{AccountStore, LedgerStore, TransactionStore, UnitOfWork};

use thiserror::Error;

/// Errors raised by a backing store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A row with the same primary key already exists
    #[error("duplicate key")]
    Duplicate,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failure reported by a non-SQL backend
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Classify a sqlx error, folding unique-key violations into [`StoreError::Duplicate`]
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::Duplicate,
            e => StoreError::Database(e),
        }
    }
}
