//! Store capability traits
//!
//! The services and the transfer engine only ever see these traits, so the
//! backing store is chosen once at start-up and injected as `Arc<dyn ...>`.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::StoreError;
use crate::account::Account;
use crate::core_types::{AccountId, TransactionId};
use crate::transfer::{NewTransaction, TransactionRecord};

// ============================================================================
// Account Store
// ============================================================================

/// Durable account balances keyed by account ID
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account. Returns [`StoreError::Duplicate`] if the ID is taken.
    async fn create_account(&self, account: &Account) -> Result<(), StoreError>;

    /// Read a committed account
    async fn get_account(&self, account_id: AccountId) -> Result<Option<Account>, StoreError>;
}

// ============================================================================
// Transaction Store
// ============================================================================

/// Append-only transfer records
///
/// Records are only ever written through [`UnitOfWork::insert_transaction`].
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Get a single committed record by ID
    async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Option<TransactionRecord>, StoreError>;

    /// All committed records, ordered by ID ascending
    async fn list_transactions(&self) -> Result<Vec<TransactionRecord>, StoreError>;
}

// ============================================================================
// Atomic Units of Work
// ============================================================================

/// Opens atomic units of work spanning accounts and transfer records
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Begin a new unit of work
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError>;

    /// Check the store is reachable
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// A set of reads and writes that either fully commits or has no effect
///
/// # Rollback guarantee
/// Dropping a unit of work without calling [`UnitOfWork::commit`] MUST discard
/// every staged write and release every lock, including when the drop happens
/// while unwinding from a panic.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Read an account and hold a write lock on it until the unit ends
    async fn lock_account(&mut self, account_id: AccountId)
    -> Result<Option<Account>, StoreError>;

    /// Stage a new balance for an account locked by this unit
    async fn update_balance(
        &mut self,
        account_id: AccountId,
        new_balance: Decimal,
    ) -> Result<(), StoreError>;

    /// Stage a transfer record; the store assigns its ID
    async fn insert_transaction(
        &mut self,
        transaction: &NewTransaction,
    ) -> Result<TransactionRecord, StoreError>;

    /// Make every staged write visible at once
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;

    /// Discard every staged write
    async fn rollback(self: Box<Self>) -> Result<(), StoreError>;
}
