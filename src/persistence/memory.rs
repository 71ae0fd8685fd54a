//! In-memory store
//!
//! Every unit of work owns the whole store lock for its lifetime, so units are
//! fully serialised. Writes are staged inside the unit and applied to the
//! shared state only on commit; dropping the unit discards them.
//!
//! Failure points can be armed to make a given step fail, which is how the
//! rollback paths of the transfer engine are exercised without a database.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::StoreError;
use super::repository::{AccountStore, LedgerStore, TransactionStore, UnitOfWork};
use crate::account::Account;
use crate::core_types::{AccountId, TransactionId};
use crate::transfer::{NewTransaction, TransactionRecord};

/// Step at which an armed store reports a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailPoint {
    Begin,
    LockAccount,
    UpdateBalance,
    InsertTransaction,
    Commit,
}

#[derive(Debug, Default)]
struct MemoryState {
    accounts: BTreeMap<AccountId, Decimal>,
    transactions: BTreeMap<TransactionId, TransactionRecord>,
    last_transaction_id: TransactionId,
}

type FailPoints = Arc<std::sync::Mutex<HashSet<FailPoint>>>;

/// In-process implementation of every store capability
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
    fail_points: FailPoints,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call reaching `point` fail until cleared
    pub fn fail_at(&self, point: FailPoint) {
        lock_fail_points(&self.fail_points).insert(point);
    }

    pub fn clear_fail_points(&self) {
        lock_fail_points(&self.fail_points).clear();
    }

    fn check(&self, point: FailPoint) -> Result<(), StoreError> {
        check_fail_point(&self.fail_points, point)
    }
}

fn lock_fail_points(
    fail_points: &FailPoints,
) -> std::sync::MutexGuard<'_, HashSet<FailPoint>> {
    fail_points.lock().unwrap_or_else(|e| e.into_inner())
}

fn check_fail_point(fail_points: &FailPoints, point: FailPoint) -> Result<(), StoreError> {
    if lock_fail_points(fail_points).contains(&point) {
        return Err(StoreError::Backend(format!("injected failure at {:?}", point)));
    }
    Ok(())
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create_account(&self, account: &Account) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if state.accounts.contains_key(&account.account_id) {
            return Err(StoreError::Duplicate);
        }
        state.accounts.insert(account.account_id, account.balance);
        Ok(())
    }

    async fn get_account(&self, account_id: AccountId) -> Result<Option<Account>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .accounts
            .get(&account_id)
            .map(|balance| Account::new(account_id, *balance)))
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Option<TransactionRecord>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.transactions.get(&transaction_id).cloned())
    }

    async fn list_transactions(&self) -> Result<Vec<TransactionRecord>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.transactions.values().cloned().collect())
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError> {
        self.check(FailPoint::Begin)?;
        let guard = self.state.clone().lock_owned().await;
        let next_transaction_id = guard.last_transaction_id + 1;
        Ok(Box::new(MemoryUnitOfWork {
            guard,
            fail_points: self.fail_points.clone(),
            staged_balances: BTreeMap::new(),
            staged_transactions: Vec::new(),
            next_transaction_id,
        }))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.check(FailPoint::Begin)
    }
}

struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    fail_points: FailPoints,
    staged_balances: BTreeMap<AccountId, Decimal>,
    staged_transactions: Vec<TransactionRecord>,
    next_transaction_id: TransactionId,
}

impl MemoryUnitOfWork {
    fn check(&self, point: FailPoint) -> Result<(), StoreError> {
        check_fail_point(&self.fail_points, point)
    }

    fn current_balance(&self, account_id: AccountId) -> Option<Decimal> {
        self.staged_balances
            .get(&account_id)
            .or_else(|| self.guard.accounts.get(&account_id))
            .copied()
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn lock_account(
        &mut self,
        account_id: AccountId,
    ) -> Result<Option<Account>, StoreError> {
        self.check(FailPoint::LockAccount)?;
        Ok(self
            .current_balance(account_id)
            .map(|balance| Account::new(account_id, balance)))
    }

    async fn update_balance(
        &mut self,
        account_id: AccountId,
        new_balance: Decimal,
    ) -> Result<(), StoreError> {
        self.check(FailPoint::UpdateBalance)?;
        if !self.guard.accounts.contains_key(&account_id) {
            return Err(StoreError::Backend(format!(
                "balance update for unknown account {}",
                account_id
            )));
        }
        if new_balance < Decimal::ZERO {
            return Err(StoreError::Backend(format!(
                "balance of account {} cannot become negative",
                account_id
            )));
        }
        self.staged_balances.insert(account_id, new_balance);
        Ok(())
    }

    async fn insert_transaction(
        &mut self,
        transaction: &NewTransaction,
    ) -> Result<TransactionRecord, StoreError> {
        self.check(FailPoint::InsertTransaction)?;
        let record = transaction.clone().into_record(self.next_transaction_id);
        self.next_transaction_id += 1;
        self.staged_transactions.push(record.clone());
        Ok(record)
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.check(FailPoint::Commit)?;
        let MemoryUnitOfWork {
            mut guard,
            staged_balances,
            staged_transactions,
            ..
        } = *self;

        for (account_id, balance) in staged_balances {
            guard.accounts.insert(account_id, balance);
        }
        for record in staged_transactions {
            guard.last_transaction_id = guard.last_transaction_id.max(record.transaction_id);
            guard.transactions.insert(record.transaction_id, record);
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        Ok(())
    }
}
