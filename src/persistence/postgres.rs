//! PostgreSQL store
//!
//! Units of work are plain `READ COMMITTED` transactions. Every account the
//! transfer engine is going to mutate is read with `SELECT ... FOR UPDATE`, so
//! a second transfer touching the same row blocks until the first one commits
//! or rolls back and then re-reads the committed balance.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

use super::StoreError;
use super::repository::{AccountStore, LedgerStore, TransactionStore, UnitOfWork};
use crate::account::Account;
use crate::core_types::{AccountId, TransactionId};
use crate::transfer::{NewTransaction, TransactionRecord};

/// PostgreSQL-backed implementation of every store capability
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgStore {
    async fn create_account(&self, account: &Account) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO accounts (account_id, balance) VALUES ($1, $2)")
            .bind(account.account_id)
            .bind(account.balance)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;
        Ok(())
    }

    async fn get_account(&self, account_id: AccountId) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT account_id, balance FROM accounts WHERE account_id = $1",
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }
}

#[async_trait]
impl TransactionStore for PgStore {
    async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Option<TransactionRecord>, StoreError> {
        let record = sqlx::query_as::<_, TransactionRecord>(
            r#"
            SELECT transaction_id, source_account_id, destination_account_id, amount, created_at
            FROM transactions
            WHERE transaction_id = $1
            "#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list_transactions(&self) -> Result<Vec<TransactionRecord>, StoreError> {
        let records = sqlx::query_as::<_, TransactionRecord>(
            r#"
            SELECT transaction_id, source_account_id, destination_account_id, amount, created_at
            FROM transactions
            ORDER BY transaction_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}

#[async_trait]
impl LedgerStore for PgStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgUnitOfWork { tx }))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Unit of work over one PostgreSQL transaction
///
/// `sqlx::Transaction` issues `ROLLBACK` when dropped uncommitted.
struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn lock_account(
        &mut self,
        account_id: AccountId,
    ) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT account_id, balance FROM accounts WHERE account_id = $1 FOR UPDATE",
        )
        .bind(account_id)
        .fetch_optional(&mut *self.tx)
        .await?;
        Ok(account)
    }

    async fn update_balance(
        &mut self,
        account_id: AccountId,
        new_balance: Decimal,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE accounts SET balance = $1 WHERE account_id = $2")
            .bind(new_balance)
            .bind(account_id)
            .execute(&mut *self.tx)
            .await?;

        if result.rows_affected() != 1 {
            return Err(StoreError::Backend(format!(
                "balance update for account {} affected {} rows",
                account_id,
                result.rows_affected()
            )));
        }
        Ok(())
    }

    async fn insert_transaction(
        &mut self,
        transaction: &NewTransaction,
    ) -> Result<TransactionRecord, StoreError> {
        let record = sqlx::query_as::<_, TransactionRecord>(
            r#"
            INSERT INTO transactions (source_account_id, destination_account_id, amount, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING transaction_id, source_account_id, destination_account_id, amount, created_at
            "#,
        )
        .bind(transaction.source_account_id)
        .bind(transaction.destination_account_id)
        .bind(transaction.amount)
        .bind(transaction.created_at)
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(record)
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
