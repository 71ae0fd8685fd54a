//! Transfer Engine
//!
//! Moves funds between two accounts as one atomic unit of work:
//!
//! ```text
//! begin → lock rows (ascending ID) → check source → check funds → check destination
//!       → debit source → credit destination → insert record → commit
//! ```
//!
//! Any failure rolls the unit back explicitly. A panic unwinds through the boxed
//! unit of work, whose drop discards the staged writes, so no exit path can
//! leave a partial transfer behind. The engine never retries.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::types::{NewTransaction, TransactionRecord};
use crate::core_types::AccountId;
use crate::error::LedgerError;
use crate::persistence::{LedgerStore, UnitOfWork};

/// Executes transfers against any [`LedgerStore`]
#[derive(Clone)]
pub struct TransferEngine {
    store: Arc<dyn LedgerStore>,
}

impl TransferEngine {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Transfer `amount` from `source` to `destination`
    ///
    /// Returns the committed transfer record. On error nothing has changed.
    pub async fn transfer(
        &self,
        source: AccountId,
        destination: AccountId,
        amount: Decimal,
    ) -> Result<TransactionRecord, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidArgument(
                "amount must be positive".to_string(),
            ));
        }
        if source == destination {
            return Err(LedgerError::InvalidArgument(
                "source and destination accounts must differ".to_string(),
            ));
        }

        let mut uow = self
            .store
            .begin()
            .await
            .map_err(LedgerError::StoreUnavailable)?;

        let record = match apply_transfer(uow.as_mut(), source, destination, amount).await {
            Ok(record) => record,
            Err(e) => {
                if let Err(rollback_err) = uow.rollback().await {
                    warn!(
                        source,
                        destination,
                        error = %rollback_err,
                        "Rollback failed after aborted transfer"
                    );
                }
                debug!(source, destination, code = e.code(), "Transfer aborted");
                return Err(e);
            }
        };

        uow.commit().await.map_err(LedgerError::CommitFailed)?;

        info!(
            transaction_id = record.transaction_id,
            source,
            destination,
            amount = %amount,
            "Transfer committed"
        );
        Ok(record)
    }
}

/// The body of a transfer, run inside an open unit of work
async fn apply_transfer(
    uow: &mut dyn UnitOfWork,
    source: AccountId,
    destination: AccountId,
    amount: Decimal,
) -> Result<TransactionRecord, LedgerError> {
    // Lock in ascending ID order so opposite transfers cannot deadlock.
    let (source_account, destination_account) = if source < destination {
        let s = uow.lock_account(source).await;
        let s = s.map_err(LedgerError::StoreUnavailable)?;
        let d = uow.lock_account(destination).await;
        (s, d.map_err(LedgerError::StoreUnavailable)?)
    } else {
        let d = uow.lock_account(destination).await;
        let d = d.map_err(LedgerError::StoreUnavailable)?;
        let s = uow.lock_account(source).await;
        (s.map_err(LedgerError::StoreUnavailable)?, d)
    };

    let source_account = source_account.ok_or(LedgerError::AccountNotFound(source))?;
    if !source_account.can_cover(amount) {
        return Err(LedgerError::InsufficientFunds(source));
    }
    let destination_account =
        destination_account.ok_or(LedgerError::AccountNotFound(destination))?;

    let new_source_balance = source_account.balance - amount;
    let new_destination_balance = destination_account
        .balance
        .checked_add(amount)
        .ok_or_else(|| {
            LedgerError::InvalidArgument(format!(
                "balance of account {} would overflow",
                destination
            ))
        })?;

    uow.update_balance(source, new_source_balance)
        .await
        .map_err(LedgerError::StoreUnavailable)?;
    uow.update_balance(destination, new_destination_balance)
        .await
        .map_err(LedgerError::StoreUnavailable)?;

    uow.insert_transaction(&NewTransaction::new(source, destination, amount))
        .await
        .map_err(LedgerError::StoreUnavailable)
}
