use std::sync::Arc;

use rust_decimal::Decimal;

use super::engine::TransferEngine;
use super::types::TransactionRecord;
use crate::core_types::{AccountId, TransactionId};
use crate::error::LedgerError;
use crate::persistence::TransactionStore;

/// Runs transfers and serves committed transfer records
#[derive(Clone)]
pub struct TransactionService {
    engine: TransferEngine,
    store: Arc<dyn TransactionStore>,
}

impl TransactionService {
    pub fn new(engine: TransferEngine, store: Arc<dyn TransactionStore>) -> Self {
        Self { engine, store }
    }

    /// Move `amount` from `source` to `destination`
    pub async fn process_transaction(
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
        self.engine.transfer(source, destination, amount).await
    }

    pub async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<TransactionRecord, LedgerError> {
        self.store
            .get_transaction(transaction_id)
            .await
            .map_err(LedgerError::StoreUnavailable)?
            .ok_or(LedgerError::TransactionNotFound(transaction_id))
    }

    /// All committed transfers, oldest first
    pub async fn list_transactions(&self) -> Result<Vec<TransactionRecord>, LedgerError> {
        self.store
            .list_transactions()
            .await
            .map_err(LedgerError::StoreUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountService;
    use crate::persistence::MemoryStore;

    async fn setup() -> (AccountService, TransactionService) {
        let store = Arc::new(MemoryStore::new());
        let accounts = AccountService::new(store.clone());
        let transactions =
            TransactionService::new(TransferEngine::new(store.clone()), store.clone());

        accounts.create_account(1, Decimal::from(100)).await.unwrap();
        accounts.create_account(2, Decimal::from(20)).await.unwrap();
        (accounts, transactions)
    }

    #[tokio::test]
    async fn test_process_and_read_back() {
        let (accounts, transactions) = setup().await;

        let record = transactions
            .process_transaction(1, 2, Decimal::new(255, 1)) // 25.5
            .await
            .unwrap();

        let fetched = transactions
            .get_transaction(record.transaction_id)
            .await
            .unwrap();
        assert_eq!(fetched, record);
        assert_eq!(
            accounts.get_account(1).await.unwrap().balance,
            Decimal::new(745, 1)
        );
        assert_eq!(
            accounts.get_account(2).await.unwrap().balance,
            Decimal::new(455, 1)
        );
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let (_accounts, transactions) = setup().await;

        transactions
            .process_transaction(1, 2, Decimal::from(10))
            .await
            .unwrap();
        transactions
            .process_transaction(2, 1, Decimal::from(5))
            .await
            .unwrap();

        let records = transactions.list_transactions().await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].transaction_id < records[1].transaction_id);
        assert_eq!(records[1].source_account_id, 2);
    }

    #[tokio::test]
    async fn test_failed_transfer_leaves_no_record() {
        let (_accounts, transactions) = setup().await;

        let result = transactions
            .process_transaction(2, 1, Decimal::from(1000))
            .await;

        assert!(matches!(result, Err(LedgerError::InsufficientFunds(2))));
        assert!(transactions.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_transaction() {
        let (_accounts, transactions) = setup().await;
        let result = transactions.get_transaction(99).await;
        assert!(matches!(result, Err(LedgerError::TransactionNotFound(99))));
    }
}
