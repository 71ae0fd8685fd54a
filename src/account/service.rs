use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use super::models::Account;
use crate::core_types::AccountId;
use crate::error::LedgerError;
use crate::persistence::{AccountStore, StoreError};

/// Creates and reads accounts
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Open a new account with a positive initial balance
    pub async fn create_account(
        &self,
        account_id: AccountId,
        initial_balance: Decimal,
    ) -> Result<Account, LedgerError> {
        if initial_balance <= Decimal::ZERO {
            return Err(LedgerError::InvalidArgument(
                "initial balance must be positive".to_string(),
            ));
        }

        let account = Account::new(account_id, initial_balance);
        self.store
            .create_account(&account)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate => LedgerError::AccountDuplicate(account_id),
                other => LedgerError::StoreUnavailable(other),
            })?;

        info!(account_id, balance = %initial_balance, "Account created");
        Ok(account)
    }

    /// Current committed state of an account
    pub async fn get_account(&self, account_id: AccountId) -> Result<Account, LedgerError> {
        self.store
            .get_account(account_id)
            .await
            .map_err(LedgerError::StoreUnavailable)?
            .ok_or(LedgerError::AccountNotFound(account_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn service() -> AccountService {
        AccountService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_create_and_get_account() {
        let service = service();

        let created = service
            .create_account(123, Decimal::new(10023344, 5)) // 100.23344
            .await
            .unwrap();
        let fetched = service.get_account(123).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.balance.to_string(), "100.23344");
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_balance() {
        let service = service();

        for balance in [Decimal::ZERO, Decimal::from(-5)] {
            let result = service.create_account(1, balance).await;
            assert!(matches!(result, Err(LedgerError::InvalidArgument(_))));
        }
        assert!(matches!(
            service.get_account(1).await,
            Err(LedgerError::AccountNotFound(1))
        ));
    }

    #[tokio::test]
    async fn test_create_duplicate_keeps_original_balance() {
        let service = service();
        service.create_account(7, Decimal::from(100)).await.unwrap();

        let result = service.create_account(7, Decimal::from(5)).await;

        assert!(matches!(result, Err(LedgerError::AccountDuplicate(7))));
        let account = service.get_account(7).await.unwrap();
        assert_eq!(account.balance, Decimal::from(100));
    }

    #[tokio::test]
    async fn test_get_missing_account() {
        let result = service().get_account(404).await;
        assert!(matches!(result, Err(LedgerError::AccountNotFound(404))));
    }
}
