use std::sync::Arc;

use crate::account::AccountService;
use crate::persistence::{AccountStore, LedgerStore, TransactionStore};
use crate::transfer::{TransactionService, TransferEngine};

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub transactions: TransactionService,
    /// Store handle for health checks
    pub store: Arc<dyn LedgerStore>,
}

impl AppState {
    pub fn new(
        accounts: AccountService,
        transactions: TransactionService,
        store: Arc<dyn LedgerStore>,
    ) -> Self {
        Self {
            accounts,
            transactions,
            store,
        }
    }

    /// Wire every service to one store implementing all capabilities
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: AccountStore + TransactionStore + LedgerStore + 'static,
    {
        let engine = TransferEngine::new(store.clone());
        Self::new(
            AccountService::new(store.clone()),
            TransactionService::new(engine, store.clone()),
            store,
        )
    }
}
