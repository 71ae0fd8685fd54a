//! Ledger Error Types
//!
//! One taxonomy shared by the account service, the transfer engine and the
//! HTTP gateway. Domain errors carry enough context for the client; store
//! errors are kept as sources so they can be logged but never echoed.

use thiserror::Error;

use crate::core_types::{AccountId, TransactionId};
use crate::persistence::StoreError;

/// Ledger error types
#[derive(Error, Debug)]
pub enum LedgerError {
    // === Validation Errors ===
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // === Account Errors ===
    #[error("Account {0} already exists")]
    AccountDuplicate(AccountId),

    #[error("Account {0} not found")]
    AccountNotFound(AccountId),

    #[error("Insufficient funds in account {0}")]
    InsufficientFunds(AccountId),

    // === Transaction Errors ===
    #[error("Transaction {0} not found")]
    TransactionNotFound(TransactionId),

    // === System Errors ===
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),

    #[error("Commit failed: {0}")]
    CommitFailed(#[source] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LedgerError {
    /// Stable error code for logs and metrics
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidArgument(_) => "INVALID_ARGUMENT",
            LedgerError::AccountDuplicate(_) => "ACCOUNT_DUPLICATE",
            LedgerError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            LedgerError::InsufficientFunds(_) => "INSUFFICIENT_FUNDS",
            LedgerError::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            LedgerError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            LedgerError::CommitFailed(_) => "COMMIT_FAILED",
            LedgerError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status code for the client-visible response
    pub fn http_status(&self) -> u16 {
        match self {
            LedgerError::InvalidArgument(_) | LedgerError::InsufficientFunds(_) => 400,
            LedgerError::AccountNotFound(_) | LedgerError::TransactionNotFound(_) => 404,
            LedgerError::AccountDuplicate(_) => 409,
            LedgerError::StoreUnavailable(_)
            | LedgerError::CommitFailed(_)
            | LedgerError::Internal(_) => 500,
        }
    }

    /// True for failures of the backing store or the process itself.
    ///
    /// The message of these errors must not reach the client.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            LedgerError::StoreUnavailable(_)
                | LedgerError::CommitFailed(_)
                | LedgerError::Internal(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::AccountDuplicate(1).code(), "ACCOUNT_DUPLICATE");
        assert_eq!(LedgerError::InsufficientFunds(1).code(), "INSUFFICIENT_FUNDS");
        assert_eq!(
            LedgerError::CommitFailed(StoreError::Backend("x".into())).code(),
            "COMMIT_FAILED"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(LedgerError::InvalidArgument("x".into()).http_status(), 400);
        assert_eq!(LedgerError::InsufficientFunds(7).http_status(), 400);
        assert_eq!(LedgerError::AccountNotFound(7).http_status(), 404);
        assert_eq!(LedgerError::AccountDuplicate(7).http_status(), 409);
        assert_eq!(
            LedgerError::StoreUnavailable(StoreError::Backend("down".into())).http_status(),
            500
        );
        assert_eq!(LedgerError::Internal("boom".into()).http_status(), 500);
    }

    #[test]
    fn test_infrastructure_classification() {
        assert!(LedgerError::CommitFailed(StoreError::Backend("x".into())).is_infrastructure());
        assert!(!LedgerError::AccountNotFound(1).is_infrastructure());
        assert!(!LedgerError::InsufficientFunds(1).is_infrastructure());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            LedgerError::AccountNotFound(42).to_string(),
            "Account 42 not found"
        );
    }
}
