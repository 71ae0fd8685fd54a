//! Transfer data types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::core_types::{AccountId, TransactionId};

/// Completed transfer record
///
/// Immutable once written. Only created inside a successful transfer unit of
/// work, together with the two balance updates it describes.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TransactionRecord {
    pub transaction_id: TransactionId,
    pub source_account_id: AccountId,
    pub destination_account_id: AccountId,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Transfer record before the store has assigned its ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub source_account_id: AccountId,
    pub destination_account_id: AccountId,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl NewTransaction {
    pub fn new(source: AccountId, destination: AccountId, amount: Decimal) -> Self {
        Self {
            source_account_id: source,
            destination_account_id: destination,
            amount,
            created_at: Utc::now(),
        }
    }

    /// Attach the store-assigned ID
    pub fn into_record(self, transaction_id: TransactionId) -> TransactionRecord {
        TransactionRecord {
            transaction_id,
            source_account_id: self.source_account_id,
            destination_account_id: self.destination_account_id,
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}
