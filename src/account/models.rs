//! Data models for accounts

use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::core_types::AccountId;

/// Monetary account
///
/// `balance` is never negative in any committed state; the store enforces it
/// with a `CHECK` constraint and the transfer engine refuses to overdraw.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Account {
    pub account_id: AccountId,
    pub balance: Decimal,
}

impl Account {
    pub fn new(account_id: AccountId, balance: Decimal) -> Self {
        Self {
            account_id,
            balance,
        }
    }

    /// Whether the account can cover a debit of `amount`
    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }
}
