//! Request bodies

use serde::Deserialize;
use utoipa::ToSchema;

use super::money::FlexibleDecimal;
use crate::core_types::AccountId;

/// POST /accounts
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    #[schema(example = 123)]
    pub account_id: AccountId,
    /// JSON number or numeric string
    #[schema(value_type = String, example = "100.23344")]
    pub initial_balance: FlexibleDecimal,
}

/// POST /transactions
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransactionRequest {
    #[schema(example = 123)]
    pub source_account_id: AccountId,
    #[schema(example = 456)]
    pub destination_account_id: AccountId,
    /// JSON number or numeric string
    #[schema(value_type = String, example = "100.12345")]
    pub amount: FlexibleDecimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_transaction_request_mixed_forms() {
        let req: TransactionRequest = serde_json::from_str(
            r#"{"source_account_id": 1, "destination_account_id": 2, "amount": "50"}"#,
        )
        .unwrap();
        assert_eq!(req.amount.inner(), Decimal::from(50));

        let req: TransactionRequest = serde_json::from_str(
            r#"{"source_account_id": 1, "destination_account_id": 2, "amount": 0.5}"#,
        )
        .unwrap();
        assert_eq!(req.amount.inner(), Decimal::new(5, 1));
    }

    #[test]
    fn test_missing_field_rejected() {
        let result: Result<CreateAccountRequest, _> =
            serde_json::from_str(r#"{"account_id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_integer_account_id_rejected() {
        let result: Result<CreateAccountRequest, _> =
            serde_json::from_str(r#"{"account_id": "abc", "initial_balance": 5}"#);
        assert!(result.is_err());
    }
}
