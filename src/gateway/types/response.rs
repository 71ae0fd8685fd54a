//! API Response types and errors
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `ApiError` / `ApiResult`: handler error path
//! - Response DTOs

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::SecondsFormat;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::Account;
use crate::core_types::{AccountId, TransactionId};
use crate::error::LedgerError;
use crate::transfer::TransactionRecord;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: the HTTP status number
/// - message: "success" on reads, error description otherwise
/// - data: payload of successful reads, absent on errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    #[schema(example = 200)]
    pub code: u16,
    #[schema(example = "success")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(status: StatusCode, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

// ============================================================================
// Handler Errors
// ============================================================================

/// Error returned by handlers; rendered as `{code, message}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

/// Result type of read handlers
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Wrap data into a successful read response
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

const INTERNAL_MESSAGE: &str = "internal server error";

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Opaque 500; details belong in the log, not the response
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.status, self.message);
        (self.status, Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(e: LedgerError) -> Self {
        let status =
            StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if e.is_infrastructure() {
            tracing::error!(code = e.code(), error = ?e, "Request failed");
            return Self::internal();
        }

        tracing::warn!(code = e.code(), error = %e, "Request rejected");
        Self::new(status, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Body read failures (e.g. over the size limit) keep their own status
        if let JsonRejection::BytesRejection(_) = &rejection {
            return Self::new(rejection.status(), rejection.body_text());
        }
        Self::bad_request(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(format!("invalid path parameter: {}", rejection.body_text()))
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Account data of GET /accounts/{id}
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    #[schema(example = 123)]
    pub account_id: AccountId,
    /// Decimal string
    #[schema(value_type = String, example = "100.23344")]
    pub balance: Decimal,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id,
            balance: account.balance,
        }
    }
}

/// Committed transfer record
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionResponse {
    #[schema(example = 1)]
    pub transaction_id: TransactionId,
    #[schema(example = 123)]
    pub source_account_id: AccountId,
    #[schema(example = 456)]
    pub destination_account_id: AccountId,
    /// Decimal string
    #[schema(value_type = String, example = "100.12345")]
    pub amount: Decimal,
    /// RFC 3339 creation time
    #[schema(example = "2026-01-01T12:00:00.000000Z")]
    pub timestamp: String,
}

impl From<TransactionRecord> for TransactionResponse {
    fn from(record: TransactionRecord) -> Self {
        Self {
            transaction_id: record.transaction_id,
            source_account_id: record.source_account_id,
            destination_account_id: record.destination_account_id,
            amount: record.amount,
            timestamp: record
                .created_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
