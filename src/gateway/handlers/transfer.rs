//! Transfer handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, TransactionRequest, TransactionResponse, ok};
use crate::core_types::TransactionId;

/// Transfer funds between two accounts
///
/// Either both balances change and one record is written, or nothing changes.
#[utoipa::path(
    post,
    path = "/transactions",
    request_body = TransactionRequest,
    responses(
        (status = 204, description = "Transfer committed"),
        (status = 400, description = "Malformed body, non-positive amount, self-transfer or insufficient funds"),
        (status = 404, description = "Source or destination account not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "Transactions"
)]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = body?;

    state
        .transactions
        .process_transaction(
            req.source_account_id,
            req.destination_account_id,
            req.amount.inner(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List committed transfers, oldest first
#[utoipa::path(
    get,
    path = "/transactions",
    responses(
        (status = 200, description = "All transfer records", body = [TransactionResponse]),
        (status = 500, description = "Internal error")
    ),
    tag = "Transactions"
)]
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<TransactionResponse>> {
    let records = state.transactions.list_transactions().await?;
    ok(records.into_iter().map(TransactionResponse::from).collect())
}

/// Get one committed transfer
#[utoipa::path(
    get,
    path = "/transactions/{transaction_id}",
    params(("transaction_id" = i64, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transfer record", body = TransactionResponse),
        (status = 400, description = "Malformed transaction ID"),
        (status = 404, description = "Transaction not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "Transactions"
)]
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> ApiResult<TransactionResponse> {
    let Path(transaction_id) = transaction_id?;

    let record = state.transactions.get_transaction(transaction_id).await?;
    ok(record.into())
}
