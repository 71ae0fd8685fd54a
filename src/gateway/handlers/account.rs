//! Account handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{
    AccountResponse, ApiError, ApiResult, CreateAccountRequest, ok,
};
use crate::core_types::AccountId;

/// Create an account with an initial balance
#[utoipa::path(
    post,
    path = "/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 204, description = "Account created"),
        (status = 400, description = "Malformed body or non-positive balance"),
        (status = 409, description = "Account ID already in use"),
        (status = 500, description = "Internal error")
    ),
    tag = "Accounts"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = body?;

    state
        .accounts
        .create_account(req.account_id, req.initial_balance.inner())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get an account's current balance
#[utoipa::path(
    get,
    path = "/accounts/{account_id}",
    params(("account_id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 400, description = "Malformed account ID"),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "Accounts"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    account_id: Result<Path<AccountId>, PathRejection>,
) -> ApiResult<AccountResponse> {
    let Path(account_id) = account_id?;

    let account = state.accounts.get_account(account_id).await?;
    ok(account.into())
}
