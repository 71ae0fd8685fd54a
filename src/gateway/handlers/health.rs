//! Health check handler

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::ApiResponse;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Build revision
    #[schema(example = "a1b2c3d")]
    pub version: String,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_i64)]
    pub timestamp_ms: i64,
}

/// Health check endpoint
///
/// Pings the backing store on every call. Store errors are logged, never
/// returned.
///
/// - Healthy: 200 OK + {code: 200, data: {status, version, timestamp_ms}}
/// - Unhealthy: 503 Service Unavailable + {code: 503, message: "unavailable"}
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Store unreachable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    if let Err(e) = state.store.health_check().await {
        tracing::error!(error = %e, "[HEALTH] store ping failed");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                code: StatusCode::SERVICE_UNAVAILABLE.as_u16(),
                message: "unavailable".to_string(),
                data: None,
            }),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(HealthResponse {
            status: "ok".to_string(),
            version: env!("GIT_HASH").to_string(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        })),
    )
}
