pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;

use crate::error::LedgerError;
use state::AppState;
use types::ApiError;

/// Build the full HTTP router over the given state
pub fn build_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/accounts", post(handlers::create_account))
        .route("/accounts/{account_id}", get(handlers::get_account))
        .route(
            "/transactions",
            post(handlers::create_transaction).get(handlers::list_transactions),
        )
        .route(
            "/transactions/{transaction_id}",
            get(handlers::get_transaction),
        )
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(openapi::ApiDoc::openapi()) }),
        )
        .with_state(state);

    with_middleware(router)
}

/// Panic recovery inside request tracing
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

/// A panicking handler still answers with the 500 envelope
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::from(LedgerError::Internal(format!("handler panicked: {}", detail))).into_response()
}

/// Start HTTP Gateway server; returns after a graceful shutdown
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {}: {} (port {} may already be in use)",
            addr,
            e,
            port
        )
    })?;

    info!("Gateway listening on http://{}", addr);
    info!("OpenAPI document: http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully..."),
        () = terminate => info!("Received SIGTERM, shutting down gracefully..."),
    }
}
