use std::sync::Arc;

use anyhow::Context;

use internal_transfers::config::{AppConfig, StorageBackend};
use internal_transfers::db::Database;
use internal_transfers::gateway::{self, state::AppState};
use internal_transfers::persistence::{MemoryStore, PgStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    let _log_guard = internal_transfers::logging::init_logging(&app_config);

    tracing::info!("Starting internal transfers service in {} mode", env);

    let state = match app_config.storage.backend {
        StorageBackend::Postgres => {
            let db = Database::connect(&app_config.storage)
                .await
                .inspect_err(|e| tracing::error!("Failed to connect to PostgreSQL: {}", e))
                .context("Failed to connect to PostgreSQL")?;
            db.health_check()
                .await
                .context("PostgreSQL health check failed")?;
            db.init_schema()
                .await
                .inspect_err(|e| tracing::error!("Failed to initialize schema: {}", e))
                .context("Failed to initialize schema")?;
            AppState::with_store(Arc::new(PgStore::new(db.into_pool())))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on exit");
            AppState::with_store(Arc::new(MemoryStore::new()))
        }
    };

    gateway::run_server(
        &app_config.gateway.host,
        app_config.gateway.port,
        Arc::new(state),
    )
    .await
}
