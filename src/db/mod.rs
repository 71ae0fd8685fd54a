//! Database connection management

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::StorageConfig;
use crate::persistence::schema;

/// PostgreSQL database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// Every pooled connection gets the configured `statement_timeout`, so a
    /// unit of work stuck on a row lock fails instead of hanging forever.
    pub async fn connect(config: &StorageConfig) -> Result<Self, sqlx::Error> {
        let statement_timeout = config.statement_timeout_ms.to_string();
        let options = PgConnectOptions::from_str(&config.postgres_url)?
            .options([("statement_timeout", statement_timeout.as_str())]);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            statement_timeout_ms = config.statement_timeout_ms,
            "PostgreSQL connection pool established"
        );
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn into_pool(self) -> PgPool {
        self.pool
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create the ledger tables if missing
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        schema::init_schema(&self.pool).await
    }
}
