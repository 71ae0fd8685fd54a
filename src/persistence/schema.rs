use sqlx::PgPool;

/// Create the ledger tables if they do not exist yet
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Initializing PostgreSQL schema...");

    sqlx::query(CREATE_ACCOUNTS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_TRANSACTIONS_TABLE).execute(pool).await?;

    tracing::info!("PostgreSQL schema ready");
    Ok(())
}

pub const CREATE_ACCOUNTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    account_id BIGINT PRIMARY KEY,
    balance    NUMERIC NOT NULL CHECK (balance >= 0)
)
"#;

pub const CREATE_TRANSACTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    transaction_id         BIGSERIAL PRIMARY KEY,
    source_account_id      BIGINT NOT NULL REFERENCES accounts (account_id),
    destination_account_id BIGINT NOT NULL REFERENCES accounts (account_id),
    amount                 NUMERIC NOT NULL CHECK (amount > 0),
    created_at             TIMESTAMPTZ NOT NULL
)
"#;
