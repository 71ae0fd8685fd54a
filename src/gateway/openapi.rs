//! OpenAPI Documentation
//!
//! Auto-generated OpenAPI 3 document for the transfer API, served at
//! `/api-docs/openapi.json` and exported by the `export_openapi` binary.

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    AccountResponse, CreateAccountRequest, TransactionRequest, TransactionResponse,
};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Internal Transfers API",
        version = "1.0.0",
        description = "Account balances and atomic fund transfers between accounts.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::create_account,
        crate::gateway::handlers::account::get_account,
        crate::gateway::handlers::transfer::create_transaction,
        crate::gateway::handlers::transfer::list_transactions,
        crate::gateway::handlers::transfer::get_transaction,
    ),
    components(
        schemas(
            HealthResponse,
            AccountResponse,
            CreateAccountRequest,
            TransactionRequest,
            TransactionResponse,
        )
    ),
    tags(
        (name = "Accounts", description = "Account creation and balance queries"),
        (name = "Transactions", description = "Fund transfers and transfer records"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
