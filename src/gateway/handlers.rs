//! HTTP handlers
//!
//! - [`account`]: account creation and lookup
//! - [`transfer`]: transfers and transfer records
//! - [`health`]: liveness with store ping

pub mod account;
pub mod health;
pub mod transfer;

pub use account::{create_account, get_account};
pub use health::{HealthResponse, health_check};
pub use transfer::{create_transaction, get_transaction, list_transactions};
