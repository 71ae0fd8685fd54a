//! Gateway types module
//!
//! ## Input Types
//! - [`FlexibleDecimal`]: number-or-string decimal for API input
//! - [`CreateAccountRequest`], [`TransactionRequest`]: request bodies
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified API response wrapper
//! - [`ApiError`] / [`ApiResult`]: handler error path
//!
//! ## Submodules
//! - [`money`]: Money input type
//! - [`request`]: Request bodies
//! - [`response`]: Response types and errors

pub mod money;
pub mod request;
pub mod response;

// Re-export commonly used types at module root
pub use money::FlexibleDecimal;
pub use request::{CreateAccountRequest, TransactionRequest};
pub use response::{AccountResponse, ApiError, ApiResponse, ApiResult, TransactionResponse, ok};
