//! Account management module
//!
//! Account creation and balance lookup on top of an [`AccountStore`].
//!
//! [`AccountStore`]: crate::persistence::AccountStore

pub mod models;
pub mod service;

// Re-export commonly used types
pub use models::Account;
pub use service::AccountService;
