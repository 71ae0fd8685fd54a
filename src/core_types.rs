//! Core types used throughout the system
//!
//! These are fundamental type aliases used by all modules.

/// Account ID - externally assigned, caller-chosen, unique.
///
/// # Constraints:
/// - **Immutable**: Once created, an account keeps its ID forever
/// - **Signed**: Stored as `BIGINT`, so any `i64` is a valid candidate
pub type AccountId = i64;

/// Transaction ID - assigned by the store, monotonically increasing.
pub type TransactionId = i64;
