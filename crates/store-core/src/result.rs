//! Result type aliases for the store crates.

use crate::StoreError;

/// A specialized `Result` type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
