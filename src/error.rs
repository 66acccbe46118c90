//! Crate error type.

use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Two sequences being compared have different lengths. Raised by the
    /// distance computation and propagated unchanged through queries.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
