//! Food order error types.

use thiserror::Error;

/// Errors that can occur while loading, pricing or submitting a food order.
#[derive(Error, Debug)]
pub enum FoodError {
    /// Food not found in the catalog.
    #[error("Food not found: {0}")]
    FoodNotFound(u64),

    /// Catalog returned data the selection state cannot be seeded from.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// The order sink refused the request.
    #[error("Order sink rejected request: {0}")]
    SinkRejected(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FoodError {
    fn from(e: serde_json::Error) -> Self {
        FoodError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for FoodError {
    fn from(e: std::io::Error) -> Self {
        FoodError::Storage(e.to_string())
    }
}
