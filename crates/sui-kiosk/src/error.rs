//! Kiosk error types.

use sui_transaction::TransactionError;
use sui_types::TypesError;

/// Errors that can occur around kiosk operations.
///
/// The call builders themselves never fail; these come from loading
/// configuration and from serializing the finished transaction.
#[derive(Debug, thiserror::Error)]
pub enum KioskError {
    /// The configuration is invalid.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Transaction error.
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// Types error.
    #[error(transparent)]
    Types(#[from] TypesError),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
