/// Error types for transaction building and serialization.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transaction structure is invalid (e.g. too many inputs).
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),
    /// A Move call target is not of the form `package::module::function`.
    #[error("invalid move call target {target:?}: {reason}")]
    InvalidTarget {
        /// The target as given to `move_call`.
        target: String,
        /// What is wrong with it.
        reason: String,
    },
    /// An object input is still a bare id and needs a version and digest
    /// (or shared version) before the transaction can be serialized.
    #[error("unresolved object input {0}")]
    UnresolvedObject(String),
    /// A pure value does not fit the type it was declared with.
    #[error("pure value {value} does not match type {expected}")]
    TypeMismatch {
        /// The declared type.
        expected: String,
        /// A rendering of the offending value.
        value: String,
    },
    /// An error occurred during JSON serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),
    /// An underlying types error (forwarded from `sui-types`).
    #[error("types error: {0}")]
    Types(#[from] sui_types::TypesError),
}

impl From<serde_json::Error> for TransactionError {
    fn from(e: serde_json::Error) -> Self {
        TransactionError::SerializationError(e.to_string())
    }
}
