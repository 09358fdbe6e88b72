/// Unified error type for the core Sui value types.
///
/// Covers address and digest parsing, Move identifiers, and type tag syntax.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("invalid type tag {input:?}: {reason}")]
    InvalidTypeTag { input: String, reason: String },

    #[error("invalid length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

impl From<hex::FromHexError> for TypesError {
    fn from(e: hex::FromHexError) -> Self {
        TypesError::InvalidHex(e.to_string())
    }
}
