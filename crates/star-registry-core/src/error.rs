//! Error types for the Star Registry Core.

use thiserror::Error;

use crate::types::BlockHash;

/// Core errors that can occur while building, decoding or signing.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("malformed challenge: {0}")]
    MalformedChallenge(String),

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}

/// Validation errors for a sealed block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("hash mismatch: stored {stored}, recomputed {recomputed}")]
    HashMismatch {
        stored: BlockHash,
        recomputed: BlockHash,
    },

    #[error("genesis block must not carry a previous hash")]
    GenesisHasPrevious,

    #[error("block at height {0} is missing its previous hash")]
    MissingPrevious(u64),

    #[error("broken link at height {height}: expected previous {expected}, got {got:?}")]
    BrokenLink {
        height: u64,
        expected: BlockHash,
        got: Option<BlockHash>,
    },

    #[error("height mismatch: expected {expected}, got {got}")]
    HeightMismatch { expected: u64, got: u64 },

    #[error("structural error: {0}")]
    StructuralError(String),
}

impl From<CoreError> for ValidationError {
    fn from(e: CoreError) -> Self {
        ValidationError::StructuralError(e.to_string())
    }
}
