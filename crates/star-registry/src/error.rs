//! Error types for the Ledger.

use star_registry_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::report::BlockFault;

/// Errors that can occur during Ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The chain failed integrity validation; writes are refused until repaired.
    #[error("chain is invalid: {} faulty block(s)", .faults.len())]
    ChainInvalid { faults: Vec<BlockFault> },

    /// The signed message is not a well-formed challenge for this address.
    #[error("malformed message: {0}")]
    MalformedMessage(String),

    /// The challenge is older than the configured window.
    #[error("challenge expired: issued at {issued_at}, {elapsed}s elapsed, window is {window}s")]
    ChallengeExpired {
        issued_at: i64,
        elapsed: i64,
        window: i64,
    },

    /// The signature does not prove control of the address.
    #[error("invalid signature for address {0}")]
    InvalidSignature(String),

    /// A freshly sealed block failed validation; the chain is unchanged.
    #[error("append rejected at height {height}: {} fault(s)", .faults.len())]
    Append {
        height: u64,
        faults: Vec<ValidationError>,
    },

    /// Encoding or decoding error from the core.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// No block matched the query.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type for Ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
