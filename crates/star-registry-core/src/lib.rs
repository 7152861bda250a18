//! # Star Registry Core
//!
//! Pure primitives for the Star Registry: sealed blocks, the payload codec,
//! ownership challenges and wallet signatures.
//!
//! This crate contains no I/O, no locking, no clock. It is pure computation
//! over hash-chained data structures.
//!
//! ## Key Types
//!
//! - [`Block`] - A sealed chain entry with a content-derived hash
//! - [`BlockBuilder`] - The only way to produce a sealed block
//! - [`BlockHash`] - Blake3 digest of a block's canonical header
//! - [`BlockPayload`] - Genesis marker or a [`StarClaim`]
//! - [`Challenge`] - `<address>:<unixSeconds>:starRegistry`
//! - [`Keypair`] / [`Address`] - Wallet keys and self-certifying addresses
//!
//! ## Hashing
//!
//! Block hashes cover a deterministic CBOR encoding of the header. See the
//! [`canonical`] module.

pub mod block;
pub mod canonical;
pub mod challenge;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod types;
pub mod validation;

pub use block::{Block, BlockBuilder};
pub use canonical::{canonical_header_bytes, compute_block_hash};
pub use challenge::{Challenge, CHALLENGE_TAG};
pub use crypto::{verify_message, Address, Keypair, WalletSignature};
pub use error::{CoreError, ValidationError};
pub use payload::{BlockPayload, Star, StarClaim, DEFAULT_GENESIS_MARKER};
pub use types::BlockHash;
pub use validation::{block_faults, validate_block, validate_block_structure};
