//! # Star Registry
//!
//! An in-memory ledger that records who owns which star.
//!
//! ## Overview
//!
//! Every record is a sealed block linked to its predecessor by hash. A wallet
//! proves control of its address by signing a short-lived challenge, and only
//! then is its star claim appended.
//!
//! - **Blocks**: Sealed once, never re-hashed. Tampering shows up in validation.
//! - **Challenges**: `<address>:<unixSeconds>:starRegistry`, valid for 300 seconds.
//! - **Validation**: Every block and every link is checked; all faults are reported.
//!
//! ## Usage
//!
//! ```rust
//! use star_registry::{Ledger, LedgerConfig};
//! use star_registry::core::{Keypair, Star};
//!
//! let ledger = Ledger::new(LedgerConfig::default()).unwrap();
//! assert_eq!(ledger.height(), 0);
//!
//! let wallet = Keypair::generate();
//! let address = wallet.address().to_hex();
//!
//! let message = ledger.request_ownership_challenge(&address);
//! let signature = wallet.sign_message(&message).to_hex();
//!
//! let block = ledger
//!     .submit_star(&address, &message, &signature, Star::new("2", "1", "test"))
//!     .unwrap();
//! assert_eq!(block.height, 1);
//! assert_eq!(ledger.get_stars_by_owner(&address).len(), 1);
//! assert!(ledger.validate_chain().is_valid());
//! ```
//!
//! ## Re-exports
//!
//! - `star_registry::core` - Core primitives (Block, BlockHash, Keypair, etc.)

pub mod clock;
pub mod config;
pub mod error;
pub mod ledger;
pub mod report;

pub use star_registry_core as core;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{LedgerConfig, DEFAULT_CHALLENGE_WINDOW_SECS};
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use report::{BlockFault, ChainReport};

pub use star_registry_core::{
    Address, Block, BlockHash, BlockPayload, Keypair, Star, StarClaim, ValidationError,
};
