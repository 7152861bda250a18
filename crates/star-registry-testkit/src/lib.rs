//! # Star Registry Testkit
//!
//! Testing utilities for the Star Registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed payload bodies and header bytes that pin the wire format
//! - **Generators**: Proptest strategies for stars, claims and wallets
//! - **Fixtures**: Wallets that run the challenge protocol against a ledger
//!
//! Cross-crate scenario and property tests live in this crate's `tests/`
//! directory.
//!
//! ## Test Fixtures
//!
//! ```rust
//! use star_registry_testkit::fixtures::{test_ledger, TestWallet};
//! use star_registry_core::Star;
//!
//! let (ledger, clock) = test_ledger(1_736_870_400);
//! let wallet = TestWallet::with_seed([7; 32]);
//!
//! clock.advance(10);
//! let block = wallet.claim(&ledger, Star::new("2", "1", "test")).unwrap();
//! assert_eq!(block.height, 1);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{init_tracing, multi_wallet_fixtures, test_ledger, TestLedger, TestWallet};
pub use generators::{star, star_claim, ClaimParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
