//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use star_registry::{Clock, Ledger, LedgerConfig, ManualClock, Result};
use star_registry_core::{Block, Keypair, Star};

/// A ledger driven by a shared manual clock.
pub type TestLedger = Ledger<Arc<ManualClock>>;

/// Create a ledger whose clock starts at `start` (Unix seconds).
pub fn test_ledger(start: i64) -> (TestLedger, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start));
    let ledger = Ledger::with_clock(LedgerConfig::default(), Arc::clone(&clock))
        .expect("genesis must seal on an empty ledger");
    (ledger, clock)
}

/// Install a test-friendly tracing subscriber. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A wallet that can answer ownership challenges.
pub struct TestWallet {
    pub keypair: Keypair,
}

impl TestWallet {
    /// Create a wallet with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// The wallet's address, hex-encoded.
    pub fn address(&self) -> String {
        self.keypair.address().to_hex()
    }

    /// Sign a message, returning the hex signature.
    pub fn sign(&self, message: &str) -> String {
        self.keypair.sign_message(message).to_hex()
    }

    /// Run the full protocol: request a challenge, sign it, submit the star.
    pub fn claim<C: Clock>(&self, ledger: &Ledger<C>, star: Star) -> Result<Block> {
        let address = self.address();
        let message = ledger.request_ownership_challenge(&address);
        let signature = self.sign(&message);
        ledger.submit_star(&address, &message, &signature, star)
    }
}

impl Default for TestWallet {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple wallets for multi-owner tests.
pub fn multi_wallet_fixtures(count: usize) -> Vec<TestWallet> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[..8].copy_from_slice(&(i as u64).to_le_bytes());
            TestWallet::with_seed(seed)
        })
        .collect()
}
