//! Ledger configuration.

use star_registry_core::DEFAULT_GENESIS_MARKER;

/// Default replay window for a signed challenge, in seconds.
pub const DEFAULT_CHALLENGE_WINDOW_SECS: i64 = 300;

/// Configuration for the Ledger.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// A challenge is rejected once this many seconds have passed since issue.
    pub challenge_window_secs: i64,
    /// Marker record sealed into the genesis block.
    pub genesis_marker: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            challenge_window_secs: DEFAULT_CHALLENGE_WINDOW_SECS,
            genesis_marker: DEFAULT_GENESIS_MARKER.to_string(),
        }
    }
}
