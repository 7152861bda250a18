//! The Ledger: an in-memory, hash-chained registry of star ownership claims.
//!
//! The Ledger owns the block sequence behind a single reader-writer lock.
//! Queries share the lock and hand out clones; every write goes through the
//! private append primitive, which holds the write lock from field assignment
//! through sealing and validation to the push.

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use star_registry_core::{
    block_faults, verify_message, Block, BlockBuilder, BlockHash, BlockPayload, Challenge,
    CoreError, Star, StarClaim,
};

use crate::clock::{Clock, SystemClock};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::report::{BlockFault, ChainReport};

/// The block sequence and its height, always updated together.
struct Chain {
    blocks: Vec<Block>,
    /// `blocks.len() - 1`, or -1 when empty.
    height: i64,
}

impl Chain {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            height: -1,
        }
    }
}

/// The star registry ledger.
///
/// Provides:
/// - Ownership challenges and signed star submissions
/// - Lookups by hash, height and owner
/// - Whole-chain validation
pub struct Ledger<C: Clock = SystemClock> {
    chain: RwLock<Chain>,
    clock: C,
    config: LedgerConfig,
}

impl Ledger<SystemClock> {
    /// Create a ledger on the wall clock and seal its genesis block.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Ledger<C> {
    /// Create a ledger on the given clock and seal its genesis block.
    pub fn with_clock(config: LedgerConfig, clock: C) -> Result<Self> {
        let ledger = Self {
            chain: RwLock::new(Chain::new()),
            clock,
            config,
        };
        ledger.initialize()?;
        Ok(ledger)
    }

    /// Get the configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chain State
    // ─────────────────────────────────────────────────────────────────────────

    /// Seal the genesis block if the chain is empty.
    ///
    /// Returns the genesis block when one was created, `None` otherwise.
    pub fn initialize(&self) -> Result<Option<Block>> {
        let mut chain = self.chain.write();
        if chain.height >= 0 {
            return Ok(None);
        }

        let genesis = BlockBuilder::new(BlockPayload::genesis(self.config.genesis_marker.as_str()));
        let block = self.append_locked(&mut chain, genesis)?;
        info!(hash = %block.hash, "sealed genesis block");
        Ok(Some(block))
    }

    /// Current height: number of blocks minus one.
    pub fn height(&self) -> i64 {
        self.chain.read().height
    }

    /// Number of blocks in the chain.
    pub fn len(&self) -> usize {
        self.chain.read().blocks.len()
    }

    /// Check if the chain holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.chain.read().blocks.is_empty()
    }

    /// The block at the current height.
    pub fn latest_block(&self) -> Option<Block> {
        self.chain.read().blocks.last().cloned()
    }

    /// Snapshot of the whole chain, in height order.
    pub fn blocks(&self) -> Vec<Block> {
        self.chain.read().blocks.clone()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ownership Protocol
    // ─────────────────────────────────────────────────────────────────────────

    /// Issue a challenge message for `address` to sign.
    pub fn request_ownership_challenge(&self, address: &str) -> String {
        let challenge = Challenge::new(address, self.clock.now()).to_string();
        debug!(%address, %challenge, "issued ownership challenge");
        challenge
    }

    /// Admit a star claim proven by a signed challenge.
    ///
    /// Checks run cheapest first: chain health, message shape, challenge age,
    /// then the signature.
    pub fn submit_star(
        &self,
        address: &str,
        message: &str,
        signature: &str,
        star: Star,
    ) -> Result<Block> {
        let report = self.validate_chain();
        if !report.is_valid() {
            warn!(
                faulty = ?report.faulty_indices(),
                "refusing submission on invalid chain"
            );
            return Err(LedgerError::ChainInvalid {
                faults: report.faults,
            });
        }

        let challenge: Challenge = message.parse().map_err(|e: CoreError| {
            warn!(%address, error = %e, "malformed challenge message");
            LedgerError::MalformedMessage(e.to_string())
        })?;

        if challenge.address != address {
            warn!(%address, issued_to = %challenge.address, "challenge address mismatch");
            return Err(LedgerError::MalformedMessage(format!(
                "challenge was issued to {}",
                challenge.address
            )));
        }

        let elapsed = challenge.elapsed(self.clock.now());
        if elapsed < 0 {
            warn!(%address, issued_at = challenge.issued_at, "challenge dated in the future");
            return Err(LedgerError::MalformedMessage(
                "challenge timestamp is in the future".into(),
            ));
        }
        if elapsed >= self.config.challenge_window_secs {
            warn!(%address, elapsed, "challenge expired");
            return Err(LedgerError::ChallengeExpired {
                issued_at: challenge.issued_at,
                elapsed,
                window: self.config.challenge_window_secs,
            });
        }

        verify_message(address, message, signature).map_err(|e| {
            warn!(%address, error = %e, "signature rejected");
            LedgerError::InvalidSignature(address.to_string())
        })?;

        let block = self.append(BlockBuilder::new(BlockPayload::claim(address, star)))?;
        info!(height = block.height, hash = %block.hash, owner = %address, "registered star");
        Ok(block)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Append
    // ─────────────────────────────────────────────────────────────────────────

    fn append(&self, builder: BlockBuilder) -> Result<Block> {
        let mut chain = self.chain.write();
        self.append_locked(&mut chain, builder)
    }

    /// Position, seal, validate and push one block. The caller holds the write lock.
    ///
    /// The block is positioned from the current tip, so the fault check only
    /// fires if the tip itself is inconsistent.
    fn append_locked(&self, chain: &mut Chain, builder: BlockBuilder) -> Result<Block> {
        let height = chain.blocks.len() as u64;

        let mut builder = builder.height(height).time(self.clock.now());
        if let Some(last) = chain.blocks.last() {
            builder = builder.previous(last.hash);
        }
        let block = builder.seal()?;

        let faults = block_faults(&block, height, chain.blocks.last());
        if !faults.is_empty() {
            warn!(height, ?faults, "freshly sealed block failed validation");
            return Err(LedgerError::Append { height, faults });
        }

        chain.blocks.push(block.clone());
        chain.height += 1;
        debug!(height, hash = %block.hash, "appended block");
        Ok(block)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// All blocks whose hash equals `hash` (hex).
    pub fn get_block_by_hash(&self, hash: &str) -> Result<Vec<Block>> {
        let wanted =
            BlockHash::from_hex(hash).map_err(|_| LedgerError::NotFound(hash.to_string()))?;

        let matches: Vec<Block> = self
            .chain
            .read()
            .blocks
            .iter()
            .filter(|b| b.hash == wanted)
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(LedgerError::NotFound(hash.to_string()));
        }
        Ok(matches)
    }

    /// The block at `height`.
    pub fn get_block_by_height(&self, height: u64) -> Result<Block> {
        let chain = self.chain.read();
        usize::try_from(height)
            .ok()
            .and_then(|idx| chain.blocks.get(idx))
            .filter(|b| b.height == height)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(format!("block at height {}", height)))
    }

    /// Every star claimed by `address`, in chain order.
    ///
    /// Blocks whose body does not decode to a claim (the genesis marker,
    /// corrupt bodies) are skipped.
    pub fn get_stars_by_owner(&self, address: &str) -> Vec<StarClaim> {
        self.chain
            .read()
            .blocks
            .iter()
            .filter_map(Block::star_claim)
            .filter(|claim| claim.owner == address)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate every block and every link, collecting all faults.
    pub fn validate_chain(&self) -> ChainReport {
        let chain = self.chain.read();

        let faults: Vec<BlockFault> = chain
            .blocks
            .iter()
            .enumerate()
            .filter_map(|(i, block)| {
                let predecessor = i.checked_sub(1).and_then(|p| chain.blocks.get(p));
                let reasons = block_faults(block, i as u64, predecessor);
                (!reasons.is_empty()).then(|| BlockFault {
                    index: i as u64,
                    hash: block.hash,
                    reasons,
                })
            })
            .collect();

        let report = ChainReport {
            blocks_checked: chain.blocks.len(),
            faults,
        };

        if report.is_valid() {
            debug!(blocks = report.blocks_checked, "chain validated");
        } else {
            warn!(faulty = ?report.faulty_indices(), "chain validation failed");
        }
        report
    }
}
