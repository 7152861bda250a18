//! Block: one sealed entry of the registry chain.
//!
//! A block starts life as a [`BlockBuilder`] holding only its payload. The
//! ledger assigns height, time and previous hash, then [`BlockBuilder::seal`]
//! encodes the payload and computes the hash over the finalized fields. A
//! sealed [`Block`] is never re-hashed; tampering is detected by
//! [`Block::validate`].

use serde::{Deserialize, Serialize};

use crate::canonical::compute_block_hash;
use crate::error::CoreError;
use crate::payload::{BlockPayload, StarClaim};
use crate::types::BlockHash;

/// A sealed block.
///
/// Serializes to the wire field set `height, time, previousBlockHash, hash, body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Index of the block in the chain (genesis is 0).
    pub height: u64,

    /// Seal time (Unix seconds).
    pub time: i64,

    /// Hash of the block at `height - 1` (None for genesis).
    #[serde(with = "crate::types::previous_hash")]
    pub previous_block_hash: Option<BlockHash>,

    /// Content hash over the four fields above, fixed at seal time.
    pub hash: BlockHash,

    /// Encoded payload (hex of the JSON record).
    pub body: String,
}

impl Block {
    /// Recompute the content hash from the current field values.
    pub fn compute_hash(&self) -> Result<BlockHash, CoreError> {
        compute_block_hash(
            self.height,
            self.time,
            self.previous_block_hash.as_ref(),
            &self.body,
        )
    }

    /// Whether the block is unchanged since sealing.
    pub fn validate(&self) -> bool {
        matches!(self.compute_hash(), Ok(hash) if hash == self.hash)
    }

    /// Decode the semantic record carried by this block.
    pub fn decode_payload(&self) -> Result<BlockPayload, CoreError> {
        BlockPayload::decode(&self.body)
    }

    /// The ownership claim carried by this block, if any.
    pub fn star_claim(&self) -> Option<StarClaim> {
        match self.decode_payload() {
            Ok(BlockPayload::Claim(claim)) => Some(claim),
            _ => None,
        }
    }

    /// Check if this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.height == 0
    }
}

/// Builder for sealing a block.
#[derive(Debug, Clone)]
pub struct BlockBuilder {
    payload: BlockPayload,
    height: u64,
    time: i64,
    previous_block_hash: Option<BlockHash>,
}

impl BlockBuilder {
    /// Start building a block around a payload.
    pub fn new(payload: BlockPayload) -> Self {
        Self {
            payload,
            height: 0,
            time: 0,
            previous_block_hash: None,
        }
    }

    /// Set the height.
    pub fn height(mut self, height: u64) -> Self {
        self.height = height;
        self
    }

    /// Set the seal time.
    pub fn time(mut self, time: i64) -> Self {
        self.time = time;
        self
    }

    /// Set the previous block hash.
    pub fn previous(mut self, previous: BlockHash) -> Self {
        self.previous_block_hash = Some(previous);
        self
    }

    /// The payload being sealed.
    pub fn payload(&self) -> &BlockPayload {
        &self.payload
    }

    /// Encode the payload and hash the finalized fields.
    pub fn seal(self) -> Result<Block, CoreError> {
        let body = self.payload.encode()?;
        let hash = compute_block_hash(
            self.height,
            self.time,
            self.previous_block_hash.as_ref(),
            &body,
        )?;

        Ok(Block {
            height: self.height,
            time: self.time,
            previous_block_hash: self.previous_block_hash,
            hash,
            body,
        })
    }
}
