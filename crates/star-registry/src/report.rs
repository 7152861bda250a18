//! Chain validation reports.

use star_registry_core::{BlockHash, ValidationError};

/// Every problem found with one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFault {
    /// Position of the block in the chain.
    pub index: u64,
    /// The hash stored in the block.
    pub hash: BlockHash,
    /// All reasons the block failed, in check order.
    pub reasons: Vec<ValidationError>,
}

/// Result of validating the whole chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainReport {
    /// Number of blocks inspected.
    pub blocks_checked: usize,
    /// One entry per faulty block, in chain order.
    pub faults: Vec<BlockFault>,
}

impl ChainReport {
    /// Check if the chain passed validation.
    pub fn is_valid(&self) -> bool {
        self.faults.is_empty()
    }

    /// Indices of the faulty blocks.
    pub fn faulty_indices(&self) -> Vec<u64> {
        self.faults.iter().map(|f| f.index).collect()
    }
}
