//! Block validation: content-hash verification and chain-position checks.

use crate::block::Block;
use crate::error::ValidationError;

/// Validate a block's content hash.
pub fn validate_block(block: &Block) -> Result<(), ValidationError> {
    let recomputed = block.compute_hash()?;
    if recomputed != block.hash {
        return Err(ValidationError::HashMismatch {
            stored: block.hash,
            recomputed,
        });
    }
    Ok(())
}

/// Validate a block's shape without looking at its neighbours.
///
/// Genesis carries no previous hash; every later block must carry one.
pub fn validate_block_structure(block: &Block) -> Result<(), ValidationError> {
    match (block.height, block.previous_block_hash) {
        (0, Some(_)) => Err(ValidationError::GenesisHasPrevious),
        (h, None) if h > 0 => Err(ValidationError::MissingPrevious(h)),
        _ => Ok(()),
    }
}

/// Collect every fault of `block` sitting at `index` behind `predecessor`.
///
/// Unlike the single-check functions above this never stops at the first
/// problem, so the caller gets the full picture for one block.
pub fn block_faults(
    block: &Block,
    index: u64,
    predecessor: Option<&Block>,
) -> Vec<ValidationError> {
    let mut faults = Vec::new();

    if let Err(e) = validate_block(block) {
        faults.push(e);
    }

    if block.height != index {
        faults.push(ValidationError::HeightMismatch {
            expected: index,
            got: block.height,
        });
    }

    if let Err(e) = validate_block_structure(block) {
        faults.push(e);
    }

    if let Some(prev) = predecessor {
        if block.previous_block_hash != Some(prev.hash) {
            faults.push(ValidationError::BrokenLink {
                height: block.height,
                expected: prev.hash,
                got: block.previous_block_hash,
            });
        }
    }

    faults
}
