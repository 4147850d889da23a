use crate::epoch::EpochTag;
use crate::hash::{leaf_hash, node_hash, Hash};
use crate::leaf::LeafValue;

use super::types::MerkleError;

pub(crate) fn ensure_leaf_count(count: usize) -> Result<(), MerkleError> {
    if count == 0 {
        return Err(MerkleError::EmptyLeaves);
    }
    if !count.is_power_of_two() {
        return Err(MerkleError::LeafCountNotPowerOfTwo { got: count });
    }
    Ok(())
}

#[cfg(feature = "parallel")]
pub(crate) fn hash_leaves(leaves: &[LeafValue], epoch: EpochTag) -> Vec<Hash> {
    use rayon::prelude::*;
    leaves.par_iter().map(|leaf| leaf_hash(leaf, epoch)).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn hash_leaves(leaves: &[LeafValue], epoch: EpochTag) -> Vec<Hash> {
    leaves.iter().map(|leaf| leaf_hash(leaf, epoch)).collect()
}

/// Derives the next level by pairing adjacent digests.
///
/// An unpaired tail entry of an odd-length level is carried forward
/// unchanged rather than paired with itself. Leaf counts are validated to a
/// power of two before any level is built, so the carry branch never runs;
/// it mirrors the reference behaviour and is kept for compatibility.
pub(crate) fn hash_level(level: &[Hash]) -> Vec<Hash> {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));
    let mut i = 0;
    while i < level.len() {
        if i == level.len() - 1 {
            next.push(level[i]);
        } else {
            next.push(node_hash(&level[i], &level[i + 1]));
        }
        i += 2;
    }
    next
}

/// Computes the Merkle root over an ordered leaf sequence.
///
/// Every leaf is hashed with the supplied epoch tag, then adjacent digests
/// are folded pairwise until one remains. A single leaf is its own root
/// level, so the result is just its leaf hash.
pub fn merkle_root(leaves: &[LeafValue], epoch: EpochTag) -> Result<Hash, MerkleError> {
    ensure_leaf_count(leaves.len())?;
    merkle_root_from_hashes(hash_leaves(leaves, epoch))
}

/// Computes the Merkle root over an already-hashed level zero.
///
/// Building block for callers whose leaves were committed under different
/// epoch tags and therefore cannot be rehashed uniformly.
pub fn merkle_root_from_hashes(hashes: Vec<Hash>) -> Result<Hash, MerkleError> {
    ensure_leaf_count(hashes.len())?;
    let mut level = hashes;
    while level.len() > 1 {
        level = hash_level(&level);
    }
    Ok(level[0])
}
