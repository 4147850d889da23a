use serde::{Deserialize, Serialize};

use crate::epoch::EpochTag;
use crate::hash::{leaf_hash, node_hash, Hash};
use crate::leaf::LeafValue;

use super::tree::{ensure_leaf_count, hash_leaves, hash_level};
use super::types::MerkleError;

/// Merkle opening for a single leaf index.
///
/// `witnesses[i]` is the sibling digest consumed at level `i` (leaf level
/// first). Bit `i` of `path` records the target's position at that level:
/// `0` when the target was the left child (sibling on the right), `1` when
/// it was the right child. Bits are packed least-significant-bit-first from
/// the leaf level toward the root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub path: u64,
    pub witnesses: Vec<Hash>,
}

impl Proof {
    /// Number of levels the opening traverses.
    pub fn depth(&self) -> usize {
        self.witnesses.len()
    }
}

/// Produces the opening for `leaves[index]`.
pub fn merkle_proof(
    leaves: &[LeafValue],
    index: usize,
    epoch: EpochTag,
) -> Result<Proof, MerkleError> {
    ensure_leaf_count(leaves.len())?;
    merkle_proof_from_hashes(hash_leaves(leaves, epoch), index)
}

/// Produces an opening from an already-hashed level zero.
pub fn merkle_proof_from_hashes(hashes: Vec<Hash>, index: usize) -> Result<Proof, MerkleError> {
    ensure_leaf_count(hashes.len())?;
    if index >= hashes.len() {
        return Err(MerkleError::IndexOutOfRange {
            index,
            max: hashes.len() - 1,
        });
    }

    let mut level = hashes;
    let mut idx = index;
    let mut bits: Vec<u8> = Vec::new();
    let mut witnesses = Vec::new();

    while level.len() > 1 {
        if idx % 2 == 0 {
            // A left child whose sibling is missing (odd-length level tail)
            // is carried forward: no witness, no path bit. Unreachable once
            // the leaf count is validated, kept to match the level fold.
            if idx < level.len() - 1 {
                bits.push(0);
                witnesses.push(level[idx + 1]);
            }
        } else {
            bits.push(1);
            witnesses.push(level[idx - 1]);
        }
        idx /= 2;
        level = hash_level(&level);
    }

    let path = bits
        .iter()
        .rev()
        .fold(0u64, |acc, bit| (acc << 1) | u64::from(*bit));
    Ok(Proof { path, witnesses })
}

/// Recombines a leaf with its opening, reproducing the root the opening was
/// generated against iff leaf, index and witnesses all match.
pub fn compute_root_from_proof(leaf: &LeafValue, epoch: EpochTag, proof: &Proof) -> Hash {
    let mut current = leaf_hash(leaf, epoch);
    for (depth, witness) in proof.witnesses.iter().enumerate() {
        current = if (proof.path >> depth) & 1 == 0 {
            node_hash(&current, witness)
        } else {
            node_hash(witness, &current)
        };
    }
    current
}

/// Checks an opening against an expected root.
pub fn verify_proof(
    root: &Hash,
    leaf: &LeafValue,
    epoch: EpochTag,
    proof: &Proof,
) -> Result<(), MerkleError> {
    if compute_root_from_proof(leaf, epoch, proof) == *root {
        Ok(())
    } else {
        Err(MerkleError::VerificationFailed)
    }
}
