//! Off-chain mirror of a verifier-side collection.
//!
//! The verifier contract stores a single root per owner and mutates it
//! through `updateLeaf`/`expandTree`; producing the witnesses those calls
//! consume requires the caller to keep its own copy of the leaf set. This
//! module is that copy: a fixed-capacity slot set filled left to right,
//! remembering the epoch tag each slot was committed under so the locally
//! recomputed root tracks the incrementally updated on-chain root even when
//! registrations span time buckets.

use crate::epoch::EpochTag;
use crate::hash::{empty_leaf_hash, leaf_hash, node_hash, Hash};
use crate::leaf::{LeafValue, EMPTY_LEAF};
use crate::merkle::{
    merkle_proof_from_hashes, merkle_root_from_hashes, EmptyRootCache, MerkleError, Proof,
};

#[derive(Clone, Debug)]
struct Slot {
    value: LeafValue,
    // Leaf hash under the epoch the slot was committed; sentinel hash for
    // unused slots.
    hash: Hash,
}

/// Result of registering a value: everything the verifier's `updateLeaf`
/// call needs, plus the root it must arrive at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    /// Slot the value landed in.
    pub index: usize,
    /// Opening for that slot; its witnesses are valid against both the old
    /// and the new root, since they never include the slot itself.
    pub proof: Proof,
    /// Root after the update.
    pub root: Hash,
}

/// Fixed-capacity, append-only slot set mirroring one owner's collection.
#[derive(Clone, Debug)]
pub struct Collection {
    slots: Vec<Slot>,
    used: usize,
}

impl Collection {
    /// Creates a collection of `2^rank` empty slots.
    pub fn new(rank: u32) -> Self {
        assert!(rank < usize::BITS, "collection rank out of range");
        let empty = Slot {
            value: EMPTY_LEAF,
            hash: empty_leaf_hash(),
        };
        Self {
            slots: vec![empty; 1usize << rank],
            used: 0,
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots already registered.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Current rank (capacity is `2^rank`).
    pub fn rank(&self) -> u32 {
        self.slots.len().trailing_zeros()
    }

    /// Value stored in a slot, if the index is in range.
    pub fn leaf(&self, index: usize) -> Option<&LeafValue> {
        self.slots.get(index).map(|slot| &slot.value)
    }

    /// Root over all slots, each hashed under its commitment epoch.
    pub fn root(&self) -> Result<Hash, MerkleError> {
        merkle_root_from_hashes(self.level_zero())
    }

    /// Opening for a slot against the current root.
    pub fn prove(&self, index: usize) -> Result<Proof, MerkleError> {
        merkle_proof_from_hashes(self.level_zero(), index)
    }

    /// Fills the next unused slot with `value` committed under `epoch`.
    pub fn register(
        &mut self,
        value: LeafValue,
        epoch: EpochTag,
    ) -> Result<Registration, MerkleError> {
        if self.used == self.slots.len() {
            return Err(MerkleError::CapacityExhausted {
                capacity: self.slots.len(),
            });
        }
        let index = self.used;
        self.slots[index] = Slot {
            value,
            hash: leaf_hash(&value, epoch),
        };
        self.used += 1;
        let proof = self.prove(index)?;
        let root = self.root()?;
        Ok(Registration { index, proof, root })
    }

    /// Doubles the capacity with empty slots.
    ///
    /// The resulting root equals `node_hash(old_root, empty_root)` where
    /// `empty_root` is the cached all-empty root of the old rank, which is
    /// exactly how the verifier's `expandTree` advances its stored root.
    /// Whether expansion is permitted (e.g. only when full) is the
    /// verifier's policy, not enforced here.
    pub fn expand(&mut self) -> Result<Hash, MerkleError> {
        let old_root = self.root()?;
        let empty = Slot {
            value: EMPTY_LEAF,
            hash: empty_leaf_hash(),
        };
        let added = self.slots.len();
        self.slots.extend(std::iter::repeat(empty).take(added));
        let sibling_rank = (self.rank() - 1) as usize;
        Ok(node_hash(&old_root, &EmptyRootCache::shared().root(sibling_rank)))
    }

    fn level_zero(&self) -> Vec<Hash> {
        self.slots.iter().map(|slot| slot.hash).collect()
    }
}
