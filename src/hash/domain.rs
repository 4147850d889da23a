//! Domain-separated leaf and node hashing.

use crate::epoch::EpochTag;
use crate::leaf::{LeafValue, EMPTY_LEAF};

use super::keccak::{Hash, Hasher};

/// Domain tag absorbed before leaf payloads.
pub const LEAF_DOMAIN_TAG: u8 = 0x00;

/// Domain tag absorbed before child digests of an internal node.
pub const NODE_DOMAIN_TAG: u8 = 0x01;

/// Hashes a leaf value, salting non-sentinel leaves with the epoch tag.
///
/// The sentinel is hashed without the salt: the root of an all-empty subtree
/// must be the same whenever it is evaluated, otherwise the precomputed
/// empty-root table could never match the verifier's state.
pub fn leaf_hash(leaf: &LeafValue, epoch: EpochTag) -> Hash {
    if leaf.is_empty_sentinel() {
        return empty_leaf_hash();
    }
    let mut hasher = Hasher::new();
    hasher.update(&epoch.to_be_bytes());
    hasher.update(&[LEAF_DOMAIN_TAG]);
    hasher.update(leaf.as_bytes());
    hasher.finalize()
}

/// Stable hash of the empty-slot sentinel, independent of any epoch.
pub fn empty_leaf_hash() -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(&[LEAF_DOMAIN_TAG]);
    hasher.update(EMPTY_LEAF.as_bytes());
    hasher.finalize()
}

/// Hashes an ordered pair of child digests into their parent.
pub fn node_hash(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(&[NODE_DOMAIN_TAG]);
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    hasher.finalize()
}
