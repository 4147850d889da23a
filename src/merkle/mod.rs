//! Binary Merkle commitment layer.
//!
//! The module fixes the following protocol knobs:
//!
//! * **Shape:** binary trees over 1 or a power-of-two number of leaves; other
//!   counts are rejected up front. The level fold still carries an unpaired
//!   tail entry forward unchanged, matching the reference behaviour for
//!   ragged levels even though that branch is unreachable here.
//! * **Hashing:** Keccak-256 with one byte domain tags (`0x00` leaves,
//!   `0x01` internal nodes); non-sentinel leaf hashes absorb the 4-byte
//!   epoch tag first.
//! * **Openings:** one target index per proof; sibling witnesses ordered
//!   leaf level first, direction bits packed LSB-first into a `u64` path.
//! * **Capacity doubling:** the root of `2^(r+1)` empty-padded slots is
//!   `node_hash(root_r, EmptyRootCache::root(r))`, so expansion never
//!   rehashes existing leaves.

mod cache;
mod proof;
mod ser;
mod tree;
mod types;

pub use cache::EmptyRootCache;
pub use proof::{compute_root_from_proof, merkle_proof, merkle_proof_from_hashes, verify_proof, Proof};
pub use ser::{decode_proof, encode_proof};
pub use tree::{merkle_root, merkle_root_from_hashes};
pub use types::MerkleError;
