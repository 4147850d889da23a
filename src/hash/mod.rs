//! Hashing primitives for the commitment layer.
//!
//! The backend is Keccak-256, matching the on-chain verifier; every hash
//! invocation is domain separated by a one byte node tag (`0x00` for leaves,
//! `0x01` for internal nodes) so leaf digests can never be reinterpreted as
//! internal nodes. Non-sentinel leaf hashes additionally absorb the 4-byte
//! epoch tag before the domain tag; the sentinel skips the salt so the root
//! of an all-empty tree is stable and precomputable.

pub mod domain;
pub mod keccak;

pub use domain::{
    empty_leaf_hash, leaf_hash, node_hash, LEAF_DOMAIN_TAG, NODE_DOMAIN_TAG,
};
pub use keccak::{hash, Hash, Hasher, HexOutput, DIGEST_SIZE};
