//! Time-salted Merkle commitment core for fixed-capacity registration
//! collections.
//!
//! The crate maintains a per-owner commitment over a power-of-two set of
//! 32-byte leaf slots: text is canonically encoded ([`leaf`]), leaf hashes
//! are salted with a coarse time bucket ([`epoch`]) and domain separated
//! from internal nodes ([`hash`]), roots and single-index openings are
//! computed over the leaf set ([`merkle`]), and all-empty subtree roots are
//! memoized so capacity can double without rehashing existing content
//! ([`merkle::EmptyRootCache`]). The [`collection`] module mirrors the
//! verifier-side collection so callers can produce the witnesses its
//! `updateLeaf`/`verify` operations consume.
//!
//! All operations are pure, synchronous computations over in-memory values;
//! the only clock access is [`EpochTag::now`] and the only shared state is
//! the write-once empty-root table.

pub mod collection;
pub mod epoch;
pub mod hash;
pub mod leaf;
pub mod merkle;

pub use collection::{Collection, Registration};
pub use epoch::{EpochTag, BUCKET_MILLIS};
pub use hash::{empty_leaf_hash, leaf_hash, node_hash, Hash};
pub use leaf::{LeafError, LeafValue, EMPTY_LEAF, EMPTY_MARKER, LEAF_SIZE};
pub use merkle::{
    compute_root_from_proof, decode_proof, encode_proof, merkle_proof, merkle_proof_from_hashes,
    merkle_root, merkle_root_from_hashes, verify_proof, EmptyRootCache, MerkleError, Proof,
};
