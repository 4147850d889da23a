//! Canonical byte layout for proofs exchanged with the verifier.
//!
//! Layout: `path` as `u64` little-endian, witness count as `u32`
//! little-endian, then each witness as 32 raw bytes in leaf-level-first
//! order. No padding, no trailing bytes.

use super::proof::Proof;
use super::types::MerkleError;
use crate::hash::{Hash, DIGEST_SIZE};

/// Serialises a [`Proof`] into the canonical byte layout.
pub fn encode_proof(proof: &Proof) -> Vec<u8> {
    let mut out = Vec::with_capacity(12 + proof.witnesses.len() * DIGEST_SIZE);
    out.extend_from_slice(&proof.path.to_le_bytes());
    out.extend_from_slice(&(proof.witnesses.len() as u32).to_le_bytes());
    for witness in &proof.witnesses {
        out.extend_from_slice(witness.as_bytes());
    }
    out
}

/// Deserialises a [`Proof`] from its canonical byte representation.
pub fn decode_proof(bytes: &[u8]) -> Result<Proof, MerkleError> {
    let mut cursor = 0usize;
    let mut take = |len: usize| -> Result<&[u8], MerkleError> {
        if cursor + len > bytes.len() {
            return Err(MerkleError::Serialization);
        }
        let slice = &bytes[cursor..cursor + len];
        cursor += len;
        Ok(slice)
    };

    let mut path_bytes = [0u8; 8];
    path_bytes.copy_from_slice(take(8)?);
    let path = u64::from_le_bytes(path_bytes);
    let mut count_bytes = [0u8; 4];
    count_bytes.copy_from_slice(take(4)?);
    let count = u32::from_le_bytes(count_bytes) as usize;
    let mut witnesses = Vec::with_capacity(count.min(64));
    for _ in 0..count {
        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(take(DIGEST_SIZE)?);
        witnesses.push(Hash::from_bytes(digest));
    }
    if cursor != bytes.len() {
        return Err(MerkleError::Serialization);
    }

    Ok(Proof { path, witnesses })
}
