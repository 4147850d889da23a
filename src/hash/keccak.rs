//! Keccak-256 digest type and streaming hasher.

use core::fmt;
use serde::{Deserialize, Serialize};
use sha3::{Digest as _, Keccak256};

/// Size of a digest emitted by the commitment layer.
pub const DIGEST_SIZE: usize = 32;

/// Fixed-width Keccak-256 digest value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hash {
    bytes: [u8; DIGEST_SIZE],
}

impl Hash {
    /// Constructs a hash value from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation of the digest.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.bytes
    }

    /// Consumes the hash and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.bytes
    }

    /// Returns a helper that formats the digest as lowercase hexadecimal.
    pub fn to_hex(&self) -> HexOutput {
        HexOutput(self.bytes)
    }
}

impl From<[u8; DIGEST_SIZE]> for Hash {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; DIGEST_SIZE] {
    fn from(hash: Hash) -> Self {
        hash.into_bytes()
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash(0x{})", self.to_hex())
    }
}

/// Hexadecimal representation of a digest.
#[derive(Clone, Copy)]
pub struct HexOutput([u8; DIGEST_SIZE]);

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Streaming Keccak-256 hasher.
#[derive(Clone, Default)]
pub struct Hasher {
    inner: Keccak256,
}

impl Hasher {
    /// Creates a hasher with an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs `input` into the state.
    pub fn update(&mut self, input: &[u8]) {
        self.inner.update(input);
    }

    /// Finalizes the state and returns the digest.
    pub fn finalize(self) -> Hash {
        Hash::from_bytes(self.inner.finalize().into())
    }
}

/// One-shot convenience wrapper around [`Hasher`].
pub fn hash(input: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize()
}
