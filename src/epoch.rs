//! Coarse time quantization for leaf hashing.
//!
//! Leaf hashes are salted with a 4-byte big-endian bucket index computed as
//! `floor(unix_millis / 100_000_000)`, a bucket of roughly 1.157 days. The
//! verifier derives the same tag from its own clock and accepts a hash that
//! matches for its current bucket, so prover and verifier never need exact
//! wall-clock agreement.
//!
//! The tag is always an explicit parameter to hashing, tree and proof
//! operations; [`EpochTag::now`] is the only place in the crate that reads
//! the system clock.

use core::fmt;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Width of one time bucket in milliseconds (≈ 1.157 days).
pub const BUCKET_MILLIS: u64 = 100_000_000;

/// Big-endian 4-byte time-bucket tag salted into non-sentinel leaf hashes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EpochTag(u32);

impl EpochTag {
    /// Quantizes a unix timestamp in milliseconds to its bucket.
    ///
    /// Bucket indices beyond `u32::MAX` saturate; no representable clock
    /// reaches that range before year ≈ 13.6 million.
    pub fn from_unix_millis(millis: u64) -> Self {
        Self(u32::try_from(millis / BUCKET_MILLIS).unwrap_or(u32::MAX))
    }

    /// Quantizes an arbitrary [`SystemTime`]; times before the unix epoch
    /// map to bucket zero.
    pub fn from_system_time(time: SystemTime) -> Self {
        let millis = time
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);
        Self::from_unix_millis(millis)
    }

    /// Bucket for the current system time.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Reconstructs a tag from its wire encoding.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Canonical big-endian wire encoding.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Raw bucket index.
    pub const fn bucket(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for EpochTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EpochTag({})", self.0)
    }
}
