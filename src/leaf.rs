//! Canonical leaf encoding for the commitment layer.
//!
//! A leaf is always exactly [`LEAF_SIZE`] bytes, left-zero-padded. Text is
//! encoded one byte per character (the character's code point), which is the
//! same rule the on-chain verifier applies when reconstructing leaf values;
//! characters above U+00FF have no single-byte encoding and are rejected.
//! Unused slots hold the reserved sentinel [`EMPTY_LEAF`], the padded
//! encoding of the marker `"__"`.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Fixed width of every leaf value in bytes.
pub const LEAF_SIZE: usize = 32;

/// Marker string whose padded encoding is the empty-slot sentinel.
pub const EMPTY_MARKER: &str = "__";

/// Reserved sentinel value for an unused slot (`"__"` left-zero-padded).
pub const EMPTY_LEAF: LeafValue = LeafValue {
    bytes: [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        b'_', b'_',
    ],
};

/// Fixed-width committed value at the base of the tree.
///
/// Immutable once constructed; the encoder is the only way to build one from
/// text, so every `LeafValue` in circulation satisfies the padding rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeafValue {
    bytes: [u8; LEAF_SIZE],
}

impl LeafValue {
    /// Encodes text into a leaf value, one byte per character.
    ///
    /// Fails when a character lies above U+00FF or when the encoding exceeds
    /// [`LEAF_SIZE`] bytes. Never truncates.
    pub fn from_text(text: &str) -> Result<Self, LeafError> {
        let mut encoded = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let code = u32::from(ch);
            if code > 0xFF {
                return Err(LeafError::UnencodableChar { ch });
            }
            encoded.push(code as u8);
        }
        if encoded.len() > LEAF_SIZE {
            return Err(LeafError::TooLong { len: encoded.len() });
        }
        let mut bytes = [0u8; LEAF_SIZE];
        bytes[LEAF_SIZE - encoded.len()..].copy_from_slice(&encoded);
        Ok(Self { bytes })
    }

    /// Wraps raw bytes received over the wire.
    pub const fn from_bytes(bytes: [u8; LEAF_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation.
    pub const fn as_bytes(&self) -> &[u8; LEAF_SIZE] {
        &self.bytes
    }

    /// Consumes the leaf and returns its bytes.
    pub const fn into_bytes(self) -> [u8; LEAF_SIZE] {
        self.bytes
    }

    /// Whether this value is the reserved empty-slot sentinel.
    pub fn is_empty_sentinel(&self) -> bool {
        *self == EMPTY_LEAF
    }
}

impl fmt::Debug for LeafValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LeafValue(0x")?;
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Errors surfaced by the leaf encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafError {
    /// Encoded text exceeds the fixed leaf width.
    TooLong { len: usize },
    /// Character has no single-byte encoding.
    UnencodableChar { ch: char },
}

impl fmt::Display for LeafError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafError::TooLong { len } => {
                write!(f, "encoded text is {len} bytes, leaf width is {LEAF_SIZE}")
            }
            LeafError::UnencodableChar { ch } => {
                write!(f, "character {ch:?} has no single-byte encoding")
            }
        }
    }
}

impl std::error::Error for LeafError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_matches_marker_encoding() {
        let encoded = LeafValue::from_text(EMPTY_MARKER).unwrap();
        assert_eq!(encoded, EMPTY_LEAF);
        assert!(encoded.is_empty_sentinel());
    }

    #[test]
    fn text_is_right_aligned() {
        let leaf = LeafValue::from_text("hello world").unwrap();
        assert_eq!(&leaf.as_bytes()[..21], &[0u8; 21]);
        assert_eq!(&leaf.as_bytes()[21..], b"hello world");
        assert!(!leaf.is_empty_sentinel());
    }

    #[test]
    fn empty_text_encodes_to_zeroes() {
        let leaf = LeafValue::from_text("").unwrap();
        assert_eq!(leaf.as_bytes(), &[0u8; LEAF_SIZE]);
        assert!(!leaf.is_empty_sentinel());
    }

    #[test]
    fn full_width_text_is_accepted() {
        let text: String = "a".repeat(LEAF_SIZE);
        let leaf = LeafValue::from_text(&text).unwrap();
        assert_eq!(leaf.as_bytes(), &[b'a'; LEAF_SIZE]);
    }

    #[test]
    fn overlong_text_is_rejected() {
        let text: String = "a".repeat(LEAF_SIZE + 1);
        assert_eq!(
            LeafValue::from_text(&text),
            Err(LeafError::TooLong { len: LEAF_SIZE + 1 })
        );
    }

    #[test]
    fn latin1_characters_are_accepted() {
        let leaf = LeafValue::from_text("café").unwrap();
        assert_eq!(&leaf.as_bytes()[28..], &[b'c', b'a', b'f', 0xE9]);
    }

    #[test]
    fn wide_characters_are_rejected() {
        assert_eq!(
            LeafValue::from_text("€"),
            Err(LeafError::UnencodableChar { ch: '€' })
        );
    }
}
