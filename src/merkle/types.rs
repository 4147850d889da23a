use core::fmt;

/// Errors emitted by the commitment layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerkleError {
    /// No leaves were supplied to a root or proof computation.
    EmptyLeaves,
    /// Leaf count is neither one nor a power of two.
    LeafCountNotPowerOfTwo { got: usize },
    /// Proof target lies beyond the last leaf.
    IndexOutOfRange { index: usize, max: usize },
    /// Registration targets a slot beyond the collection capacity.
    CapacityExhausted { capacity: usize },
    /// Recombining a leaf with its witnesses did not reproduce the root.
    VerificationFailed,
    /// Malformed canonical proof bytes.
    Serialization,
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::EmptyLeaves => write!(f, "no leaves supplied"),
            MerkleError::LeafCountNotPowerOfTwo { got } => {
                write!(f, "leaf count {got} is neither 1 nor a power of two")
            }
            MerkleError::IndexOutOfRange { index, max } => {
                write!(f, "index {index} out of range (max {max})")
            }
            MerkleError::CapacityExhausted { capacity } => {
                write!(f, "all {capacity} slots are in use")
            }
            MerkleError::VerificationFailed => write!(f, "proof does not match root"),
            MerkleError::Serialization => write!(f, "malformed proof encoding"),
        }
    }
}

impl std::error::Error for MerkleError {}
