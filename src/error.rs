use thiserror::Error;

/// Errors from Merkle tree construction and proof generation.
///
/// Verification never produces an error: proof verifiers return a plain
/// `bool` verdict so that malformed or adversarial proofs fail instead of
/// crashing. `InvalidProof` is only surfaced when decoding serialized
/// proofs.
#[derive(Debug, Error)]
pub enum MerkleTreeError {
    /// Tried to build a tree from an empty leaf sequence.
    #[error("cannot build a Merkle tree from an empty leaf sequence")]
    EmptyLeaves,
    /// The leaf sequence exceeds the configured maximum.
    #[error("leaf count {count} exceeds maximum {max}")]
    TooManyLeaves {
        /// Number of leaves supplied.
        count: usize,
        /// Configured maximum leaf count.
        max: usize,
    },
    /// Inclusion proof requested for an index outside the committed range.
    #[error("index {index} is out of range (leaf count {len})")]
    IndexOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// Number of leaves in the tree.
        len: usize,
    },
    /// Exclusion proof requested for a value that is present in the leaf
    /// set.
    #[error("target is already present in the leaf set at index {index}")]
    AlreadyPresent {
        /// Index at which the target was found.
        index: usize,
    },
    /// A serialized proof failed to decode or is structurally invalid.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
