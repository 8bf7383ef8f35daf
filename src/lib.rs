//! Binary Merkle tree with inclusion and exclusion proofs using Blake3.
//!
//! A tree is built once over an ordered sequence of 32-byte leaf hashes and
//! is immutable thereafter. Hashing is domain-separated:
//!
//! - Leaf hashes:     `blake3(0x00 || data)`
//! - Internal nodes:  `blake3(0x01 || left_hash || right_hash)`
//!
//! The 0x00/0x01 tags prevent second-preimage attacks where an internal
//! node's children could be reinterpreted as a leaf payload.
//!
//! # Core types
//!
//! - [`MerkleTree`] — the committed tree (build, root hash, leaf access).
//! - [`InclusionProof`] — authentication path proving a leaf at an index.
//! - [`ExclusionProof`] — two bracketing inclusion proofs proving a value
//!   is absent from a *sorted* leaf set.
//!
//! Verifiers need only a trusted 32-byte root hash and a proof object; the
//! tree itself never crosses the trust boundary.
//!
//! # Sorted-leaves precondition
//!
//! Exclusion proofs are only meaningful when the leaf hashes were sorted
//! ascending by byte value before the tree was built (leaf indices are
//! build order, not hash order). [`MerkleTree::build_sorted_from_values`]
//! is the construction path that establishes this; passing an unsorted
//! tree to [`ExclusionProof::generate`] yields non-failing but meaningless
//! results.

#![warn(missing_docs)]

mod error;
mod exclusion;
pub(crate) mod hash;
mod proof;
mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::MerkleTreeError;
pub use exclusion::ExclusionProof;
pub use hash::leaf_hash;
pub use proof::{InclusionProof, PathStep};
pub use tree::{DEFAULT_MAX_LEAVES, MerkleTree};
