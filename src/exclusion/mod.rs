//! Exclusion (non-membership) proof generation and serialization.
//!
//! An [`ExclusionProof`] shows that a target value is absent from a
//! *sorted* leaf set by exhibiting inclusion proofs for the leaves that
//! bracket where the target would sit: either the two adjacent leaves it
//! falls between, or the single extreme leaf it falls outside of.
//!
//! Leaf sortedness is a precondition on the tree, not something this
//! module can check cheaply or enforce: indices are build order, and only
//! trees built from ascending leaf hashes (for example via
//! [`MerkleTree::build_sorted_from_values`]) yield meaningful exclusion
//! proofs. Over an unsorted tree, generation does not fail but the result
//! proves nothing.

use bincode::{Decode, Encode};

use crate::{InclusionProof, MerkleTree, MerkleTreeError, verify::MAX_PATH_LEN};

/// A witness that a target value is absent from a sorted leaf set.
///
/// Carries two bracketing [`InclusionProof`]s against the same root. Use
/// [`generate`](ExclusionProof::generate) to create proofs and
/// [`decode_from_slice`](ExclusionProof::decode_from_slice) to
/// deserialize them.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ExclusionProof {
    pub(crate) lower_bound: u64,
    pub(crate) upper_bound: u64,
    pub(crate) lower_proof: InclusionProof,
    pub(crate) upper_proof: InclusionProof,
}

impl ExclusionProof {
    /// Generate an exclusion proof for `target` over the tree's own leaf
    /// sequence.
    ///
    /// Returns [`MerkleTreeError::AlreadyPresent`] when the target is a
    /// committed leaf. Requires the tree's leaves to be sorted ascending
    /// by byte value (see the module docs).
    pub fn generate(tree: &MerkleTree, target: &[u8; 32]) -> Result<Self, MerkleTreeError> {
        let leaves = tree.leaf_hashes();
        let insert_at = match leaves.binary_search(target) {
            Ok(index) => return Err(MerkleTreeError::AlreadyPresent { index }),
            Err(insert_at) => insert_at,
        };

        let (lower_bound, upper_bound) = if insert_at == 0 {
            // Target precedes all leaves.
            (0, 0)
        } else if insert_at >= leaves.len() {
            // Target follows all leaves.
            (leaves.len() - 1, leaves.len() - 1)
        } else {
            // Target lies strictly between two adjacent leaves.
            (insert_at - 1, insert_at)
        };

        Ok(ExclusionProof {
            lower_bound: lower_bound as u64,
            upper_bound: upper_bound as u64,
            lower_proof: InclusionProof::generate(tree, lower_bound)?,
            upper_proof: InclusionProof::generate(tree, upper_bound)?,
        })
    }

    /// The bracketing leaf indices `(lower, upper)`.
    ///
    /// Equal indices mean the target falls outside the committed range.
    pub fn bounds(&self) -> (u64, u64) {
        (self.lower_bound, self.upper_bound)
    }

    /// The inclusion proof for the lower bracketing leaf.
    pub fn lower_proof(&self) -> &InclusionProof {
        &self.lower_proof
    }

    /// The inclusion proof for the upper bracketing leaf.
    pub fn upper_proof(&self) -> &InclusionProof {
        &self.upper_proof
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, MerkleTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects structurally invalid proofs: inverted bounds or oversized
    /// authentication paths.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, MerkleTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 16 * 1024 * 1024 }>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if proof.lower_bound > proof.upper_bound {
            return Err(MerkleTreeError::InvalidProof(format!(
                "lower bound {} exceeds upper bound {}",
                proof.lower_bound, proof.upper_bound
            )));
        }
        for inner in [&proof.lower_proof, &proof.upper_proof] {
            if inner.path.len() > MAX_PATH_LEN {
                return Err(MerkleTreeError::InvalidProof(format!(
                    "path length {} exceeds maximum depth {}",
                    inner.path.len(),
                    MAX_PATH_LEN
                )));
            }
        }
        Ok(proof)
    }
}
