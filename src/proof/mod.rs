//! Inclusion proof generation and serialization.
//!
//! An [`InclusionProof`] is the authentication path from one leaf to the
//! root: the leaf's hash plus, for every level, the sibling hash and which
//! side of the pair the sibling occupies. It is generated from a
//! [`MerkleTree`] but owns copies of everything it needs, so it stays
//! valid after the tree is dropped and can be shipped to a remote
//! verifier that only holds the root hash.

use bincode::{Decode, Encode};

use crate::{MerkleTree, MerkleTreeError, verify::MAX_PATH_LEN};

/// One level of an authentication path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct PathStep {
    /// Hash of the sibling subtree at this level.
    pub sibling: [u8; 32],
    /// `true` when the sibling is the right child of the pair (so the
    /// running hash is the left operand of the merge).
    pub is_right: bool,
}

/// A witness that a specific leaf hash is committed at a specific index
/// under a root.
///
/// Fields are `pub(crate)` so externally-constructed proofs cannot bypass
/// generation; use [`generate`](InclusionProof::generate) to create proofs
/// and [`decode_from_slice`](InclusionProof::decode_from_slice) to
/// deserialize them.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct InclusionProof {
    pub(crate) index: u64,
    pub(crate) leaf_hash: [u8; 32],
    /// Sibling steps ordered leaf → root. Empty for a single-leaf tree.
    pub(crate) path: Vec<PathStep>,
}

impl InclusionProof {
    /// Generate a proof for the leaf at `index`.
    ///
    /// Returns [`MerkleTreeError::IndexOutOfRange`] when `index` falls
    /// outside the tree's committed range.
    pub fn generate(tree: &MerkleTree, index: usize) -> Result<Self, MerkleTreeError> {
        let len = tree.leaf_count();
        if index >= len {
            return Err(MerkleTreeError::IndexOutOfRange { index, len });
        }

        // Descend toward the leaf, recording the sibling of each step.
        // Steps are collected root → leaf and reversed at the end.
        let mut path: Vec<PathStep> = Vec::new();
        let mut current = tree.root();
        while let Some(left) = current.left.as_deref() {
            if index <= left.end {
                let step = match current.right.as_deref() {
                    Some(right) => PathStep {
                        sibling: right.hash,
                        is_right: true,
                    },
                    // Absent right child: the left hash stands in for the
                    // sibling, on the left of the merge.
                    None => PathStep {
                        sibling: left.hash,
                        is_right: false,
                    },
                };
                path.push(step);
                current = left;
            } else {
                let Some(right) = current.right.as_deref() else {
                    break;
                };
                path.push(PathStep {
                    sibling: left.hash,
                    is_right: false,
                });
                current = right;
            }
        }
        path.reverse();

        Ok(InclusionProof {
            index: index as u64,
            leaf_hash: current.hash,
            path,
        })
    }

    /// The committed leaf index this proof speaks for.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// The leaf hash being proven.
    pub fn leaf_hash(&self) -> &[u8; 32] {
        &self.leaf_hash
    }

    /// The authentication path, ordered leaf → root.
    pub fn path(&self) -> &[PathStep] {
        &self.path
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
    /// Rejects proofs whose path exceeds the maximum supported depth.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, MerkleTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 16 * 1024 * 1024 }>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if proof.path.len() > MAX_PATH_LEN {
            return Err(MerkleTreeError::InvalidProof(format!(
                "path length {} exceeds maximum depth {}",
                proof.path.len(),
                MAX_PATH_LEN
            )));
        }
        Ok(proof)
    }
}
