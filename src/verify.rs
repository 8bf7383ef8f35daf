//! Proof verification against a trusted root hash.
//!
//! Pure functions — no tree access required. Verifiers take untrusted
//! proof input from a network peer, so they never panic and never return
//! errors: every digest mismatch, inconsistent bound ordering, or
//! structurally invalid proof resolves to a `false` verdict.

use crate::{
    ExclusionProof, InclusionProof,
    hash::internal_hash,
};

/// Maximum authentication path length a verifier will fold over.
///
/// A 64-level path already covers 2^64 leaves; anything longer is an
/// adversarial proof trying to buy CPU time.
pub(crate) const MAX_PATH_LEN: usize = 64;

impl InclusionProof {
    /// Verify this proof against an expected root hash.
    ///
    /// Folds the authentication path over the leaf hash and compares the
    /// result to `expected_root` byte-wise. For a single-leaf tree the
    /// path is empty and this degenerates to `leaf_hash == root`.
    pub fn verify(&self, expected_root: &[u8; 32]) -> bool {
        self.compute_root()
            .is_some_and(|root| &root == expected_root)
    }

    /// Fold the path leaf → root; `None` when the path is oversized.
    pub(crate) fn compute_root(&self) -> Option<[u8; 32]> {
        if self.path.len() > MAX_PATH_LEN {
            return None;
        }
        let mut current = self.leaf_hash;
        for step in &self.path {
            current = if step.is_right {
                internal_hash(&current, Some(&step.sibling))
            } else {
                internal_hash(&step.sibling, Some(&current))
            };
        }
        Some(current)
    }
}

impl ExclusionProof {
    /// Verify this proof against an expected root hash and the absent
    /// `target` value.
    ///
    /// All of the following must hold, otherwise the verdict is `false`:
    ///
    /// 1. Both bracketing inclusion proofs verify against `expected_root`.
    /// 2. The proofs' leaf indices match the stated bounds, and
    ///    `lower_bound <= upper_bound`.
    /// 3. Ordering: with distinct bounds the leaves must be adjacent
    ///    (`upper == lower + 1`) and bracket the target strictly; equal
    ///    bounds of 0 require the target to precede the first leaf; equal
    ///    non-zero bounds mark the last leaf and require the target to
    ///    follow it. A one-leaf tree (empty authentication path) accepts
    ///    the target on either side of its single leaf.
    pub fn verify(&self, expected_root: &[u8; 32], target: &[u8; 32]) -> bool {
        if !self.lower_proof.verify(expected_root) || !self.upper_proof.verify(expected_root) {
            return false;
        }
        if self.lower_proof.index != self.lower_bound || self.upper_proof.index != self.upper_bound
        {
            return false;
        }
        if self.lower_bound > self.upper_bound {
            return false;
        }

        let lower_leaf = &self.lower_proof.leaf_hash;
        if self.lower_bound == self.upper_bound {
            // A one-leaf tree has index 0 == len - 1, so the zero test
            // below cannot tell "precedes all" from "follows all". The
            // empty path identifies that tree (domain separation keeps an
            // internal root from doubling as a leaf hash), and there any
            // non-equal target is absent.
            if self.lower_bound == 0 && self.lower_proof.path.is_empty() {
                return target != lower_leaf;
            }
            if self.lower_bound == 0 {
                // Target precedes every committed leaf.
                return target < lower_leaf;
            }
            // Bounds mark the last leaf: target follows every leaf.
            target > lower_leaf
        } else {
            // Strictly between two committed leaves, which must be
            // neighbours or the claimed gap is not a gap.
            if self.upper_bound != self.lower_bound + 1 {
                return false;
            }
            lower_leaf < target && target < &self.upper_proof.leaf_hash
        }
    }
}
