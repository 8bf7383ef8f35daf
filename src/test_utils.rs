//! Shared helpers for the test suites.

use crate::{MerkleTree, hash::leaf_hash};

/// Leaf hashes for the payloads `0u32..n` (big-endian bytes), build order.
pub(crate) fn u32_leaves(n: usize) -> Vec<[u8; 32]> {
    (0..n as u32).map(|i| leaf_hash(&i.to_be_bytes())).collect()
}

/// Leaf hashes for the payloads `0u32..n`, sorted ascending by byte value.
pub(crate) fn sorted_u32_leaves(n: usize) -> Vec<[u8; 32]> {
    let mut leaves = u32_leaves(n);
    leaves.sort_unstable();
    leaves
}

/// A tree over `n` sorted leaf hashes, suitable for exclusion proofs.
pub(crate) fn sorted_tree(n: usize) -> MerkleTree {
    MerkleTree::build(sorted_u32_leaves(n)).expect("build over non-empty sorted leaves")
}

/// The 32-byte value one above `hash`, treating it as a big-endian integer.
///
/// Panics on all-0xFF input, which no test uses.
pub(crate) fn bump(hash: &[u8; 32]) -> [u8; 32] {
    let mut out = *hash;
    for byte in out.iter_mut().rev() {
        if *byte == 0xFF {
            *byte = 0;
        } else {
            *byte += 1;
            return out;
        }
    }
    panic!("bump overflow on all-0xFF input");
}
