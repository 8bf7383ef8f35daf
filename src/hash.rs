//! Domain-separated Blake3 hashing for leaves and internal nodes.
//!
//! - Leaf hashes:     `blake3(0x00 || data)`
//! - Internal nodes:  `blake3(0x01 || left_hash || right_hash)`
//!
//! The 0x00/0x01 domain tags prevent second-preimage attacks where a
//! crafted 64-byte leaf payload could collide with an internal merge.

/// Domain tag prepended to leaf hash inputs: `blake3(LEAF_TAG || data)`.
pub(crate) const LEAF_DOMAIN_TAG: u8 = 0x00;
/// Domain tag prepended to internal merge inputs: `blake3(INTERNAL_TAG ||
/// left || right)`.
pub(crate) const INTERNAL_DOMAIN_TAG: u8 = 0x01;

/// Compute the domain-separated leaf hash: `blake3(0x00 || data)`.
pub fn leaf_hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&[LEAF_DOMAIN_TAG]);
    hasher.update(data);
    *hasher.finalize().as_bytes()
}

/// Merge two child hashes into a parent: `blake3(0x01 || left || right)`.
///
/// A missing right child duplicates the left hash into the right slot.
/// The balanced split in [`MerkleTree::build`](crate::MerkleTree::build)
/// always produces both children for multi-leaf ranges, so the `None` arm
/// exists only for parity with the degenerate single-child interior state.
pub(crate) fn internal_hash(left: &[u8; 32], right: Option<&[u8; 32]>) -> [u8; 32] {
    let mut input = [0u8; 65];
    input[0] = INTERNAL_DOMAIN_TAG;
    input[1..33].copy_from_slice(left);
    input[33..65].copy_from_slice(right.unwrap_or(left));
    *blake3::hash(&input).as_bytes()
}
