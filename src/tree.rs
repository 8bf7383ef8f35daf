use crate::{
    MerkleTreeError,
    hash::{internal_hash, leaf_hash},
};

/// Default cap on the number of leaves a tree will be built over.
///
/// Larger inputs are a capacity concern, not a correctness one; callers
/// with a known bigger bound can use [`MerkleTree::build_with_limit`].
pub const DEFAULT_MAX_LEAVES: usize = 1 << 24;

/// A subtree covering the inclusive leaf index range `[start, end]`.
///
/// Leaf nodes have `start == end` and no children. Internal nodes always
/// have a left child; `right` is read through an `Option` so the hash rule
/// can fall back to duplicating the left hash, even though the balanced
/// split produces both children for every multi-leaf range.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) hash: [u8; 32],
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recursively build the subtree over `leaves[start..=end]`.
    fn build(leaves: &[[u8; 32]], start: usize, end: usize) -> Node {
        if start == end {
            return Node {
                hash: leaves[start],
                start,
                end,
                left: None,
                right: None,
            };
        }

        let mid = start + (end - start) / 2;
        let left = Box::new(Node::build(leaves, start, mid));
        let right = Some(Box::new(Node::build(leaves, mid + 1, end)));
        let hash = internal_hash(&left.hash, right.as_ref().map(|node| &node.hash));

        Node {
            hash,
            start,
            end,
            left: Some(left),
            right,
        }
    }
}

/// An immutable binary Merkle tree over an ordered sequence of leaf hashes.
///
/// Built once, then read-only: proof generation takes `&self` and touches
/// no shared mutable state, so concurrent proving over one tree needs no
/// locking. The tree exclusively owns its nodes and its leaf-hash
/// sequence; proofs copy what they need and stay valid after the tree is
/// dropped.
#[derive(Debug)]
pub struct MerkleTree {
    root: Node,
    leaves: Vec<[u8; 32]>,
}

impl MerkleTree {
    /// Build a tree over the given leaf hashes, in the given order.
    ///
    /// Leaf indices are positions in this sequence. Returns
    /// [`MerkleTreeError::EmptyLeaves`] for an empty sequence and
    /// [`MerkleTreeError::TooManyLeaves`] above [`DEFAULT_MAX_LEAVES`].
    pub fn build(leaves: Vec<[u8; 32]>) -> Result<Self, MerkleTreeError> {
        Self::build_with_limit(leaves, DEFAULT_MAX_LEAVES)
    }

    /// Build a tree with an explicit maximum leaf count.
    pub fn build_with_limit(
        leaves: Vec<[u8; 32]>,
        max_leaves: usize,
    ) -> Result<Self, MerkleTreeError> {
        if leaves.is_empty() {
            return Err(MerkleTreeError::EmptyLeaves);
        }
        if leaves.len() > max_leaves {
            return Err(MerkleTreeError::TooManyLeaves {
                count: leaves.len(),
                max: max_leaves,
            });
        }
        let root = Node::build(&leaves, 0, leaves.len() - 1);
        Ok(MerkleTree { root, leaves })
    }

    /// Commit raw payloads: hash each value with
    /// [`leaf_hash`](crate::leaf_hash) and build over the results in the
    /// given order.
    pub fn build_from_values<V: AsRef<[u8]>>(values: &[V]) -> Result<Self, MerkleTreeError> {
        Self::build(values.iter().map(|v| leaf_hash(v.as_ref())).collect())
    }

    /// Commit raw payloads with the leaf hashes sorted ascending by byte
    /// value before building.
    ///
    /// This is the construction path that establishes the sorted-leaves
    /// precondition required by
    /// [`ExclusionProof::generate`](crate::ExclusionProof::generate).
    pub fn build_sorted_from_values<V: AsRef<[u8]>>(values: &[V]) -> Result<Self, MerkleTreeError> {
        let mut leaves: Vec<[u8; 32]> = values.iter().map(|v| leaf_hash(v.as_ref())).collect();
        leaves.sort_unstable();
        Self::build(leaves)
    }

    /// The 32-byte root commitment.
    pub fn root_hash(&self) -> [u8; 32] {
        self.root.hash
    }

    /// Number of committed leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// The committed leaf hashes, in build order.
    pub fn leaf_hashes(&self) -> &[[u8; 32]] {
        &self.leaves
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }
}
