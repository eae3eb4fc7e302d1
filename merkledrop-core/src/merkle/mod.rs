//! Merkle commitments over the genesis recipient set.
//!
//! The genesis tree commits to the recipient set with sorted-pair hashing:
//! every internal node is `sha256(min(l, r) ++ max(l, r))`, so a membership
//! proof is just an ordered list of sibling digests with no left/right
//! metadata. [`verify_proof`] checks membership against a committed root;
//! [`MerkleTree`] is the builder side used by the offline tooling and tests,
//! and must agree with the verifier on the pairing convention or proofs
//! never verify.

mod tree;

pub use tree::MerkleTree;

use crate::crypto::combine_sorted;
use crate::types::Digest;

/// An ordered sequence of sibling digests, leaf level first.
pub type Proof = Vec<Digest>;

/// Verify that `leaf` is committed under `root` via `proof`.
///
/// Folds the leaf up the tree with the sorted-pair combine rule and compares
/// the result against the committed root. An empty proof is valid only when
/// the leaf itself is the root (a single-leaf tree).
///
/// Pure and deterministic; never touches any state.
pub fn verify_proof(proof: &[Digest], root: &Digest, leaf: &Digest) -> bool {
    let mut computed = *leaf;
    for sibling in proof {
        computed = combine_sorted(&computed, sibling);
    }
    computed == *root
}
