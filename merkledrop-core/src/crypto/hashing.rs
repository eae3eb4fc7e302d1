//! SHA-256 hashing utilities.

use sha2::{Digest as _, Sha256};

use crate::types::{Address, Digest};

/// Compute SHA-256 hash of the input data.
#[inline]
pub fn sha256(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SHA-256 hash of concatenated data slices.
///
/// More efficient than allocating a buffer for concatenation.
pub fn sha256_concat(parts: &[&[u8]]) -> Digest {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Compute the genesis leaf for a recipient.
///
/// A leaf is the SHA-256 hash of the recipient's 20-byte address. This is
/// the unit committed to in the genesis tree and must match the offline
/// tree builder's leaf rule exactly.
#[inline]
pub fn leaf_hash(recipient: &Address) -> Digest {
    sha256(recipient)
}

/// Combine two Merkle nodes, ordering the pair before hashing.
///
/// The smaller digest (compared as a 256-bit big-endian unsigned integer,
/// which for 32-byte arrays is plain lexicographic byte order) is hashed
/// first. Sorting each pair means proofs carry no left/right metadata; the
/// verifier and the tree builder must both use this rule.
#[inline]
pub fn combine_sorted(a: &Digest, b: &Digest) -> Digest {
    if a <= b {
        sha256_concat(&[a, b])
    } else {
        sha256_concat(&[b, a])
    }
}
