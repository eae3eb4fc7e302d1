//! Cryptographic primitives.
//!
//! SHA-256 hashing and the sorted-pair combine rule the genesis tree is
//! built with.

mod hashing;

pub use hashing::{combine_sorted, leaf_hash, sha256, sha256_concat};
