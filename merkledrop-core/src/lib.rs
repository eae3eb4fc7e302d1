//! # Merkledrop Core
//!
//! Core types, cryptography, and serialization for the Merkledrop
//! distribution engine.
//!
//! This crate provides the foundation for the other Merkledrop crates:
//! - SHA-256 hashing primitives and the sorted-pair combine rule
//! - Merkle tree construction, proof extraction, and proof verification
//! - 256-bit unsigned arithmetic for token amounts
//! - Address and digest types with hex codecs
//! - Deterministic binary serialization

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod crypto;
pub mod error;
pub mod merkle;
pub mod serialization;
pub mod types;
pub mod u256;

// Re-export commonly used items at crate root
pub use crypto::{combine_sorted, leaf_hash, sha256, sha256_concat};
pub use error::{AddressParseError, CoreError, MerkleError, SerializationError};
pub use merkle::{verify_proof, MerkleTree, Proof};
pub use types::{address_from_hex, address_to_hex, digest_from_hex, digest_to_hex, Address, Digest};
pub use u256::U256;
