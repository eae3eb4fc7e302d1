//! Error types for the Merkledrop core crate.

use std::fmt;

/// Top-level error type for merkledrop-core operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Merkle tree construction or proof extraction failed.
    Merkle(MerkleError),
    /// Serialization or deserialization failed.
    Serialization(SerializationError),
    /// Invalid address string.
    AddressParse(AddressParseError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Merkle(e) => write!(f, "merkle error: {}", e),
            CoreError::Serialization(e) => write!(f, "serialization error: {}", e),
            CoreError::AddressParse(e) => write!(f, "address parse error: {}", e),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<MerkleError> for CoreError {
    fn from(e: MerkleError) -> Self {
        CoreError::Merkle(e)
    }
}

impl From<SerializationError> for CoreError {
    fn from(e: SerializationError) -> Self {
        CoreError::Serialization(e)
    }
}

impl From<AddressParseError> for CoreError {
    fn from(e: AddressParseError) -> Self {
        CoreError::AddressParse(e)
    }
}

/// Errors related to Merkle tree construction and proof extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MerkleError {
    /// Attempted to build a tree over an empty leaf set.
    EmptyTree,
    /// Two leaves in the input set are identical.
    DuplicateLeaf {
        /// Position of the second occurrence in the input.
        index: usize,
    },
    /// Requested a proof for a leaf index outside the tree.
    LeafIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::EmptyTree => write!(f, "cannot build a merkle tree with no leaves"),
            MerkleError::DuplicateLeaf { index } => {
                write!(f, "duplicate leaf at input position {}", index)
            }
            MerkleError::LeafIndexOutOfBounds { index, leaf_count } => {
                write!(f, "leaf index {} out of bounds ({} leaves)", index, leaf_count)
            }
        }
    }
}

impl std::error::Error for MerkleError {}

/// Errors related to serialization and deserialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to encode data to bytes.
    EncodeFailed(String),
    /// Failed to decode data from bytes.
    DecodeFailed(String),
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::EncodeFailed(msg) => write!(f, "encode failed: {}", msg),
            SerializationError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

impl std::error::Error for SerializationError {}

/// Errors related to parsing hex-encoded addresses and digests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressParseError {
    /// The decoded value has the wrong byte length.
    BadLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes decoded.
        actual: usize,
    },
    /// The string is not valid hex.
    BadHex,
}

impl fmt::Display for AddressParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressParseError::BadLength { expected, actual } => {
                write!(f, "expected {} bytes, got {}", expected, actual)
            }
            AddressParseError::BadHex => write!(f, "invalid hex string"),
        }
    }
}

impl std::error::Error for AddressParseError {}
