//! Address and digest types.
//!
//! Recipients and callers are identified by 20-byte addresses; the genesis
//! commitment and all Merkle nodes are 32-byte SHA-256 digests. Both are
//! hex-encoded at tool and file boundaries.

use crate::error::AddressParseError;

/// 20-byte account address.
///
/// This is the identity committed to in the genesis tree and the identity
/// token transfers are addressed to.
pub type Address = [u8; 20];

/// 32-byte SHA-256 digest.
pub type Digest = [u8; 32];

/// Parse an address from a hex string.
///
/// Accepts an optional `0x` prefix. The decoded value must be exactly
/// 20 bytes.
pub fn address_from_hex(s: &str) -> Result<Address, AddressParseError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|_| AddressParseError::BadHex)?;
    if bytes.len() != 20 {
        return Err(AddressParseError::BadLength {
            expected: 20,
            actual: bytes.len(),
        });
    }
    let mut address = [0u8; 20];
    address.copy_from_slice(&bytes);
    Ok(address)
}

/// Encode an address as a lowercase hex string (no prefix).
pub fn address_to_hex(address: &Address) -> String {
    hex::encode(address)
}

/// Parse a 32-byte digest from a hex string.
///
/// Accepts an optional `0x` prefix.
pub fn digest_from_hex(s: &str) -> Result<Digest, AddressParseError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|_| AddressParseError::BadHex)?;
    if bytes.len() != 32 {
        return Err(AddressParseError::BadLength {
            expected: 32,
            actual: bytes.len(),
        });
    }
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&bytes);
    Ok(digest)
}

/// Encode a digest as a lowercase hex string (no prefix).
pub fn digest_to_hex(digest: &Digest) -> String {
    hex::encode(digest)
}
