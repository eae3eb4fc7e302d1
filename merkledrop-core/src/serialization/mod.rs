//! Deterministic binary serialization.
//!
//! Wraps bincode with a fixed configuration so identical values encode to
//! identical bytes on every platform. Used for the treegen proof bundle
//! format and anywhere a canonical encoding is needed.

mod bincode_config;

pub use bincode_config::{deserialize, serialize, serialized_size};
