//! # Merkledrop State
//!
//! The distribution state machine: a one-shot, Merkle-committed token
//! distribution with an at-most-once claim per recipient and a linear
//! third-party caller incentive.
//!
//! The state lives in an explicit owned [`Distribution`] store passed by
//! reference into each operation; the calling identity and the current block
//! height are injected as parameters, never read ambiently. The fungible
//! token ledger is an external collaborator behind the [`TokenLedger`]
//! trait.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod curve;
pub mod distribution;
pub mod error;
pub mod events;
pub mod execute;
pub mod ledger;

// Re-export commonly used types at crate root
pub use config::DistributionConfig;
pub use context::ExecutionContext;
pub use curve::caller_amount;
pub use distribution::Distribution;
pub use error::{ConfigError, DistributionError, DistributionResult, LedgerError};
pub use events::ClaimEvent;
pub use execute::{execute_activate, execute_claim};
pub use ledger::{InMemoryLedger, TokenLedger};
