//! Error types for distribution state machine operations.

use merkledrop_core::{Address, U256};

/// Configuration invariant violations, fatal at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The recipient count is zero.
    ZeroRecipients,
    /// The incentive window end is not strictly after its start.
    WindowInverted {
        /// Configured window start height.
        start: u64,
        /// Configured window end height.
        end: u64,
    },
    /// The incentive window start is not strictly in the future.
    WindowNotInFuture {
        /// Configured window start height.
        start: u64,
        /// Block height at configuration time.
        current: u64,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroRecipients => write!(f, "recipient count must be positive"),
            ConfigError::WindowInverted { start, end } => {
                write!(f, "window end {} must be greater than start {}", end, start)
            }
            ConfigError::WindowNotInFuture { start, current } => {
                write!(
                    f,
                    "window start {} must be greater than current height {}",
                    start, current
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failures reported by a token ledger implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// Custody does not hold enough tokens for the requested transfer.
    InsufficientFunds {
        /// Tokens currently in custody.
        available: U256,
        /// Tokens the transfer asked for.
        requested: U256,
    },
    /// The ledger rejected the transfer for a reason of its own.
    Rejected,
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::InsufficientFunds { available, requested } => {
                write!(
                    f,
                    "insufficient custody: available {}, requested {}",
                    available, requested
                )
            }
            LedgerError::Rejected => write!(f, "transfer rejected by ledger"),
        }
    }
}

impl std::error::Error for LedgerError {}

/// All validation and execution errors for distribution operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DistributionError {
    /// A construction-time invariant was violated.
    InvalidConfiguration(ConfigError),
    /// Activation attempted on an already started distribution.
    AlreadyStarted,
    /// Claim attempted before activation.
    NotStarted,
    /// Activation attempted with no tokens in custody.
    ZeroFunding,
    /// The recipient's allocation was already claimed.
    AlreadyClaimed {
        /// Recipient whose claim flag is already set.
        recipient: Address,
    },
    /// The supplied proof does not reconstruct the genesis root.
    InvalidProof {
        /// Recipient the proof was submitted for.
        recipient: Address,
    },
    /// A third party submitted before the incentive window opened.
    OutsideIncentiveWindow {
        /// Height the claim was submitted at.
        height: u64,
        /// Height the incentive window opens at.
        window_start: u64,
    },
    /// The token ledger rejected a transfer; the claim was rolled back.
    TransferFailed {
        /// Intended transfer destination.
        to: Address,
        /// Intended transfer amount.
        amount: U256,
        /// The ledger's failure reason.
        reason: LedgerError,
    },
}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionError::InvalidConfiguration(e) => {
                write!(f, "invalid configuration: {}", e)
            }
            DistributionError::AlreadyStarted => write!(f, "distribution already started"),
            DistributionError::NotStarted => write!(f, "distribution not started"),
            DistributionError::ZeroFunding => {
                write!(f, "cannot activate with zero tokens in custody")
            }
            DistributionError::AlreadyClaimed { recipient } => {
                write!(f, "already claimed: {:?}", &recipient[..4])
            }
            DistributionError::InvalidProof { recipient } => {
                write!(f, "invalid proof for recipient: {:?}", &recipient[..4])
            }
            DistributionError::OutsideIncentiveWindow { height, window_start } => {
                write!(
                    f,
                    "third-party claim at height {} before window opens at {}",
                    height, window_start
                )
            }
            DistributionError::TransferFailed { to, amount, reason } => {
                write!(
                    f,
                    "transfer of {} to {:?} failed: {}",
                    amount,
                    &to[..4],
                    reason
                )
            }
        }
    }
}

impl std::error::Error for DistributionError {}

impl From<ConfigError> for DistributionError {
    fn from(e: ConfigError) -> Self {
        DistributionError::InvalidConfiguration(e)
    }
}

/// Result type for distribution operations.
pub type DistributionResult<T> = Result<T, DistributionError>;
