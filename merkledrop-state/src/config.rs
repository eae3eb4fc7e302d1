//! Immutable distribution configuration.

use serde::{Deserialize, Serialize};

use merkledrop_core::Digest;

use crate::error::ConfigError;

/// Construction-time parameters of a distribution.
///
/// Validated once by [`DistributionConfig::new`] and immutable afterwards.
/// The genesis root commits to the full recipient set; the window bounds
/// delimit the block-height range over which a third party's share of an
/// unclaimed allocation grows from 0% to 100%.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionConfig {
    genesis_root: Digest,
    total_recipients: u64,
    window_start: u64,
    window_end: u64,
}

impl DistributionConfig {
    /// Validate and build a configuration.
    ///
    /// Invariants, checked against `current_height`:
    /// - `total_recipients > 0`
    /// - `window_end > window_start`
    /// - `window_start > current_height`
    pub fn new(
        genesis_root: Digest,
        total_recipients: u64,
        window_start: u64,
        window_end: u64,
        current_height: u64,
    ) -> Result<Self, ConfigError> {
        if total_recipients == 0 {
            return Err(ConfigError::ZeroRecipients);
        }
        if window_end <= window_start {
            return Err(ConfigError::WindowInverted {
                start: window_start,
                end: window_end,
            });
        }
        if window_start <= current_height {
            return Err(ConfigError::WindowNotInFuture {
                start: window_start,
                current: current_height,
            });
        }

        Ok(Self {
            genesis_root,
            total_recipients,
            window_start,
            window_end,
        })
    }

    /// The committed genesis Merkle root.
    pub fn genesis_root(&self) -> &Digest {
        &self.genesis_root
    }

    /// Number of recipients committed to in the genesis tree.
    pub fn total_recipients(&self) -> u64 {
        self.total_recipients
    }

    /// Height at which the third-party incentive window opens.
    pub fn window_start(&self) -> u64 {
        self.window_start
    }

    /// Height at which the third-party share reaches the full allocation.
    pub fn window_end(&self) -> u64 {
        self.window_end
    }
}
