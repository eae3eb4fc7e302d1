//! Owned distribution state store.

use std::collections::HashSet;

use merkledrop_core::{Address, Digest, U256};

use crate::config::DistributionConfig;
use crate::curve::caller_amount;
use crate::events::ClaimEvent;

/// The complete mutable state of one distribution.
///
/// Holds the immutable configuration, the one-shot funded total, the
/// insert-only set of claimed recipients, and the append-only claim journal.
/// All mutation goes through the operations in [`crate::execute`]; the
/// write-once and at-most-once guarantees are enforced by their
/// preconditions, not by the storage types.
#[derive(Clone, Debug)]
pub struct Distribution {
    config: DistributionConfig,
    /// Set exactly once at activation; zero means not started.
    total_genesis_tokens: U256,
    claimed: HashSet<Address>,
    journal: Vec<ClaimEvent>,
}

impl Distribution {
    /// Create a fresh, not-yet-started distribution.
    pub fn new(config: DistributionConfig) -> Self {
        Self {
            config,
            total_genesis_tokens: U256::zero(),
            claimed: HashSet::new(),
            journal: Vec::new(),
        }
    }

    /// The immutable configuration.
    pub fn config(&self) -> &DistributionConfig {
        &self.config
    }

    /// The committed genesis Merkle root.
    pub fn genesis_root(&self) -> &Digest {
        self.config.genesis_root()
    }

    /// Number of recipients committed to in the genesis tree.
    pub fn total_recipients(&self) -> u64 {
        self.config.total_recipients()
    }

    /// Height at which the third-party incentive window opens.
    pub fn window_start(&self) -> u64 {
        self.config.window_start()
    }

    /// Height at which the third-party share reaches the full allocation.
    pub fn window_end(&self) -> u64 {
        self.config.window_end()
    }

    /// The funded token total observed at activation; zero before.
    pub fn total_genesis_tokens(&self) -> U256 {
        self.total_genesis_tokens
    }

    /// Whether the distribution has been activated.
    pub fn is_started(&self) -> bool {
        !self.total_genesis_tokens.is_zero()
    }

    /// The fixed per-recipient allocation.
    ///
    /// Computed fresh from state on every call: floor of
    /// `total_genesis_tokens / total_recipients`. The division remainder
    /// stays in custody permanently. Zero before activation.
    pub fn tokens_per_allocation(&self) -> U256 {
        self.total_genesis_tokens / U256::from(self.config.total_recipients())
    }

    /// Whether `recipient`'s allocation has been claimed.
    pub fn is_claimed(&self, recipient: &Address) -> bool {
        self.claimed.contains(recipient)
    }

    /// Number of recipients claimed so far.
    pub fn claimed_count(&self) -> u64 {
        self.claimed.len() as u64
    }

    /// The append-only journal of successful claims, in execution order.
    pub fn claim_events(&self) -> &[ClaimEvent] {
        &self.journal
    }

    /// Preview the third-party reward for a submission at `height`.
    ///
    /// Read-only; returns zero before activation since the allocation is
    /// still zero.
    pub fn preview_caller_amount(&self, height: u64) -> U256 {
        caller_amount(
            height,
            self.config.window_start(),
            self.config.window_end(),
            self.tokens_per_allocation(),
        )
    }

    // === Mutators, reserved for the execute operations ===

    /// Record the funded total. Callers must have checked `!is_started()`.
    pub(crate) fn set_total_genesis_tokens(&mut self, total: U256) {
        self.total_genesis_tokens = total;
    }

    /// Set the claimed flag for `recipient`.
    pub(crate) fn mark_claimed(&mut self, recipient: Address) {
        self.claimed.insert(recipient);
    }

    /// Clear the claimed flag; only used to roll back a failed claim.
    pub(crate) fn unmark_claimed(&mut self, recipient: &Address) {
        self.claimed.remove(recipient);
    }

    /// Append a record to the claim journal.
    pub(crate) fn push_event(&mut self, event: ClaimEvent) {
        self.journal.push(event);
    }
}
