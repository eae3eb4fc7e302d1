//! Published claim records.

use serde::{Deserialize, Serialize};

use merkledrop_core::{Address, U256};

/// Record published for every successful claim.
///
/// The append-only journal of these records is the sole audit trail;
/// external indexers reconstruct the full distribution history by replaying
/// it. `recipient_amount + caller_amount` always equals the per-recipient
/// allocation at the time of the claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEvent {
    /// Recipient whose allocation was claimed.
    pub recipient: Address,
    /// Identity that submitted the claim (equals `recipient` on self-claim).
    pub submitter: Address,
    /// Tokens transferred to the recipient.
    pub recipient_amount: U256,
    /// Tokens transferred to the submitter as incentive.
    pub caller_amount: U256,
    /// Block height the claim executed at.
    pub block_height: u64,
}

impl ClaimEvent {
    /// Whether the claim was submitted by the recipient themself.
    pub fn is_self_claim(&self) -> bool {
        self.recipient == self.submitter
    }

    /// Total tokens paid out for this claim.
    pub fn total_paid(&self) -> U256 {
        self.recipient_amount + self.caller_amount
    }
}
