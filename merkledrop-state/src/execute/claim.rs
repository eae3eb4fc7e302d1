//! Claim execution.

use merkledrop_core::{leaf_hash, verify_proof, Address, Digest, U256};

use crate::context::ExecutionContext;
use crate::curve::caller_amount;
use crate::distribution::Distribution;
use crate::error::{DistributionError, DistributionResult, LedgerError};
use crate::events::ClaimEvent;
use crate::ledger::TokenLedger;

/// Claim a recipient's allocation.
///
/// Anyone may submit a claim: the recipient themself at any height after
/// activation, or a third party once the incentive window has opened. A
/// third-party submitter earns the incentive-curve share of the allocation
/// at the current height; the recipient receives the rest. The two shares
/// always sum exactly to the per-recipient allocation.
///
/// Order of operations, per the concurrency contract:
/// 1. All guards (lifecycle, claimed flag, proof, window, custody) run
///    before any mutation.
/// 2. The claimed flag is set strictly before any transfer is issued.
/// 3. A failed transfer rolls the flag back and surfaces `TransferFailed`;
///    the journal records only completed claims.
///
/// # Validation
/// - Distribution must be started
/// - Recipient must not already be claimed
/// - Proof must reconstruct the genesis root from `sha256(recipient)`
/// - Third-party submissions require `height >= window_start`
pub fn execute_claim<L: TokenLedger>(
    dist: &mut Distribution,
    ledger: &mut L,
    ctx: &ExecutionContext,
    caller: &Address,
    recipient: &Address,
    proof: &[Digest],
) -> DistributionResult<ClaimEvent> {
    if !dist.is_started() {
        return Err(DistributionError::NotStarted);
    }
    if dist.is_claimed(recipient) {
        return Err(DistributionError::AlreadyClaimed {
            recipient: *recipient,
        });
    }

    let leaf = leaf_hash(recipient);
    if !verify_proof(proof, dist.genesis_root(), &leaf) {
        return Err(DistributionError::InvalidProof {
            recipient: *recipient,
        });
    }

    let allocation = dist.tokens_per_allocation();

    let (recipient_amount, submitter_amount) = if caller == recipient {
        // Self-claim: the full allocation, at any height after activation
        (allocation, U256::zero())
    } else {
        // Before the window opens only the recipient may claim, valid
        // proof or not
        if ctx.block_height < dist.window_start() {
            return Err(DistributionError::OutsideIncentiveWindow {
                height: ctx.block_height,
                window_start: dist.window_start(),
            });
        }

        let share = caller_amount(
            ctx.block_height,
            dist.window_start(),
            dist.window_end(),
            allocation,
        );
        // The curve is bounded by the allocation, so this never underflows
        (allocation - share, share)
    };

    // A conforming ledger applies transfers wholesale, so checking custody
    // against the full payout up front makes the legs below all-or-nothing
    let available = ledger.custody_balance();
    if available < allocation {
        return Err(DistributionError::TransferFailed {
            to: *recipient,
            amount: allocation,
            reason: LedgerError::InsufficientFunds {
                available,
                requested: allocation,
            },
        });
    }

    // Flag before transfers: a nested claim for the same recipient issued
    // from inside a transfer must observe claimed == true
    dist.mark_claimed(*recipient);

    if !submitter_amount.is_zero() {
        if let Err(reason) = ledger.transfer(caller, submitter_amount) {
            dist.unmark_claimed(recipient);
            return Err(DistributionError::TransferFailed {
                to: *caller,
                amount: submitter_amount,
                reason,
            });
        }
    }

    if !recipient_amount.is_zero() {
        if let Err(reason) = ledger.transfer(recipient, recipient_amount) {
            dist.unmark_claimed(recipient);
            return Err(DistributionError::TransferFailed {
                to: *recipient,
                amount: recipient_amount,
                reason,
            });
        }
    }

    let event = ClaimEvent {
        recipient: *recipient,
        submitter: *caller,
        recipient_amount,
        caller_amount: submitter_amount,
        block_height: ctx.block_height,
    };
    dist.push_event(event.clone());

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DistributionConfig;
    use crate::execute::execute_activate;
    use crate::ledger::InMemoryLedger;
    use merkledrop_core::MerkleTree;

    const WINDOW_START: u64 = 100;
    const WINDOW_END: u64 = 200;

    fn recipients(n: u8) -> Vec<Address> {
        (0..n).map(|i| [i + 1; 20]).collect()
    }

    /// Build a started 1000-token, 10-recipient distribution with its tree.
    fn started_distribution() -> (Distribution, InMemoryLedger, MerkleTree, Vec<Address>) {
        let addrs = recipients(10);
        let tree = MerkleTree::from_recipients(&addrs).unwrap();

        let config = DistributionConfig::new(
            tree.root(),
            addrs.len() as u64,
            WINDOW_START,
            WINDOW_END,
            50,
        )
        .unwrap();
        let mut dist = Distribution::new(config);

        let mut ledger = InMemoryLedger::new();
        ledger.fund_custody(U256::from(1000u64));
        execute_activate(&mut dist, &ledger, &ExecutionContext::at_height(60)).unwrap();

        (dist, ledger, tree, addrs)
    }

    #[test]
    fn test_self_claim_full_allocation() {
        let (mut dist, mut ledger, tree, addrs) = started_distribution();
        let recipient = addrs[0];
        let proof = tree.proof(0).unwrap();

        let ctx = ExecutionContext::at_height(70);
        let event =
            execute_claim(&mut dist, &mut ledger, &ctx, &recipient, &recipient, &proof).unwrap();

        assert_eq!(event.recipient_amount, U256::from(100u64));
        assert!(event.caller_amount.is_zero());
        assert!(event.is_self_claim());
        assert_eq!(ledger.balance(&recipient), U256::from(100u64));
        assert!(dist.is_claimed(&recipient));
        assert_eq!(dist.claim_events().len(), 1);
    }

    #[test]
    fn test_self_claim_allowed_before_window() {
        let (mut dist, mut ledger, tree, addrs) = started_distribution();
        let recipient = addrs[1];
        let proof = tree.proof(1).unwrap();

        // Height 70 is below window_start; self-claims are not gated
        let ctx = ExecutionContext::at_height(70);
        assert!(ctx.block_height < WINDOW_START);

        let event =
            execute_claim(&mut dist, &mut ledger, &ctx, &recipient, &recipient, &proof).unwrap();
        assert_eq!(event.recipient_amount, U256::from(100u64));
    }

    #[test]
    fn test_third_party_claim_mid_window() {
        let (mut dist, mut ledger, tree, addrs) = started_distribution();
        let recipient = addrs[2];
        let submitter: Address = [0xCC; 20];
        let proof = tree.proof(2).unwrap();

        // Height 150: halfway through [100, 200) -> 50/50 split
        let ctx = ExecutionContext::at_height(150);
        let event =
            execute_claim(&mut dist, &mut ledger, &ctx, &submitter, &recipient, &proof).unwrap();

        assert_eq!(event.caller_amount, U256::from(50u64));
        assert_eq!(event.recipient_amount, U256::from(50u64));
        assert_eq!(event.total_paid(), U256::from(100u64));
        assert_eq!(ledger.balance(&submitter), U256::from(50u64));
        assert_eq!(ledger.balance(&recipient), U256::from(50u64));
    }

    #[test]
    fn test_third_party_claim_after_window_end() {
        let (mut dist, mut ledger, tree, addrs) = started_distribution();
        let recipient = addrs[3];
        let submitter: Address = [0xCC; 20];
        let proof = tree.proof(3).unwrap();

        let ctx = ExecutionContext::at_height(250);
        let event =
            execute_claim(&mut dist, &mut ledger, &ctx, &submitter, &recipient, &proof).unwrap();

        assert_eq!(event.caller_amount, U256::from(100u64));
        assert!(event.recipient_amount.is_zero());
        assert_eq!(ledger.balance(&submitter), U256::from(100u64));
        assert!(ledger.balance(&recipient).is_zero());
        // The recipient's slot is consumed all the same
        assert!(dist.is_claimed(&recipient));
    }

    #[test]
    fn test_third_party_claim_before_window_rejected() {
        let (mut dist, mut ledger, tree, addrs) = started_distribution();
        let recipient = addrs[4];
        let submitter: Address = [0xCC; 20];
        let proof = tree.proof(4).unwrap();

        let ctx = ExecutionContext::at_height(90);
        let result =
            execute_claim(&mut dist, &mut ledger, &ctx, &submitter, &recipient, &proof);

        assert!(matches!(
            result,
            Err(DistributionError::OutsideIncentiveWindow { height: 90, window_start: 100 })
        ));
        // Nothing changed
        assert!(!dist.is_claimed(&recipient));
        assert_eq!(ledger.custody_balance(), U256::from(1000u64));
    }

    #[test]
    fn test_claim_not_started() {
        let addrs = recipients(10);
        let tree = MerkleTree::from_recipients(&addrs).unwrap();
        let config =
            DistributionConfig::new(tree.root(), 10, WINDOW_START, WINDOW_END, 50).unwrap();
        let mut dist = Distribution::new(config);
        let mut ledger = InMemoryLedger::new();

        let proof = tree.proof(0).unwrap();
        let ctx = ExecutionContext::at_height(70);
        let result =
            execute_claim(&mut dist, &mut ledger, &ctx, &addrs[0], &addrs[0], &proof);

        assert!(matches!(result, Err(DistributionError::NotStarted)));
    }

    #[test]
    fn test_double_claim_rejected() {
        let (mut dist, mut ledger, tree, addrs) = started_distribution();
        let recipient = addrs[5];
        let proof = tree.proof(5).unwrap();
        let ctx = ExecutionContext::at_height(150);

        execute_claim(&mut dist, &mut ledger, &ctx, &recipient, &recipient, &proof).unwrap();

        // Second attempt fails regardless of submitter, with a valid proof
        let submitter: Address = [0xCC; 20];
        let result =
            execute_claim(&mut dist, &mut ledger, &ctx, &submitter, &recipient, &proof);
        assert!(matches!(
            result,
            Err(DistributionError::AlreadyClaimed { .. })
        ));

        // And by the recipient again
        let result =
            execute_claim(&mut dist, &mut ledger, &ctx, &recipient, &recipient, &proof);
        assert!(matches!(
            result,
            Err(DistributionError::AlreadyClaimed { .. })
        ));
    }

    #[test]
    fn test_invalid_proof_rejected() {
        let (mut dist, mut ledger, tree, addrs) = started_distribution();
        let recipient = addrs[6];

        // Proof for a different leaf
        let wrong_proof = tree.proof(0).unwrap();
        let ctx = ExecutionContext::at_height(70);
        let result =
            execute_claim(&mut dist, &mut ledger, &ctx, &recipient, &recipient, &wrong_proof);
        assert!(matches!(result, Err(DistributionError::InvalidProof { .. })));

        // Corrupted proof
        let mut corrupted = tree.proof(6).unwrap();
        corrupted[0][0] ^= 0x01;
        let result =
            execute_claim(&mut dist, &mut ledger, &ctx, &recipient, &recipient, &corrupted);
        assert!(matches!(result, Err(DistributionError::InvalidProof { .. })));

        // State untouched on verification failure
        assert!(!dist.is_claimed(&recipient));
        assert_eq!(ledger.custody_balance(), U256::from(1000u64));
    }

    #[test]
    fn test_outsider_cannot_claim() {
        let (mut dist, mut ledger, tree, _addrs) = started_distribution();
        let outsider: Address = [0xEE; 20];
        let proof = tree.proof(0).unwrap();

        let ctx = ExecutionContext::at_height(150);
        let result =
            execute_claim(&mut dist, &mut ledger, &ctx, &outsider, &outsider, &proof);
        assert!(matches!(result, Err(DistributionError::InvalidProof { .. })));
    }

    #[test]
    fn test_shares_sum_to_allocation_across_window() {
        let (dist, _, tree, addrs) = started_distribution();

        for height in [100, 101, 137, 150, 199, 200, 5000] {
            // Fresh copies so every height claims the same recipient
            let mut dist = dist.clone();
            let mut ledger = InMemoryLedger::new();
            ledger.fund_custody(U256::from(1000u64));

            let submitter: Address = [0xCC; 20];
            let proof = tree.proof(7).unwrap();
            let ctx = ExecutionContext::at_height(height);
            let event =
                execute_claim(&mut dist, &mut ledger, &ctx, &submitter, &addrs[7], &proof)
                    .unwrap();

            assert_eq!(
                event.total_paid(),
                U256::from(100u64),
                "split leaked at height {}",
                height
            );
        }
    }

    #[test]
    fn test_transfer_failure_rolls_back_flag() {
        /// Ledger that reports ample custody but rejects every transfer.
        struct RejectingLedger;

        impl TokenLedger for RejectingLedger {
            fn custody_balance(&self) -> U256 {
                U256::from(1000u64)
            }
            fn transfer(&mut self, _to: &Address, _amount: U256) -> Result<(), LedgerError> {
                Err(LedgerError::Rejected)
            }
        }

        let addrs = recipients(10);
        let tree = MerkleTree::from_recipients(&addrs).unwrap();
        let config =
            DistributionConfig::new(tree.root(), 10, WINDOW_START, WINDOW_END, 50).unwrap();
        let mut dist = Distribution::new(config);
        let mut ledger = RejectingLedger;
        execute_activate(&mut dist, &ledger, &ExecutionContext::at_height(60)).unwrap();

        let recipient = addrs[0];
        let proof = tree.proof(0).unwrap();
        let ctx = ExecutionContext::at_height(150);
        let result =
            execute_claim(&mut dist, &mut ledger, &ctx, &recipient, &recipient, &proof);

        assert!(matches!(
            result,
            Err(DistributionError::TransferFailed {
                reason: LedgerError::Rejected,
                ..
            })
        ));
        // The flag was rolled back and no record was journaled
        assert!(!dist.is_claimed(&recipient));
        assert!(dist.claim_events().is_empty());
    }

    #[test]
    fn test_failed_second_leg_rolls_back_flag() {
        /// Ledger that fails on the nth transfer call.
        struct FailAfter {
            inner: InMemoryLedger,
            calls_before_failure: u32,
        }

        impl TokenLedger for FailAfter {
            fn custody_balance(&self) -> U256 {
                self.inner.custody_balance()
            }
            fn transfer(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError> {
                if self.calls_before_failure == 0 {
                    return Err(LedgerError::Rejected);
                }
                self.calls_before_failure -= 1;
                self.inner.transfer(to, amount)
            }
        }

        let addrs = recipients(10);
        let tree = MerkleTree::from_recipients(&addrs).unwrap();
        let config =
            DistributionConfig::new(tree.root(), 10, WINDOW_START, WINDOW_END, 50).unwrap();
        let mut dist = Distribution::new(config);

        let mut inner = InMemoryLedger::new();
        inner.fund_custody(U256::from(1000u64));
        let mut ledger = FailAfter { inner, calls_before_failure: 1 };
        execute_activate(&mut dist, &ledger, &ExecutionContext::at_height(60)).unwrap();

        // Third-party claim mid-window needs two legs; the second fails
        let recipient = addrs[0];
        let submitter: Address = [0xCC; 20];
        let proof = tree.proof(0).unwrap();
        let ctx = ExecutionContext::at_height(150);
        let result =
            execute_claim(&mut dist, &mut ledger, &ctx, &submitter, &recipient, &proof);

        assert!(matches!(result, Err(DistributionError::TransferFailed { .. })));
        assert!(!dist.is_claimed(&recipient));
        assert!(dist.claim_events().is_empty());
    }

    #[test]
    fn test_insufficient_custody_fails_before_any_mutation() {
        let addrs = recipients(10);
        let tree = MerkleTree::from_recipients(&addrs).unwrap();
        let config =
            DistributionConfig::new(tree.root(), 10, WINDOW_START, WINDOW_END, 50).unwrap();
        let mut dist = Distribution::new(config);

        let mut ledger = InMemoryLedger::new();
        ledger.fund_custody(U256::from(1000u64));
        execute_activate(&mut dist, &ledger, &ExecutionContext::at_height(60)).unwrap();

        // Drain custody below one allocation behind the distribution's back
        ledger.transfer(&[0xDD; 20], U256::from(950u64)).unwrap();

        let recipient = addrs[0];
        let proof = tree.proof(0).unwrap();
        let ctx = ExecutionContext::at_height(150);
        let result =
            execute_claim(&mut dist, &mut ledger, &ctx, &recipient, &recipient, &proof);

        assert!(matches!(
            result,
            Err(DistributionError::TransferFailed {
                reason: LedgerError::InsufficientFunds { .. },
                ..
            })
        ));
        assert!(!dist.is_claimed(&recipient));
    }
}
