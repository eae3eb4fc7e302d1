//! Distribution activation.

use merkledrop_core::U256;

use crate::context::ExecutionContext;
use crate::distribution::Distribution;
use crate::error::{DistributionError, DistributionResult};
use crate::ledger::TokenLedger;

/// Activate a funded distribution.
///
/// Reads the custody balance from the token ledger and fixes it as the
/// distribution's `total_genesis_tokens`. Irreversible: no operation
/// restores the not-started state, and every later allocation computation
/// reads this one observed total.
///
/// # Validation
/// - Distribution must not already be started
/// - Custody must hold a positive balance
///
/// Returns the observed funded total.
pub fn execute_activate<L: TokenLedger>(
    dist: &mut Distribution,
    ledger: &L,
    _ctx: &ExecutionContext,
) -> DistributionResult<U256> {
    if dist.is_started() {
        return Err(DistributionError::AlreadyStarted);
    }

    let funded = ledger.custody_balance();
    if funded.is_zero() {
        return Err(DistributionError::ZeroFunding);
    }

    dist.set_total_genesis_tokens(funded);

    Ok(funded)
}
