//! Linear caller-incentive curve.

use merkledrop_core::U256;

/// Third-party reward for submitting a claim at `height`.
///
/// - Below `window_start` the reward is zero.
/// - At or above `window_end` the full allocation goes to the caller.
/// - In between, the reward grows linearly with floor division:
///   `allocation * (height - window_start) / (window_end - window_start)`.
///
/// Monotonically non-decreasing in `height` and bounded by `allocation`.
/// The arithmetic runs in 256 bits, so the intermediate product cannot
/// overflow for any height window or allocation.
///
/// Exposed standalone so prospective submitters can preview their incentive
/// before sending a claim.
pub fn caller_amount(height: u64, window_start: u64, window_end: u64, allocation: U256) -> U256 {
    if height < window_start {
        return U256::zero();
    }
    if height >= window_end {
        return allocation;
    }

    let elapsed = U256::from(height - window_start);
    let span = U256::from(window_end - window_start);
    allocation * elapsed / span
}
