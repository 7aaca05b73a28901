//! Excess tracking: the decaying backlog signal that drives the fee.

use {ethnum::U256, log::*};

/// Excess value written at deployment. While it is present the mechanism is
/// inactive: fees cannot be quoted and requests are rejected.
pub const EXCESS_INHIBITOR: U256 = U256::MAX;

/// Largest value an update can produce. One below the inhibitor so that a
/// de-inhibited mechanism can never re-enter the inhibited state.
pub const MAX_EXCESS: U256 = U256::from_words(u128::MAX, u128::MAX - 1);

/// Returns `true` if `excess` holds the inhibitor value.
#[inline]
pub fn is_inhibited(excess: U256) -> bool {
    excess == EXCESS_INHIBITOR
}

/// Derive the excess for the next block.
///
/// ```text
/// previous = 0 if previous == EXCESS_INHIBITOR
/// new      = max(0, previous + admitted - target)
/// ```
///
/// Demand above `target` accumulates; every block at or below target bleeds
/// excess down by the unused part of the target, never below zero.
pub fn update_excess(previous_excess: U256, admitted_count: U256, target: U256) -> U256 {
    let previous = if is_inhibited(previous_excess) {
        info!("excess inhibitor cleared, mechanism is now active");
        U256::ZERO
    } else {
        previous_excess
    };

    previous
        .saturating_add(admitted_count)
        .saturating_sub(target)
        .min(MAX_EXCESS)
}
