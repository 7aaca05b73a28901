use {
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Minimum fee for a withdrawal request, in wei.
pub const MIN_WITHDRAWAL_REQUEST_FEE: u64 = 1;
/// Denominator of the withdrawal fee exponent.
pub const WITHDRAWAL_REQUEST_FEE_UPDATE_FRACTION: u64 = 17;
/// Withdrawal requests the chain aims to admit per block.
pub const TARGET_WITHDRAWAL_REQUESTS_PER_BLOCK: u64 = 2;

/// Minimum fee for a consolidation request, in wei.
pub const MIN_CONSOLIDATION_REQUEST_FEE: u64 = 1;
/// Denominator of the consolidation fee exponent.
pub const CONSOLIDATION_REQUEST_FEE_UPDATE_FRACTION: u64 = 17;
/// Consolidation requests the chain aims to admit per block.
pub const TARGET_CONSOLIDATION_REQUESTS_PER_BLOCK: u64 = 1;

/// Deploy-time parameters of one fee market instance.
///
/// The fee charged for a request is
///
/// ```text
/// fee = fake_exponential(min_fee, excess, fee_update_fraction)
///     ≈ min_fee * e^(excess / fee_update_fraction)
/// ```
///
/// and `excess` grows by `admitted - target_per_block` every block in which
/// more than the target was admitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct FeeMarketConfig {
    /// Fee charged while excess is zero (the curve's `factor`).
    pub min_fee: u64,

    /// Denominator of the exponent. Larger values flatten the curve: the fee
    /// grows by a factor of `e` every `fee_update_fraction` units of excess.
    pub fee_update_fraction: u64,

    /// Admissions per block that leave excess unchanged.
    pub target_per_block: u64,
}

impl FeeMarketConfig {
    /// Parameters of the withdrawal request market.
    pub const fn withdrawals() -> Self {
        Self {
            min_fee: MIN_WITHDRAWAL_REQUEST_FEE,
            fee_update_fraction: WITHDRAWAL_REQUEST_FEE_UPDATE_FRACTION,
            target_per_block: TARGET_WITHDRAWAL_REQUESTS_PER_BLOCK,
        }
    }

    /// Parameters of the consolidation request market.
    pub const fn consolidations() -> Self {
        Self {
            min_fee: MIN_CONSOLIDATION_REQUEST_FEE,
            fee_update_fraction: CONSOLIDATION_REQUEST_FEE_UPDATE_FRACTION,
            target_per_block: TARGET_CONSOLIDATION_REQUESTS_PER_BLOCK,
        }
    }
}

impl Default for FeeMarketConfig {
    fn default() -> Self {
        Self::withdrawals()
    }
}
