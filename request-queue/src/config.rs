use {
    crate::{
        constants::{MAX_CONSOLIDATION_REQUESTS_PER_BLOCK, MAX_WITHDRAWAL_REQUESTS_PER_BLOCK},
        error::RequestError,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    sysreq_fee_market::{calculator::validate_config as validate_fee_market, FeeMarketConfig},
};

/// Deploy-time parameters of one request mechanism.
///
/// These are constants of a deployment, not runtime knobs: changing them on
/// a mechanism with persisted state changes the meaning of that state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct MechanismConfig {
    /// Fee curve and per-block target.
    pub fee_market: FeeMarketConfig,

    /// Requests handed to the consensus layer per block boundary.
    pub max_dequeue_per_block: u64,
}

impl MechanismConfig {
    pub const fn withdrawals() -> Self {
        Self {
            fee_market: FeeMarketConfig::withdrawals(),
            max_dequeue_per_block: MAX_WITHDRAWAL_REQUESTS_PER_BLOCK,
        }
    }

    pub const fn consolidations() -> Self {
        Self {
            fee_market: FeeMarketConfig::consolidations(),
            max_dequeue_per_block: MAX_CONSOLIDATION_REQUESTS_PER_BLOCK,
        }
    }
}

/// Validate that a `MechanismConfig` is internally consistent.
pub fn validate_config(config: &MechanismConfig) -> Result<(), RequestError> {
    validate_fee_market(&config.fee_market)?;
    if config.max_dequeue_per_block == 0 {
        return Err(RequestError::InvalidConfig {
            reason: "max_dequeue_per_block must be > 0, the queue would never drain".to_string(),
        });
    }
    Ok(())
}
