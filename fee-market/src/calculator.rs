use {
    crate::{
        config::FeeMarketConfig,
        error::FeeError,
        excess::is_inhibited,
        exponential::{fake_exponential, fake_exponential_exact, to_biguint},
    },
    ethnum::U256,
    num_bigint::BigUint,
};

/// Largest excess a fee is quoted for.
///
/// The series loop runs roughly `excess / fee_update_fraction` times, so
/// quoting an unbounded excess would not return. Excess this large already
/// prices a request far beyond any supply of ether.
pub const MAX_QUOTABLE_EXCESS: U256 = U256::from_words(0, 1_000_000);

fn check_excess(excess: U256) -> Result<(), FeeError> {
    if is_inhibited(excess) {
        return Err(FeeError::MechanismInhibited);
    }
    if excess > MAX_QUOTABLE_EXCESS {
        return Err(FeeError::ExcessOutOfRange {
            excess,
            max: MAX_QUOTABLE_EXCESS,
        });
    }
    Ok(())
}

/// Current admission fee for a given excess.
///
/// # Formula
///
/// ```text
/// fee = fake_exponential(min_fee, excess, fee_update_fraction)
/// ```
///
/// evaluated with 256-bit wrapping arithmetic, exactly as the chain does.
/// Past the overflow boundary the result is not monotonic in `excess`; it
/// is still deterministic and is returned as-is.
///
/// # Errors
///
/// - [`FeeError::MechanismInhibited`] while `excess` holds the inhibitor
///   value.
/// - [`FeeError::ExcessOutOfRange`] above [`MAX_QUOTABLE_EXCESS`]; the
///   series is never evaluated there.
pub fn get_fee(config: &FeeMarketConfig, excess: U256) -> Result<U256, FeeError> {
    check_excess(excess)?;
    fake_exponential(
        U256::from(config.min_fee),
        excess,
        U256::from(config.fee_update_fraction),
    )
}

/// Arbitrary-precision counterpart of [`get_fee`], for analysis only.
///
/// Agrees with [`get_fee`] until the fixed-width evaluation first overflows
/// and keeps growing afterwards.
pub fn get_fee_exact(config: &FeeMarketConfig, excess: U256) -> Result<BigUint, FeeError> {
    check_excess(excess)?;
    fake_exponential_exact(
        &BigUint::from(config.min_fee),
        &to_biguint(excess),
        &BigUint::from(config.fee_update_fraction),
    )
}

/// Check that `offered` covers the fee at `excess`.
///
/// Returns the required fee on success. Nothing is charged or refunded
/// here; overpayment is the caller's business.
pub fn validate_fee(
    config: &FeeMarketConfig,
    excess: U256,
    offered: U256,
) -> Result<U256, FeeError> {
    let required = get_fee(config, excess)?;
    if offered < required {
        return Err(FeeError::InsufficientFee { offered, required });
    }
    Ok(required)
}

/// Validate that a `FeeMarketConfig` is internally consistent.
pub fn validate_config(config: &FeeMarketConfig) -> Result<(), FeeError> {
    if config.fee_update_fraction == 0 {
        return Err(FeeError::InvalidConfig {
            reason: "fee_update_fraction must be > 0".to_string(),
        });
    }
    if config.min_fee == 0 {
        return Err(FeeError::InvalidConfig {
            reason: "min_fee must be > 0, a zero factor prices every request at zero".to_string(),
        });
    }
    Ok(())
}
