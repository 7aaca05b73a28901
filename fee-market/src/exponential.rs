//! Integer approximation of `factor * e^(numerator / denominator)`.
//!
//! Both variants evaluate the same truncated Taylor series
//!
//! ```text
//! accum_0     = factor * denominator
//! accum_{i}   = accum_{i-1} * numerator / (denominator * i)
//! result      = (accum_0 + accum_1 + ... ) / denominator
//! ```
//!
//! summing while the running term is non-zero.
//!
//! [`fake_exponential`] is the fixed-width evaluation the chain performs:
//! every word is 256 bits wide, `add` and `mul` wrap, and a zero divisor
//! yields zero. Once the running term no longer fits in a word (for
//! `factor = 1, denominator = 17` that first happens at `numerator = 2893`)
//! the result stops growing with `numerator` and starts to oscillate. That
//! behaviour is consensus-relevant and must not be corrected here.
//!
//! [`fake_exponential_exact`] is the arbitrary-precision reference used for
//! analysis. It is monotonically non-decreasing in `numerator` without bound.

use {
    crate::error::FeeError,
    ethnum::U256,
    num_bigint::BigUint,
    num_traits::{One, Zero},
};

/// Fixed-width (256-bit, wrapping) fake exponential.
///
/// Returns [`FeeError::ZeroDenominator`] when `denominator` is zero.
///
/// The loop runs until the wrapped term reaches zero. For numerators far
/// beyond any reachable excess this takes `O(numerator / denominator)`
/// iterations.
pub fn fake_exponential(factor: U256, numerator: U256, denominator: U256) -> Result<U256, FeeError> {
    if denominator == U256::ZERO {
        return Err(FeeError::ZeroDenominator);
    }

    let mut i = U256::ONE;
    let mut output = U256::ZERO;
    let mut numerator_accum = factor.wrapping_mul(denominator);
    while numerator_accum > U256::ZERO {
        output = output.wrapping_add(numerator_accum);
        numerator_accum = numerator_accum
            .wrapping_mul(numerator)
            .checked_div(denominator.wrapping_mul(i))
            .unwrap_or(U256::ZERO);
        i = i.wrapping_add(U256::ONE);
    }

    output.checked_div(denominator).ok_or(FeeError::ZeroDenominator)
}

/// Arbitrary-precision fake exponential.
///
/// Same series as [`fake_exponential`] without any truncation of
/// intermediate terms, so the two agree exactly until the fixed-width
/// variant first overflows.
pub fn fake_exponential_exact(
    factor: &BigUint,
    numerator: &BigUint,
    denominator: &BigUint,
) -> Result<BigUint, FeeError> {
    if denominator.is_zero() {
        return Err(FeeError::ZeroDenominator);
    }

    let mut i = BigUint::one();
    let mut output = BigUint::zero();
    let mut numerator_accum = factor * denominator;
    while !numerator_accum.is_zero() {
        output += &numerator_accum;
        numerator_accum = (numerator_accum * numerator) / (denominator * &i);
        i += 1u32;
    }

    Ok(output / denominator)
}

/// Widen a 256-bit word into an arbitrary-precision integer.
pub fn to_biguint(value: U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes())
}
