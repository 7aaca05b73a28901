//! # Request Fee Market
//!
//! An **excess-driven exponential fee market** for execution-layer request
//! queues (validator withdrawals, validator consolidations).
//!
//! Instead of a fixed price, the fee for adding a request grows
//! exponentially with **excess**: the number of requests admitted above the
//! per-block target that have not yet been worked off. Every block that
//! admits fewer requests than the target lets excess bleed down again.
//!
//! ## Quick start
//!
//! ```rust
//! use {
//!     ethnum::U256,
//!     sysreq_fee_market::{calculator, excess, FeeMarketConfig},
//! };
//!
//! let config = FeeMarketConfig::withdrawals();
//!
//! // A block admitted 3000 requests against a target of 2.
//! let next = excess::update_excess(
//!     U256::ZERO,
//!     U256::from(3_000u64),
//!     U256::from(config.target_per_block),
//! );
//! assert_eq!(next, U256::from(2_998u64));
//!
//! // Price the next request.
//! let fee = calculator::get_fee(&config, U256::from(100u64)).unwrap();
//! assert_eq!(fee, U256::from(357u64));
//! ```
//!
//! See [`exponential`] for the fixed-width and arbitrary-precision fee
//! curves and [`config`] for the per-market constants.

pub mod calculator;
pub mod config;
pub mod error;
pub mod excess;
pub mod exponential;


// Re-exports for convenience.
pub use {
    config::FeeMarketConfig,
    error::FeeError,
    excess::{update_excess, EXCESS_INHIBITOR},
};
