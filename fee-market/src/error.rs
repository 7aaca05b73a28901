use {ethnum::U256, thiserror::Error};

/// Errors produced by the fee-market subsystem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    /// Excess still holds the inhibitor value: the mechanism has not been
    /// through its first block boundary since deployment.
    #[error("Mechanism inhibited: excess has not been initialised by a block boundary yet")]
    MechanismInhibited,

    /// The value attached to a request is below the current fee.
    #[error("Insufficient fee: request offers {offered} but requires at least {required}")]
    InsufficientFee { offered: U256, required: U256 },

    /// Excess is past the largest value a fee is quoted for.
    #[error("Excess {excess} is out of range: fees are quoted up to an excess of {max}")]
    ExcessOutOfRange { excess: U256, max: U256 },

    /// `fake_exponential` was asked to divide by zero.
    #[error("Fake exponential denominator must be non-zero")]
    ZeroDenominator,

    /// The configuration is invalid (e.g. fee update fraction = 0).
    #[error("Invalid fee market configuration: {reason}")]
    InvalidConfig { reason: String },
}
