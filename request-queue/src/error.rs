//! Errors reported by the request mechanisms.

use {sysreq_fee_market::FeeError, thiserror::Error};

/// Every variant rejects a single call and leaves the mechanism's storage
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Fee quote or fee check failed: inhibited mechanism, excess out of
    /// quotable range, or insufficient attached value.
    #[error(transparent)]
    Fee(#[from] FeeError),

    #[error("Malformed request payload: expected {expected} bytes, got {actual}")]
    MalformedRequest { expected: usize, actual: usize },

    /// A stored queue record does not have the record width. Only reachable
    /// through a corrupted storage backend.
    #[error("Malformed request record: expected {expected} bytes, got {actual}")]
    MalformedRecord { expected: usize, actual: usize },

    #[error("Invalid request mechanism configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl RequestError {
    /// `true` for admission rejections raised by the fee market.
    pub fn is_fee_error(&self) -> bool {
        matches!(self, Self::Fee(_))
    }
}
