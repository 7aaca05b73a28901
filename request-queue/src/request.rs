//! Request payloads and their fixed-width record encoding.

use {
    crate::{
        constants::{ADDRESS_LENGTH, BLS_PUBLIC_KEY_LENGTH},
        error::RequestError,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    serde_big_array::BigArray,
    std::fmt,
};

/// 20-byte execution-layer account address.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

/// 48-byte BLS public key of a validator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct BlsPublicKey(#[serde(with = "BigArray")] pub [u8; BLS_PUBLIC_KEY_LENGTH]);

impl Default for BlsPublicKey {
    fn default() -> Self {
        Self([0; BLS_PUBLIC_KEY_LENGTH])
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<[u8; BLS_PUBLIC_KEY_LENGTH]> for BlsPublicKey {
    fn from(bytes: [u8; BLS_PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for BlsPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// A request type that can be admitted into a queue.
///
/// Requests enter as an *input payload* (the caller-supplied bytes, without
/// the caller's address) and are stored and emitted as a *record*: a
/// fixed-width concatenation of all fields with no delimiters or length
/// prefix.
pub trait RequestRecord: Sized + Clone + fmt::Debug + Default {
    /// Exact byte length of an input payload.
    const INPUT_SIZE: usize;

    /// Exact byte length of an encoded record.
    const RECORD_SIZE: usize;

    /// Build a request from the caller's address and input payload.
    fn from_input(source_address: Address, input: &[u8]) -> Result<Self, RequestError>;

    /// Fixed-width record encoding.
    fn to_record(&self) -> Vec<u8>;

    /// Inverse of [`RequestRecord::to_record`].
    fn from_record(record: &[u8]) -> Result<Self, RequestError>;
}

/// Reject `input` unless it is exactly `expected` bytes long.
pub(crate) fn check_input_size(input: &[u8], expected: usize) -> Result<(), RequestError> {
    if input.len() != expected {
        return Err(RequestError::MalformedRequest {
            expected,
            actual: input.len(),
        });
    }
    Ok(())
}

/// Reject `record` unless it is exactly `expected` bytes long.
pub(crate) fn check_record_size(record: &[u8], expected: usize) -> Result<(), RequestError> {
    if record.len() != expected {
        return Err(RequestError::MalformedRecord {
            expected,
            actual: record.len(),
        });
    }
    Ok(())
}

/// Split `N` bytes off the front of `bytes`.
///
/// Callers check the total length first, so a short slice is reported as a
/// malformed record of the requested width.
pub(crate) fn take<const N: usize>(bytes: &[u8]) -> Result<([u8; N], &[u8]), RequestError> {
    let (head, rest) = bytes
        .split_first_chunk::<N>()
        .ok_or(RequestError::MalformedRecord {
            expected: N,
            actual: bytes.len(),
        })?;
    Ok((*head, rest))
}
