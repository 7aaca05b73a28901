//! Validator withdrawal requests.

use {
    crate::{
        config::MechanismConfig,
        constants::{
            ADDRESS_LENGTH, AMOUNT_LENGTH, BLS_PUBLIC_KEY_LENGTH, WITHDRAWAL_REQUEST_INPUT_SIZE,
            WITHDRAWAL_REQUEST_RECORD_SIZE, WITHDRAWAL_REQUEST_STORAGE_WORDS,
        },
        error::RequestError,
        mechanism::RequestMechanism,
        request::{check_input_size, check_record_size, take, Address, BlsPublicKey, RequestRecord},
        storage::MemoryStorage,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Request to withdraw `amount` gwei from a validator, signed off by the
/// validator's withdrawal address.
///
/// Record layout (76 bytes):
///
/// ```text
/// source_address   (20)
/// validator_pubkey (48)
/// amount           (8, little-endian)
/// ```
///
/// The input payload carries `amount` big-endian; it is byte-swapped when
/// the record is built.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct WithdrawalRequest {
    pub source_address: Address,
    pub validator_pubkey: BlsPublicKey,
    pub amount: u64,
}

impl RequestRecord for WithdrawalRequest {
    const INPUT_SIZE: usize = WITHDRAWAL_REQUEST_INPUT_SIZE;
    const RECORD_SIZE: usize = WITHDRAWAL_REQUEST_RECORD_SIZE;

    fn from_input(source_address: Address, input: &[u8]) -> Result<Self, RequestError> {
        check_input_size(input, Self::INPUT_SIZE)?;
        let (validator_pubkey, rest) = take::<BLS_PUBLIC_KEY_LENGTH>(input)?;
        let (amount, _) = take::<AMOUNT_LENGTH>(rest)?;
        Ok(Self {
            source_address,
            validator_pubkey: BlsPublicKey(validator_pubkey),
            amount: u64::from_be_bytes(amount),
        })
    }

    fn to_record(&self) -> Vec<u8> {
        let mut record = Vec::with_capacity(Self::RECORD_SIZE);
        record.extend_from_slice(&self.source_address.0);
        record.extend_from_slice(&self.validator_pubkey.0);
        record.extend_from_slice(&self.amount.to_le_bytes());
        record
    }

    fn from_record(record: &[u8]) -> Result<Self, RequestError> {
        check_record_size(record, Self::RECORD_SIZE)?;
        let (source_address, rest) = take::<ADDRESS_LENGTH>(record)?;
        let (validator_pubkey, rest) = take::<BLS_PUBLIC_KEY_LENGTH>(rest)?;
        let (amount, _) = take::<AMOUNT_LENGTH>(rest)?;
        Ok(Self {
            source_address: Address(source_address),
            validator_pubkey: BlsPublicKey(validator_pubkey),
            amount: u64::from_le_bytes(amount),
        })
    }
}

impl WithdrawalRequest {
    /// Input payload a caller submits for this request.
    pub fn to_input(&self) -> Vec<u8> {
        let mut input = Vec::with_capacity(Self::INPUT_SIZE);
        input.extend_from_slice(&self.validator_pubkey.0);
        input.extend_from_slice(&self.amount.to_be_bytes());
        input
    }
}

/// Withdrawal request mechanism over storage `S`.
pub type WithdrawalRequests<S> = RequestMechanism<WithdrawalRequest, S>;

/// Freshly deployed, still inhibited withdrawal mechanism backed by memory.
pub fn deploy_in_memory() -> Result<WithdrawalRequests<MemoryStorage>, RequestError> {
    RequestMechanism::deploy(
        MechanismConfig::withdrawals(),
        MemoryStorage::new(WITHDRAWAL_REQUEST_STORAGE_WORDS),
    )
}
