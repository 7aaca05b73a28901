//! Validator consolidation requests.

use {
    crate::{
        config::MechanismConfig,
        constants::{
            ADDRESS_LENGTH, BLS_PUBLIC_KEY_LENGTH, CONSOLIDATION_REQUEST_INPUT_SIZE,
            CONSOLIDATION_REQUEST_RECORD_SIZE, CONSOLIDATION_REQUEST_STORAGE_WORDS,
        },
        error::RequestError,
        mechanism::RequestMechanism,
        request::{check_input_size, check_record_size, take, Address, BlsPublicKey, RequestRecord},
        storage::MemoryStorage,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Request to merge the validator `source_pubkey` into `target_pubkey`.
///
/// Record layout (116 bytes):
///
/// ```text
/// source_address (20)
/// source_pubkey  (48)
/// target_pubkey  (48)
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct ConsolidationRequest {
    pub source_address: Address,
    pub source_pubkey: BlsPublicKey,
    pub target_pubkey: BlsPublicKey,
}

impl RequestRecord for ConsolidationRequest {
    const INPUT_SIZE: usize = CONSOLIDATION_REQUEST_INPUT_SIZE;
    const RECORD_SIZE: usize = CONSOLIDATION_REQUEST_RECORD_SIZE;

    fn from_input(source_address: Address, input: &[u8]) -> Result<Self, RequestError> {
        check_input_size(input, Self::INPUT_SIZE)?;
        let (source_pubkey, rest) = take::<BLS_PUBLIC_KEY_LENGTH>(input)?;
        let (target_pubkey, _) = take::<BLS_PUBLIC_KEY_LENGTH>(rest)?;
        Ok(Self {
            source_address,
            source_pubkey: BlsPublicKey(source_pubkey),
            target_pubkey: BlsPublicKey(target_pubkey),
        })
    }

    fn to_record(&self) -> Vec<u8> {
        let mut record = Vec::with_capacity(Self::RECORD_SIZE);
        record.extend_from_slice(&self.source_address.0);
        record.extend_from_slice(&self.source_pubkey.0);
        record.extend_from_slice(&self.target_pubkey.0);
        record
    }

    fn from_record(record: &[u8]) -> Result<Self, RequestError> {
        check_record_size(record, Self::RECORD_SIZE)?;
        let (source_address, rest) = take::<ADDRESS_LENGTH>(record)?;
        let (source_pubkey, rest) = take::<BLS_PUBLIC_KEY_LENGTH>(rest)?;
        let (target_pubkey, _) = take::<BLS_PUBLIC_KEY_LENGTH>(rest)?;
        Ok(Self {
            source_address: Address(source_address),
            source_pubkey: BlsPublicKey(source_pubkey),
            target_pubkey: BlsPublicKey(target_pubkey),
        })
    }
}

impl ConsolidationRequest {
    /// Input payload a caller submits for this request.
    pub fn to_input(&self) -> Vec<u8> {
        let mut input = Vec::with_capacity(Self::INPUT_SIZE);
        input.extend_from_slice(&self.source_pubkey.0);
        input.extend_from_slice(&self.target_pubkey.0);
        input
    }
}

/// Consolidation request mechanism over storage `S`.
pub type ConsolidationRequests<S> = RequestMechanism<ConsolidationRequest, S>;

/// Freshly deployed, still inhibited consolidation mechanism backed by memory.
pub fn deploy_in_memory() -> Result<ConsolidationRequests<MemoryStorage>, RequestError> {
    RequestMechanism::deploy(
        MechanismConfig::consolidations(),
        MemoryStorage::new(CONSOLIDATION_REQUEST_STORAGE_WORDS),
    )
}
