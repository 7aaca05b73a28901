//! One request mechanism instance: fee market, queue and block boundary
//! over a single storage backend.

use {
    crate::{
        config::{validate_config, MechanismConfig},
        error::RequestError,
        processor::{self, ProcessedRequests},
        queue::RequestQueue,
        request::{Address, RequestRecord},
        storage::{RequestStorage, StateSlot},
    },
    ethnum::U256,
    log::*,
    num_bigint::BigUint,
    std::marker::PhantomData,
    sysreq_fee_market::{
        calculator::{get_fee, get_fee_exact, validate_fee},
        excess::{is_inhibited, EXCESS_INHIBITOR},
    },
};

/// Request mechanism for request type `R` over storage `S`.
///
/// All mutation goes through `&mut self`, so admissions and block
/// boundaries are serialised by construction: a block boundary can never
/// interleave with an admission.
#[derive(Debug)]
pub struct RequestMechanism<R, S> {
    config: MechanismConfig,
    storage: S,
    _request: PhantomData<fn() -> R>,
}

impl<R: RequestRecord, S: RequestStorage> RequestMechanism<R, S> {
    /// Wrap existing state without touching it.
    pub fn new(config: MechanismConfig, storage: S) -> Result<Self, RequestError> {
        validate_config(&config)?;
        Ok(Self {
            config,
            storage,
            _request: PhantomData,
        })
    }

    /// Initialise state for a new deployment: the mechanism starts inhibited
    /// and is activated by its first block boundary.
    pub fn deploy(config: MechanismConfig, mut storage: S) -> Result<Self, RequestError> {
        validate_config(&config)?;
        storage.set(StateSlot::Excess, EXCESS_INHIBITOR);
        storage.set(StateSlot::Count, U256::ZERO);
        storage.set(StateSlot::QueueHead, U256::ZERO);
        storage.set(StateSlot::QueueTail, U256::ZERO);
        Self::new(config, storage)
    }

    pub fn config(&self) -> &MechanismConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn excess(&self) -> U256 {
        self.storage.get(StateSlot::Excess)
    }

    pub fn is_inhibited(&self) -> bool {
        is_inhibited(self.excess())
    }

    /// Requests admitted since the last block boundary.
    pub fn admitted_count(&self) -> U256 {
        self.storage.get(StateSlot::Count)
    }

    pub fn queue_head(&self) -> U256 {
        self.storage.get(StateSlot::QueueHead)
    }

    pub fn queue_tail(&self) -> U256 {
        self.storage.get(StateSlot::QueueTail)
    }

    /// Requests admitted but not yet handed to the consensus layer.
    pub fn pending(&self) -> U256 {
        self.queue_tail().saturating_sub(self.queue_head())
    }

    /// Fee a request must attach right now.
    pub fn fee(&self) -> Result<U256, RequestError> {
        Ok(get_fee(&self.config.fee_market, self.excess())?)
    }

    /// Arbitrary-precision fee at the current excess, for analysis.
    pub fn fee_exact(&self) -> Result<BigUint, RequestError> {
        Ok(get_fee_exact(&self.config.fee_market, self.excess())?)
    }

    /// Admission entry point.
    ///
    /// `input` is the caller's payload (see [`RequestRecord::INPUT_SIZE`]),
    /// `value` the amount attached to the call. Rejections leave storage
    /// unchanged.
    pub fn add_request(
        &mut self,
        source_address: Address,
        input: &[u8],
        value: U256,
    ) -> Result<(), RequestError> {
        let request = R::from_input(source_address, input)?;
        self.submit(request, value)
    }

    /// Admit an already decoded request.
    pub fn submit(&mut self, request: R, value: U256) -> Result<(), RequestError> {
        let fee = validate_fee(&self.config.fee_market, self.excess(), value)?;
        trace!("admitting request {request:?} (fee {fee}, value {value})");
        RequestQueue::new(&mut self.storage).enqueue(&request);
        Ok(())
    }

    /// Block-boundary entry point. Call exactly once per block.
    pub fn process_block(&mut self) -> ProcessedRequests<R> {
        processor::process_block(&self.config, &mut self.storage)
    }
}
