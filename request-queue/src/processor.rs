//! Block-boundary processing.
//!
//! Runs once per block, after every admission of that block and before any
//! admission of the next one:
//!
//! 1. dequeue up to `max_dequeue_per_block` requests, oldest first;
//! 2. fold the block's admitted count into excess;
//! 3. reset the admitted count.
//!
//! Each step reads state left by the previous one. None of them can fail:
//! an empty queue dequeues nothing and an idle block only decays excess.

use {
    crate::{
        config::MechanismConfig,
        queue::RequestQueue,
        request::RequestRecord,
        storage::{RequestStorage, StateSlot},
    },
    ethnum::U256,
    log::*,
    sysreq_fee_market::excess,
};

/// Everything a block boundary hands to the consensus layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedRequests<R> {
    /// Dequeued requests in admission order.
    pub requests: Vec<R>,
    /// Requests admitted during the block that just ended.
    pub admitted: U256,
    /// Excess in effect for the next block.
    pub excess: U256,
}

impl<R: RequestRecord> ProcessedRequests<R> {
    /// Concatenated fixed-width records, in FIFO order.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.requests.len().saturating_mul(R::RECORD_SIZE));
        for request in &self.requests {
            out.extend_from_slice(&request.to_record());
        }
        out
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// Run one block boundary against `storage`.
pub fn process_block<R, S>(config: &MechanismConfig, storage: &mut S) -> ProcessedRequests<R>
where
    R: RequestRecord,
    S: RequestStorage + ?Sized,
{
    let requests = dequeue_requests(config, storage);
    let (admitted, excess) = update_excess(config, storage);
    reset_request_count(storage);

    debug!(
        "block boundary: dequeued {} request(s), admitted {admitted}, excess now {excess}",
        requests.len()
    );

    ProcessedRequests {
        requests,
        admitted,
        excess,
    }
}

fn dequeue_requests<R, S>(config: &MechanismConfig, storage: &mut S) -> Vec<R>
where
    R: RequestRecord,
    S: RequestStorage + ?Sized,
{
    RequestQueue::new(storage).dequeue_batch(config.max_dequeue_per_block)
}

/// Returns the admitted count that was consumed and the new excess.
fn update_excess<S>(config: &MechanismConfig, storage: &mut S) -> (U256, U256)
where
    S: RequestStorage + ?Sized,
{
    let previous_excess = storage.get(StateSlot::Excess);
    let admitted = storage.get(StateSlot::Count);
    let new_excess = excess::update_excess(
        previous_excess,
        admitted,
        U256::from(config.fee_market.target_per_block),
    );
    storage.set(StateSlot::Excess, new_excess);
    (admitted, new_excess)
}

fn reset_request_count<S>(storage: &mut S)
where
    S: RequestStorage + ?Sized,
{
    storage.set(StateSlot::Count, U256::ZERO);
}
