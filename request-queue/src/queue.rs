//! FIFO queue of pending requests over a [`RequestStorage`].
//!
//! The queue is a log addressed by two monotonically increasing indices:
//! records `head..tail` are pending. Dequeuing advances `head`; when it
//! catches up with `tail` both are reset to zero so that indices stay small
//! across the lifetime of the mechanism.

use {
    crate::{
        request::RequestRecord,
        storage::{RequestStorage, StateSlot},
    },
    ethnum::U256,
    log::*,
};

/// Mutable view of the queue portion of a mechanism's storage.
pub struct RequestQueue<'a, S: ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: RequestStorage + ?Sized> RequestQueue<'a, S> {
    pub fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    pub fn head(&self) -> U256 {
        self.storage.get(StateSlot::QueueHead)
    }

    pub fn tail(&self) -> U256 {
        self.storage.get(StateSlot::QueueTail)
    }

    /// Number of pending requests.
    pub fn len(&self) -> U256 {
        self.tail().saturating_sub(self.head())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == U256::ZERO
    }

    /// Append `request` at the tail and count it as admitted in the current
    /// block.
    pub fn enqueue<R: RequestRecord>(&mut self, request: &R) {
        let count = self.storage.get(StateSlot::Count);
        self.storage
            .set(StateSlot::Count, count.saturating_add(U256::ONE));

        let tail = self.tail();
        self.storage.set_record(tail, request.to_record());
        self.storage
            .set(StateSlot::QueueTail, tail.saturating_add(U256::ONE));
    }

    /// Remove up to `max_count` requests, oldest first.
    ///
    /// An empty queue yields an empty batch. Dequeued records are released
    /// from storage. If the batch drains the queue, head and tail are both
    /// reset to zero.
    pub fn dequeue_batch<R: RequestRecord>(&mut self, max_count: u64) -> Vec<R> {
        let head = self.head();
        let tail = self.tail();
        let num_dequeued = self.len().min(U256::from(max_count));

        // `num_dequeued <= max_count`, so it fits in a u64.
        let requests = (0..num_dequeued.as_u64())
            .map(|offset| {
                let index = head.saturating_add(U256::from(offset));
                let request = self.read(index);
                self.storage.clear_record(index);
                request
            })
            .collect();

        let new_head = head.saturating_add(num_dequeued);
        if new_head == tail {
            self.storage.set(StateSlot::QueueHead, U256::ZERO);
            self.storage.set(StateSlot::QueueTail, U256::ZERO);
        } else {
            self.storage.set(StateSlot::QueueHead, new_head);
        }

        requests
    }

    /// Decode the record at `index`. Missing or malformed records read as an
    /// all-zero request, the same thing a fresh ledger slot would yield.
    fn read<R: RequestRecord>(&self, index: U256) -> R {
        match self.storage.get_record(index) {
            Some(record) => R::from_record(&record).unwrap_or_else(|err| {
                warn!("queue record {index} is corrupt ({err}), emitting a zero request");
                R::default()
            }),
            None => {
                warn!("queue record {index} is missing, emitting a zero request");
                R::default()
            }
        }
    }
}
