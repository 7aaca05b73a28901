//! Persisted state of a request mechanism.
//!
//! The mechanism never talks to a concrete storage engine. It reads and
//! writes four named integer slots and an array of fixed-width records
//! through [`RequestStorage`]; [`MemoryStorage`] is the in-process
//! implementation used by tests and simulations.

use {
    crate::constants::{
        EXCESS_REQUESTS_STORAGE_SLOT, REQUEST_COUNT_STORAGE_SLOT, REQUEST_QUEUE_HEAD_STORAGE_SLOT,
        REQUEST_QUEUE_STORAGE_OFFSET, REQUEST_QUEUE_TAIL_STORAGE_SLOT,
    },
    ethnum::U256,
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Named integer slots of a request mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StateSlot {
    /// Backlog signal driving the fee (or the inhibitor before activation).
    Excess,
    /// Requests admitted since the last block boundary.
    Count,
    /// Index of the oldest pending record.
    QueueHead,
    /// Index one past the newest pending record.
    QueueTail,
}

impl StateSlot {
    pub const ALL: [StateSlot; 4] = [
        StateSlot::Excess,
        StateSlot::Count,
        StateSlot::QueueHead,
        StateSlot::QueueTail,
    ];

    /// Storage key of this slot.
    pub const fn key(self) -> u64 {
        match self {
            StateSlot::Excess => EXCESS_REQUESTS_STORAGE_SLOT,
            StateSlot::Count => REQUEST_COUNT_STORAGE_SLOT,
            StateSlot::QueueHead => REQUEST_QUEUE_HEAD_STORAGE_SLOT,
            StateSlot::QueueTail => REQUEST_QUEUE_TAIL_STORAGE_SLOT,
        }
    }
}

/// Storage capability required by a request mechanism.
///
/// Slots that were never written read as zero, matching a fresh ledger.
pub trait RequestStorage {
    fn get(&self, slot: StateSlot) -> U256;

    fn set(&mut self, slot: StateSlot, value: U256);

    /// Record stored at queue position `index`, if any.
    fn get_record(&self, index: U256) -> Option<Vec<u8>>;

    fn set_record(&mut self, index: U256, record: Vec<u8>);

    /// Release the record at `index` once it has been dequeued.
    ///
    /// Ledger-backed stores leave the words in place and overwrite them after
    /// the indices reset, so the default does nothing.
    fn clear_record(&mut self, _index: U256) {}
}

impl<S: RequestStorage + ?Sized> RequestStorage for &mut S {
    fn get(&self, slot: StateSlot) -> U256 {
        (**self).get(slot)
    }

    fn set(&mut self, slot: StateSlot, value: U256) {
        (**self).set(slot, value)
    }

    fn get_record(&self, index: U256) -> Option<Vec<u8>> {
        (**self).get_record(index)
    }

    fn set_record(&mut self, index: U256, record: Vec<u8>) {
        (**self).set_record(index, record)
    }

    fn clear_record(&mut self, index: U256) {
        (**self).clear_record(index)
    }
}

/// First storage word of the record at queue position `index`.
///
/// ```text
/// slot = REQUEST_QUEUE_STORAGE_OFFSET + index * words_per_record
/// ```
pub fn record_slot(index: U256, words_per_record: u64) -> U256 {
    U256::from(REQUEST_QUEUE_STORAGE_OFFSET)
        .wrapping_add(index.wrapping_mul(U256::from(words_per_record)))
}

/// In-memory [`RequestStorage`].
///
/// Records are keyed by their first storage word so that the address space
/// matches the persisted layout: slots `0..4` hold the integer state and the
/// record array starts at [`REQUEST_QUEUE_STORAGE_OFFSET`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    words_per_record: u64,
    slots: BTreeMap<u64, U256>,
    records: BTreeMap<U256, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new(words_per_record: u64) -> Self {
        Self {
            words_per_record,
            ..Self::default()
        }
    }

    /// Number of records currently held.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Storage word the record at `index` starts at.
    pub fn record_slot(&self, index: U256) -> U256 {
        record_slot(index, self.words_per_record)
    }
}

impl RequestStorage for MemoryStorage {
    fn get(&self, slot: StateSlot) -> U256 {
        self.slots.get(&slot.key()).copied().unwrap_or(U256::ZERO)
    }

    fn set(&mut self, slot: StateSlot, value: U256) {
        self.slots.insert(slot.key(), value);
    }

    fn get_record(&self, index: U256) -> Option<Vec<u8>> {
        self.records.get(&self.record_slot(index)).cloned()
    }

    fn set_record(&mut self, index: U256, record: Vec<u8>) {
        let slot = self.record_slot(index);
        self.records.insert(slot, record);
    }

    fn clear_record(&mut self, index: U256) {
        let slot = self.record_slot(index);
        self.records.remove(&slot);
    }
}
