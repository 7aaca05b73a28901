//! Per-mechanism constants and the persisted-state layout.
//!
//! Both request mechanisms share one storage layout: four integer slots
//! followed by the queue records. The record width and the number of words a
//! record spans differ per mechanism.

// ---------------------------------------------------------------------------
// Storage slots
// ---------------------------------------------------------------------------

pub const EXCESS_REQUESTS_STORAGE_SLOT: u64 = 0;
pub const REQUEST_COUNT_STORAGE_SLOT: u64 = 1;
pub const REQUEST_QUEUE_HEAD_STORAGE_SLOT: u64 = 2;
pub const REQUEST_QUEUE_TAIL_STORAGE_SLOT: u64 = 3;
/// First word of the queue record array.
pub const REQUEST_QUEUE_STORAGE_OFFSET: u64 = 4;

// ---------------------------------------------------------------------------
// Field widths
// ---------------------------------------------------------------------------

pub const ADDRESS_LENGTH: usize = 20;
pub const BLS_PUBLIC_KEY_LENGTH: usize = 48;
pub const AMOUNT_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Withdrawals
// ---------------------------------------------------------------------------

/// Withdrawal requests handed to the consensus layer per block.
pub const MAX_WITHDRAWAL_REQUESTS_PER_BLOCK: u64 = 16;

/// `validator_pubkey ++ amount (big-endian)`
pub const WITHDRAWAL_REQUEST_INPUT_SIZE: usize = BLS_PUBLIC_KEY_LENGTH + AMOUNT_LENGTH;

/// `source_address ++ validator_pubkey ++ amount (little-endian)`
pub const WITHDRAWAL_REQUEST_RECORD_SIZE: usize =
    ADDRESS_LENGTH + BLS_PUBLIC_KEY_LENGTH + AMOUNT_LENGTH;

/// Storage words occupied by one queued withdrawal request.
pub const WITHDRAWAL_REQUEST_STORAGE_WORDS: u64 = 3;

// ---------------------------------------------------------------------------
// Consolidations
// ---------------------------------------------------------------------------

/// Consolidation requests handed to the consensus layer per block.
pub const MAX_CONSOLIDATION_REQUESTS_PER_BLOCK: u64 = 1;

/// `source_pubkey ++ target_pubkey`
pub const CONSOLIDATION_REQUEST_INPUT_SIZE: usize = 2 * BLS_PUBLIC_KEY_LENGTH;

/// `source_address ++ source_pubkey ++ target_pubkey`
pub const CONSOLIDATION_REQUEST_RECORD_SIZE: usize = ADDRESS_LENGTH + 2 * BLS_PUBLIC_KEY_LENGTH;

/// Storage words occupied by one queued consolidation request.
pub const CONSOLIDATION_REQUEST_STORAGE_WORDS: u64 = 4;
