//! # Request Queues
//!
//! Execution-layer request mechanisms for validator **withdrawals** and
//! **consolidations**.
//!
//! Users add requests during a block by attaching at least the current fee.
//! Admitted requests wait in a FIFO queue; at every block boundary a bounded
//! batch is handed to the consensus layer as fixed-width records and the
//! block's demand is folded into *excess*, which sets the next fee (see
//! `sysreq_fee_market`).
//!
//! Both mechanisms are one generic [`RequestMechanism`], parametrised by a
//! [`RequestRecord`] codec and a [`MechanismConfig`], over an injected
//! [`RequestStorage`].
//!
//! ## Lifecycle
//!
//! | Step           | Entry point                           | Effect                                   |
//! |----------------|---------------------------------------|------------------------------------------|
//! | Deploy         | [`RequestMechanism::deploy`]          | Excess set to the inhibitor              |
//! | Activate       | first [`RequestMechanism::process_block`] | Inhibitor cleared, excess = 0        |
//! | Quote          | [`RequestMechanism::fee`]             | Current fee                              |
//! | Admit          | [`RequestMechanism::add_request`]     | Count + 1, record appended at tail       |
//! | Block boundary | [`RequestMechanism::process_block`]   | Dequeue, update excess, reset count      |
//!
//! ```rust
//! use {
//!     ethnum::U256,
//!     sysreq_request_queue::{withdrawal, Address, BlsPublicKey, WithdrawalRequest},
//! };
//!
//! let mut withdrawals = withdrawal::deploy_in_memory().unwrap();
//! withdrawals.process_block(); // activation
//!
//! let request = WithdrawalRequest {
//!     source_address: Address([0x11; 20]),
//!     validator_pubkey: BlsPublicKey([0x22; 48]),
//!     amount: 1_000_000_000,
//! };
//! let fee = withdrawals.fee().unwrap();
//! withdrawals
//!     .add_request(request.source_address, &request.to_input(), fee)
//!     .unwrap();
//!
//! let out = withdrawals.process_block();
//! assert_eq!(out.requests, vec![request]);
//! assert_eq!(out.encode().len(), 76);
//! assert_eq!(out.excess, U256::ZERO);
//! ```

#![allow(clippy::arithmetic_side_effects)]

pub mod config;
pub mod consolidation;
pub mod constants;
pub mod error;
pub mod mechanism;
pub mod processor;
pub mod queue;
pub mod request;
pub mod storage;
pub mod withdrawal;


pub use {
    config::MechanismConfig,
    consolidation::{ConsolidationRequest, ConsolidationRequests},
    error::RequestError,
    mechanism::RequestMechanism,
    processor::ProcessedRequests,
    request::{Address, BlsPublicKey, RequestRecord},
    storage::{MemoryStorage, RequestStorage, StateSlot},
    withdrawal::{WithdrawalRequest, WithdrawalRequests},
};
