//! Shared test utilities for the request mechanism end-to-end tests.
//!
//! Provides a simulated chain that owns both mechanisms and:
//! - Deploys them inhibited and activates them on the first block
//! - Charges the attached value of every admission to the caller's balance
//! - Runs both block boundaries per block and collects their output

use {
    ethnum::U256,
    num_bigint::BigUint,
    std::collections::HashMap,
    sysreq_fee_market::exponential::to_biguint,
    sysreq_request_queue::{
        consolidation, withdrawal, Address, BlsPublicKey, ConsolidationRequest,
        ConsolidationRequests, MemoryStorage, RequestError, RequestMechanism, RequestRecord,
        WithdrawalRequest, WithdrawalRequests,
    },
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Excess left behind by a single block that admits 3000 withdrawals
/// against a target of 2.
pub const ATTACK_EXCESS: u64 = 2_998;

pub fn eth(amount: u128) -> U256 {
    U256::from(amount * WEI_PER_ETH)
}

pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

// ─────────────────────────────────────────────────────────────────────────────
// Request builders
// ─────────────────────────────────────────────────────────────────────────────

/// Deterministic address for account `n`.
pub fn account(n: u32) -> Address {
    let mut bytes = [0u8; 20];
    bytes[..4].copy_from_slice(&n.to_be_bytes());
    bytes[19] = 0xaa;
    Address(bytes)
}

/// Deterministic validator key for validator `n`.
pub fn validator_key(n: u32) -> BlsPublicKey {
    let mut bytes = [0x80u8; 48];
    bytes[44..].copy_from_slice(&n.to_be_bytes());
    BlsPublicKey(bytes)
}

pub fn withdrawal_request(source: Address, validator: u32, amount: u64) -> WithdrawalRequest {
    WithdrawalRequest {
        source_address: source,
        validator_pubkey: validator_key(validator),
        amount,
    }
}

pub fn consolidation_request(source: Address, from: u32, to: u32) -> ConsolidationRequest {
    ConsolidationRequest {
        source_address: source,
        source_pubkey: validator_key(from),
        target_pubkey: validator_key(to),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Simulated chain
// ─────────────────────────────────────────────────────────────────────────────

/// Requests handed to the consensus layer by one block.
#[derive(Debug, Default)]
pub struct BlockOutput {
    pub height: u64,
    pub withdrawals: Vec<WithdrawalRequest>,
    pub consolidations: Vec<ConsolidationRequest>,
    /// Concatenated withdrawal records followed by consolidation records.
    pub encoded: Vec<u8>,
}

pub struct SimChain {
    pub height: u64,
    pub withdrawals: WithdrawalRequests<MemoryStorage>,
    pub consolidations: ConsolidationRequests<MemoryStorage>,
    pub balances: HashMap<Address, U256>,
    /// Value attached to admitted requests, summed over both mechanisms.
    pub fees_collected: U256,
}

impl SimChain {
    /// Both mechanisms freshly deployed and still inhibited.
    pub fn deploy() -> Self {
        Self {
            height: 0,
            withdrawals: withdrawal::deploy_in_memory().unwrap(),
            consolidations: consolidation::deploy_in_memory().unwrap(),
            balances: HashMap::new(),
            fees_collected: U256::ZERO,
        }
    }

    /// Deployed and activated by one empty block.
    pub fn activated() -> Self {
        let mut chain = Self::deploy();
        chain.produce_block();
        chain
    }

    pub fn fund(&mut self, address: Address, amount: U256) {
        let balance = self.balances.entry(address).or_insert(U256::ZERO);
        *balance = balance.saturating_add(amount);
    }

    pub fn balance(&self, address: &Address) -> U256 {
        self.balances.get(address).copied().unwrap_or(U256::ZERO)
    }

    /// Submit a withdrawal, attaching `value` from the caller's balance.
    /// Nothing is charged if the mechanism rejects it.
    pub fn submit_withdrawal(
        &mut self,
        request: &WithdrawalRequest,
        value: U256,
    ) -> Result<(), RequestError> {
        assert!(self.balance(&request.source_address) >= value, "caller cannot cover value");
        self.withdrawals
            .add_request(request.source_address, &request.to_input(), value)?;
        self.charge(request.source_address, value);
        Ok(())
    }

    pub fn submit_consolidation(
        &mut self,
        request: &ConsolidationRequest,
        value: U256,
    ) -> Result<(), RequestError> {
        assert!(self.balance(&request.source_address) >= value, "caller cannot cover value");
        self.consolidations
            .add_request(request.source_address, &request.to_input(), value)?;
        self.charge(request.source_address, value);
        Ok(())
    }

    /// Admit `count` withdrawals from `source` in the current block, each
    /// paying exactly the quoted fee.
    pub fn flood_withdrawals(&mut self, source: Address, count: u32) {
        for i in 0..count {
            let fee = self.withdrawals.fee().unwrap();
            self.fund(source, fee);
            self.submit_withdrawal(&withdrawal_request(source, i, 1), fee)
                .unwrap();
        }
    }

    /// Admit `count` consolidations from `source` in the current block.
    pub fn flood_consolidations(&mut self, source: Address, count: u32) {
        for i in 0..count {
            let fee = self.consolidations.fee().unwrap();
            self.fund(source, fee);
            self.submit_consolidation(&consolidation_request(source, i, i + 1), fee)
                .unwrap();
        }
    }

    /// Close the current block: run both block boundaries.
    pub fn produce_block(&mut self) -> BlockOutput {
        let withdrawals = self.withdrawals.process_block();
        let consolidations = self.consolidations.process_block();
        self.height += 1;

        let mut encoded = withdrawals.encode();
        encoded.extend(consolidations.encode());

        if !withdrawals.is_empty() || !consolidations.is_empty() {
            println!(
                "  [BLOCK {}] {} withdrawal(s), {} consolidation(s), excess {}/{}",
                self.height,
                withdrawals.len(),
                consolidations.len(),
                withdrawals.excess,
                consolidations.excess,
            );
        }

        BlockOutput {
            height: self.height,
            withdrawals: withdrawals.requests,
            consolidations: consolidations.requests,
            encoded,
        }
    }

    pub fn produce_empty_blocks(&mut self, n: u64) {
        for _ in 0..n {
            self.produce_block();
        }
    }

    fn charge(&mut self, address: Address, value: U256) {
        let balance = self.balances.entry(address).or_insert(U256::ZERO);
        *balance = balance.saturating_sub(value);
        self.fees_collected = self.fees_collected.saturating_add(value);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Attack recovery
// ─────────────────────────────────────────────────────────────────────────────

/// Which fee evaluation a recovery measurement reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeVariant {
    /// 256-bit wrapping evaluation, as charged on chain.
    FixedWidth,
    /// Arbitrary-precision evaluation.
    Exact,
}

pub fn quoted_fee<R: RequestRecord>(
    mechanism: &RequestMechanism<R, MemoryStorage>,
    variant: FeeVariant,
) -> BigUint {
    match variant {
        FeeVariant::FixedWidth => to_biguint(mechanism.fee().unwrap()),
        FeeVariant::Exact => mechanism.fee_exact().unwrap(),
    }
}

/// Produce idle blocks until the quoted fee is at most `threshold`.
/// Returns the number of blocks that took.
pub fn blocks_until_fee_at_most<R: RequestRecord>(
    mechanism: &mut RequestMechanism<R, MemoryStorage>,
    threshold: &BigUint,
    variant: FeeVariant,
) -> u64 {
    let mut blocks = 0u64;
    loop {
        mechanism.process_block();
        blocks += 1;
        if quoted_fee(mechanism, variant) <= *threshold {
            return blocks;
        }
    }
}

/// Reopen a copy of `mechanism`'s state, so a measurement can run on it
/// without disturbing the original.
pub fn fork<R: RequestRecord>(
    mechanism: &RequestMechanism<R, MemoryStorage>,
) -> RequestMechanism<R, MemoryStorage> {
    RequestMechanism::new(mechanism.config().clone(), mechanism.storage().clone()).unwrap()
}
