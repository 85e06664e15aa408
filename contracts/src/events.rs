//! Events emitted by the protocol contracts.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::curve::CurveParams;
use crate::types::{PausableOperation, PriceSource, RefreshConfig, StabilityFeeConfig};

// ========== Pool ==========

#[odra::event]
pub struct Minted {
    pub minter: Address,
    /// Collateral base units taken
    pub collateral_in: U256,
    pub arthx_in: U256,
    pub arth_out: U256,
    pub fee: U256,
}

#[odra::event]
pub struct RedemptionRequested {
    pub redeemer: Address,
    pub arth_in: U256,
    /// Totals of the pending request after this redemption
    pub collateral_owed: U256,
    pub arthx_owed: U256,
    pub request_tick: u64,
}

#[odra::event]
pub struct RedemptionCollected {
    pub redeemer: Address,
    pub collateral_out: U256,
    pub arthx_out: U256,
}

#[odra::event]
pub struct Recollateralized {
    pub caller: Address,
    pub collateral_in: U256,
    pub arthx_out: U256,
    pub bonus: u64,
}

#[odra::event]
pub struct BoughtBack {
    pub caller: Address,
    pub arthx_in: U256,
    pub collateral_out: U256,
}

#[odra::event]
pub struct Borrow {
    pub caller: Address,
    pub amount: U256,
}

#[odra::event]
pub struct Repay {
    pub caller: Address,
    pub amount: U256,
}

#[odra::event]
pub struct StabilityFeeCharged {
    pub payer: Address,
    pub maha_amount: U256,
}

#[odra::event]
pub struct PoolParametersUpdated {
    pub ceiling: U256,
    pub redemption_delay: u64,
    pub bonus_rate_buffer: u64,
}

#[odra::event]
pub struct CurveUpdated {
    pub curve: CurveParams,
}

#[odra::event]
pub struct CollateralFeedUpdated {
    pub feed: Address,
}

// ========== Controller ==========

#[odra::event]
pub struct CollateralRatioUpdated {
    pub old_ratio: u64,
    pub new_ratio: u64,
}

#[odra::event]
pub struct FeesUpdated {
    pub minting_fee: u64,
    pub redemption_fee: u64,
    pub buyback_fee: u64,
    pub recollat_fee: u64,
}

#[odra::event]
pub struct PauseToggled {
    pub operation: PausableOperation,
    pub paused: bool,
    pub by: Address,
}

#[odra::event]
pub struct RefreshConfigUpdated {
    pub config: RefreshConfig,
}

/// The genesis window restarts at `config.genesis_start`
#[odra::event]
pub struct StabilityFeeScheduleUpdated {
    pub config: StabilityFeeConfig,
}

#[odra::event]
pub struct FeeCollectorUpdated {
    pub collector: Address,
}

#[odra::event]
pub struct OracleUpdated {
    pub source: PriceSource,
    pub oracle: Address,
}

#[odra::event]
pub struct PoolAdded {
    pub pool: Address,
}

#[odra::event]
pub struct PoolRemoved {
    pub pool: Address,
}

// ========== Roles ==========

#[odra::event]
pub struct RoleGranted {
    pub role_id: u8,
    pub account: Address,
    pub sender: Address,
}

#[odra::event]
pub struct RoleRevoked {
    pub role_id: u8,
    pub account: Address,
    pub sender: Address,
}

// ========== Ledger ==========

#[odra::event]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub amount: U256,
}

#[odra::event]
pub struct Mint {
    pub recipient: Address,
    pub amount: U256,
}

#[odra::event]
pub struct Burn {
    pub owner: Address,
    pub amount: U256,
}

#[odra::event]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub amount: U256,
}
