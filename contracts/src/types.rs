//! Common types used across the ARTH protocol.

use odra::prelude::*;
use odra::casper_types::U256;

/// Fee configuration, each fee in parts-per-million (0..1_000_000)
#[odra::odra_type]
#[derive(Copy, Default)]
pub struct FeeConfig {
    /// Fee charged on every mint
    pub minting_fee: u64,
    /// Fee charged on every redeem
    pub redemption_fee: u64,
    /// Fee charged on ARTHX buybacks
    pub buyback_fee: u64,
    /// Fee charged on recollateralization rewards
    pub recollat_fee: u64,
}

/// Per-operation pause switches
#[odra::odra_type]
#[derive(Copy, Default)]
pub struct PauseFlags {
    pub mint_paused: bool,
    pub redeem_paused: bool,
    pub recollateralize_paused: bool,
    pub buyback_paused: bool,
    /// Freezes `refresh_collateral_ratio`
    pub collateral_ratio_paused: bool,
}

/// Pausable operations, used by the controller toggles and events
#[odra::odra_type]
#[derive(Copy)]
pub enum PausableOperation {
    Mint,
    Redeem,
    Recollateralize,
    Buyback,
    CollateralRatio,
}

/// Price sources the controller composes, used by `OracleUpdated`
#[odra::odra_type]
#[derive(Copy)]
pub enum PriceSource {
    ArthTwap,
    ArthxTwap,
    MahaTwap,
    GmuFeed,
}

impl PauseFlags {
    pub fn is_paused(&self, operation: PausableOperation) -> bool {
        match operation {
            PausableOperation::Mint => self.mint_paused,
            PausableOperation::Redeem => self.redeem_paused,
            PausableOperation::Recollateralize => self.recollateralize_paused,
            PausableOperation::Buyback => self.buyback_paused,
            PausableOperation::CollateralRatio => self.collateral_ratio_paused,
        }
    }

    pub fn set(&mut self, operation: PausableOperation, paused: bool) {
        match operation {
            PausableOperation::Mint => self.mint_paused = paused,
            PausableOperation::Redeem => self.redeem_paused = paused,
            PausableOperation::Recollateralize => self.recollateralize_paused = paused,
            PausableOperation::Buyback => self.buyback_paused = paused,
            PausableOperation::CollateralRatio => self.collateral_ratio_paused = paused,
        }
    }
}

/// Parameters steering `refresh_collateral_ratio`
#[odra::odra_type]
#[derive(Copy)]
pub struct RefreshConfig {
    /// Peg the ARTH price is steered toward (1e6 = 1 GMU)
    pub price_target: u64,
    /// Dead band around the target in which the ratio is left alone
    pub price_band: u64,
    /// Step applied to the ratio per refresh
    pub ratio_step: u64,
    /// Minimum block time between two refreshes, milliseconds
    pub refresh_cooldown: u64,
}

/// Stability fee schedule.
///
/// During the genesis window the rate decays linearly from `bootstrap_rate`
/// to `steady_rate`; afterwards it stays at `steady_rate`.
#[odra::odra_type]
#[derive(Copy, Default)]
pub struct StabilityFeeConfig {
    pub bootstrap_rate: u64,
    pub steady_rate: u64,
    pub genesis_start: u64,
    pub genesis_window: u64,
}

/// One hour of block time; Casper block time is in milliseconds
pub const HOUR: u64 = 60 * 60 * 1_000;

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            price_target: 1_000_000,
            price_band: 5_000,
            ratio_step: 2_500,
            refresh_cooldown: HOUR,
        }
    }
}

/// Snapshot of the controller state handed to every pool operation
#[odra::odra_type]
#[derive(Copy)]
pub struct GlobalState {
    /// Global collateral ratio in parts-per-million
    pub global_collateral_ratio: u64,
    pub fees: FeeConfig,
    /// Stability fee rate in effect at the current tick
    pub stability_fee: u64,
    pub pauses: PauseFlags,
}

/// Oracle prices relevant to a single pool operation, 1e6 precision
#[odra::odra_type]
#[derive(Copy)]
pub struct PriceSnapshot {
    pub collateral_price: U256,
    pub arthx_price: U256,
}

/// Pending two-phase redemption.
///
/// Pricing is fixed at request time; payout is released once
/// `redemption_delay` ticks have passed since `request_tick`.
#[odra::odra_type]
pub struct RedemptionRequest {
    pub requester: Address,
    /// Collateral owed, in collateral base units
    pub collateral_owed: U256,
    /// ARTHX owed, minted at collection
    pub arthx_owed: U256,
    pub request_tick: u64,
}

/// Outcome of the unified `mint`
#[odra::odra_type]
pub struct MintResult {
    pub arth_out: U256,
    pub arthx_used: U256,
}

/// Read-only aggregate returned by `get_arth_info`
#[odra::odra_type]
pub struct ArthInfo {
    pub arth_price: U256,
    pub arthx_price: U256,
    pub arth_total_supply: U256,
    pub global_collateral_ratio: u64,
    pub global_collateral_value: U256,
    pub minting_fee: u64,
    pub redemption_fee: u64,
    pub buyback_fee: u64,
    pub stability_fee: u64,
    pub gmu_price: U256,
}
