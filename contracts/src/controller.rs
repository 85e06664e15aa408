//! ARTH Controller Contract
//!
//! Owns the global collateral ratio, fee schedule and pause flags, composes
//! ARTH/ARTHX/MAHA prices in GMU, and aggregates collateral value across all
//! registered pools.
//!
//! Price composition: each protocol token is quoted against a reference asset
//! by a TWAP oracle, and the reference asset is quoted in GMU by a spot feed.
//! `price(token) = consult(token, 1.0) × reference/GMU`, all in 1e6 precision.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::access_control::{
    ROLE_BUYBACK_PAUSER, ROLE_COLLATERAL_RATIO_PAUSER, ROLE_DEFAULT_ADMIN, ROLE_MINT_PAUSER,
    ROLE_RECOLLATERALIZE_PAUSER, ROLE_REDEEM_PAUSER, ROLE_TIMELOCK,
};
use crate::errors::ArthError;
use crate::events::{
    CollateralRatioUpdated, FeeCollectorUpdated, FeesUpdated, OracleUpdated, PauseToggled,
    PoolAdded, PoolRemoved, RefreshConfigUpdated, StabilityFeeScheduleUpdated,
};
use crate::interfaces::{
    CollateralPoolContractRef, Erc20LedgerContractRef, RoleRegistryContractRef,
    SpotPriceFeedContractRef, TwapOracleContractRef,
};
use crate::math::{normalize_price, precision, COLLATERAL_RATIO_MAX, PRICE_PRECISION};
use crate::pricing::next_collateral_ratio;
use crate::stability_fee::{self, DEFAULT_GENESIS_WINDOW};
use crate::types::{
    ArthInfo, FeeConfig, GlobalState, PausableOperation, PauseFlags, PriceSource,
    RefreshConfig, StabilityFeeConfig,
};

/// Default fee for every operation (0.3%)
pub const DEFAULT_FEE: u64 = 3_000;

/// ARTH Controller Contract
#[odra::module(events = [
    CollateralRatioUpdated,
    FeesUpdated,
    PauseToggled,
    PoolAdded,
    PoolRemoved,
    RefreshConfigUpdated,
    StabilityFeeScheduleUpdated,
    FeeCollectorUpdated,
    OracleUpdated
])]
pub struct ArthController {
    access_control: Var<Address>,

    // Tokens
    arth: Var<Address>,
    arthx: Var<Address>,
    maha: Var<Address>,

    // Price sources
    arth_oracle: Var<Address>,
    arthx_oracle: Var<Address>,
    maha_oracle: Var<Address>,
    gmu_feed: Var<Address>,

    // Global state
    global_collateral_ratio: Var<u64>,
    fees: Var<FeeConfig>,
    pauses: Var<PauseFlags>,
    refresh: Var<RefreshConfig>,
    last_refresh: Var<u64>,
    stability_fee: Var<StabilityFeeConfig>,
    fee_collector: Var<Address>,

    // Pool registry
    pools: Mapping<u32, Address>,
    pool_count: Var<u32>,
    /// pool -> position in `pools`
    pool_index: Mapping<Address, u32>,
    registered: Mapping<Address, bool>,
}

#[odra::module]
impl ArthController {
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        access_control: Address,
        arth: Address,
        arthx: Address,
        maha: Address,
        arth_oracle: Address,
        arthx_oracle: Address,
        maha_oracle: Address,
        gmu_feed: Address,
        fee_collector: Address,
    ) {
        self.access_control.set(access_control);
        self.arth.set(arth);
        self.arthx.set(arthx);
        self.maha.set(maha);
        self.arth_oracle.set(arth_oracle);
        self.arthx_oracle.set(arthx_oracle);
        self.maha_oracle.set(maha_oracle);
        self.gmu_feed.set(gmu_feed);
        self.fee_collector.set(fee_collector);

        self.global_collateral_ratio.set(COLLATERAL_RATIO_MAX);
        self.fees.set(FeeConfig {
            minting_fee: DEFAULT_FEE,
            redemption_fee: DEFAULT_FEE,
            buyback_fee: DEFAULT_FEE,
            recollat_fee: DEFAULT_FEE,
        });
        self.pauses.set(PauseFlags::default());
        self.refresh.set(RefreshConfig::default());
        self.stability_fee.set(StabilityFeeConfig {
            bootstrap_rate: 0,
            steady_rate: 0,
            genesis_start: self.env().get_block_time(),
            genesis_window: DEFAULT_GENESIS_WINDOW,
        });
        self.pool_count.set(0);
    }

    // ========== Prices ==========

    /// Reference asset price in GMU, 1e6 precision
    pub fn get_gmu_price(&self) -> U256 {
        let feed = SpotPriceFeedContractRef::new(self.env().clone(), self.address_of(&self.gmu_feed));
        normalize_price(feed.latest_price(), feed.decimals())
    }

    pub fn get_arth_price(&self) -> U256 {
        self.compose_price(&self.arth_oracle, &self.arth)
    }

    pub fn get_arthx_price(&self) -> U256 {
        self.compose_price(&self.arthx_oracle, &self.arthx)
    }

    pub fn get_maha_price(&self) -> U256 {
        self.compose_price(&self.maha_oracle, &self.maha)
    }

    // ========== Aggregates ==========

    /// Sum of every registered pool's collateral value in GMU
    pub fn get_global_collateral_value(&self) -> U256 {
        self.sum_pools(None)
    }

    /// Global collateral value leaving out `pool`, for pools adding their own balance
    pub fn get_global_collateral_value_excluding(&self, pool: Address) -> U256 {
        self.sum_pools(Some(pool))
    }

    pub fn get_global_state(&self) -> GlobalState {
        GlobalState {
            global_collateral_ratio: self.get_global_collateral_ratio(),
            fees: self.get_fees(),
            stability_fee: self.get_stability_fee(),
            pauses: self.get_pauses(),
        }
    }

    /// Stability fee rate in effect now
    pub fn get_stability_fee(&self) -> u64 {
        stability_fee::current_rate(&self.get_stability_fee_config(), self.env().get_block_time())
    }

    pub fn get_arth_info(&self) -> ArthInfo {
        let fees = self.get_fees();
        let arth = Erc20LedgerContractRef::new(self.env().clone(), self.address_of(&self.arth));
        ArthInfo {
            arth_price: self.get_arth_price(),
            arthx_price: self.get_arthx_price(),
            arth_total_supply: arth.total_supply(),
            global_collateral_ratio: self.get_global_collateral_ratio(),
            global_collateral_value: self.get_global_collateral_value(),
            minting_fee: fees.minting_fee,
            redemption_fee: fees.redemption_fee,
            buyback_fee: fees.buyback_fee,
            stability_fee: self.get_stability_fee(),
            gmu_price: self.get_gmu_price(),
        }
    }

    // ========== Getters ==========

    pub fn get_global_collateral_ratio(&self) -> u64 {
        self.global_collateral_ratio.get().unwrap_or(COLLATERAL_RATIO_MAX)
    }

    pub fn get_fees(&self) -> FeeConfig {
        self.fees.get().unwrap_or_default()
    }

    pub fn get_pauses(&self) -> PauseFlags {
        self.pauses.get().unwrap_or_default()
    }

    pub fn get_refresh_config(&self) -> RefreshConfig {
        self.refresh.get().unwrap_or_default()
    }

    pub fn get_stability_fee_config(&self) -> StabilityFeeConfig {
        self.stability_fee.get().unwrap_or_default()
    }

    pub fn get_last_refresh(&self) -> Option<u64> {
        self.last_refresh.get()
    }

    pub fn get_fee_collector(&self) -> Address {
        self.address_of(&self.fee_collector)
    }

    pub fn get_pool_count(&self) -> u32 {
        self.pool_count.get().unwrap_or(0)
    }

    pub fn get_pool(&self, index: u32) -> Option<Address> {
        if index >= self.get_pool_count() {
            return None;
        }
        self.pools.get(&index)
    }

    pub fn is_pool(&self, pool: Address) -> bool {
        self.registered.get(&pool).unwrap_or(false)
    }

    // ========== Collateral Ratio ==========

    /// Step the ratio toward the level implied by the current ARTH price
    pub fn refresh_collateral_ratio(&mut self) {
        if self.get_pauses().collateral_ratio_paused {
            self.env().revert(ArthError::Paused);
        }

        let refresh = self.get_refresh_config();
        let now = self.env().get_block_time();
        if let Some(last) = self.last_refresh.get() {
            if now < last.saturating_add(refresh.refresh_cooldown) {
                self.env().revert(ArthError::RefreshCooldownActive);
            }
        }

        let old_ratio = self.get_global_collateral_ratio();
        let new_ratio = next_collateral_ratio(old_ratio, self.get_arth_price(), &refresh);

        self.global_collateral_ratio.set(new_ratio);
        self.last_refresh.set(now);
        self.env().emit_event(CollateralRatioUpdated { old_ratio, new_ratio });
    }

    pub fn set_global_collateral_ratio(&mut self, ratio: u64) {
        self.require_admin_or_timelock();
        if ratio > COLLATERAL_RATIO_MAX {
            self.env().revert(ArthError::InvalidRatio);
        }

        let old_ratio = self.get_global_collateral_ratio();
        self.global_collateral_ratio.set(ratio);
        self.env().emit_event(CollateralRatioUpdated { old_ratio, new_ratio: ratio });
    }

    pub fn set_refresh_config(&mut self, config: RefreshConfig) {
        self.require_admin_or_timelock();
        if config.ratio_step > COLLATERAL_RATIO_MAX {
            self.env().revert(ArthError::InvalidConfig);
        }
        self.refresh.set(config);
        self.env().emit_event(RefreshConfigUpdated { config });
    }

    // ========== Fees ==========

    pub fn set_minting_fee(&mut self, fee: u64) {
        let mut fees = self.get_fees();
        fees.minting_fee = fee;
        self.update_fees(fees);
    }

    pub fn set_redemption_fee(&mut self, fee: u64) {
        let mut fees = self.get_fees();
        fees.redemption_fee = fee;
        self.update_fees(fees);
    }

    pub fn set_buyback_fee(&mut self, fee: u64) {
        let mut fees = self.get_fees();
        fees.buyback_fee = fee;
        self.update_fees(fees);
    }

    pub fn set_recollat_fee(&mut self, fee: u64) {
        let mut fees = self.get_fees();
        fees.recollat_fee = fee;
        self.update_fees(fees);
    }

    /// Replace the stability fee schedule; the genesis window restarts now
    pub fn set_stability_fee_schedule(&mut self, bootstrap_rate: u64, steady_rate: u64, genesis_window: u64) {
        self.require_admin_or_timelock();
        if !stability_fee::is_valid_rate(bootstrap_rate) || !stability_fee::is_valid_rate(steady_rate) {
            self.env().revert(ArthError::FeeOutOfRange);
        }
        let config = StabilityFeeConfig {
            bootstrap_rate,
            steady_rate,
            genesis_start: self.env().get_block_time(),
            genesis_window,
        };
        self.stability_fee.set(config);
        self.env().emit_event(StabilityFeeScheduleUpdated { config });
    }

    pub fn set_fee_collector(&mut self, collector: Address) {
        self.require_admin_or_timelock();
        self.fee_collector.set(collector);
        self.env().emit_event(FeeCollectorUpdated { collector });
    }

    // ========== Oracles ==========

    pub fn set_arth_oracle(&mut self, oracle: Address) {
        self.require_admin_or_timelock();
        self.arth_oracle.set(oracle);
        self.env().emit_event(OracleUpdated { source: PriceSource::ArthTwap, oracle });
    }

    pub fn set_arthx_oracle(&mut self, oracle: Address) {
        self.require_admin_or_timelock();
        self.arthx_oracle.set(oracle);
        self.env().emit_event(OracleUpdated { source: PriceSource::ArthxTwap, oracle });
    }

    pub fn set_maha_oracle(&mut self, oracle: Address) {
        self.require_admin_or_timelock();
        self.maha_oracle.set(oracle);
        self.env().emit_event(OracleUpdated { source: PriceSource::MahaTwap, oracle });
    }

    pub fn set_gmu_feed(&mut self, feed: Address) {
        self.require_admin_or_timelock();
        self.gmu_feed.set(feed);
        self.env().emit_event(OracleUpdated { source: PriceSource::GmuFeed, oracle: feed });
    }

    // ========== Pauses ==========

    pub fn toggle_minting(&mut self) {
        self.toggle(PausableOperation::Mint, ROLE_MINT_PAUSER);
    }

    pub fn toggle_redeeming(&mut self) {
        self.toggle(PausableOperation::Redeem, ROLE_REDEEM_PAUSER);
    }

    pub fn toggle_recollateralize(&mut self) {
        self.toggle(PausableOperation::Recollateralize, ROLE_RECOLLATERALIZE_PAUSER);
    }

    pub fn toggle_buyback(&mut self) {
        self.toggle(PausableOperation::Buyback, ROLE_BUYBACK_PAUSER);
    }

    pub fn toggle_collateral_ratio(&mut self) {
        self.toggle(PausableOperation::CollateralRatio, ROLE_COLLATERAL_RATIO_PAUSER);
    }

    // ========== Pool Registry ==========

    pub fn add_pool(&mut self, pool: Address) {
        self.require_admin_or_timelock();
        if self.is_pool(pool) {
            self.env().revert(ArthError::PoolAlreadyRegistered);
        }

        let index = self.get_pool_count();
        self.pools.set(&index, pool);
        self.pool_index.set(&pool, index);
        self.registered.set(&pool, true);
        self.pool_count.set(index + 1);

        self.env().emit_event(PoolAdded { pool });
    }

    /// Remove a pool; the last pool takes its slot
    pub fn remove_pool(&mut self, pool: Address) {
        self.require_admin_or_timelock();
        if !self.is_pool(pool) {
            self.env().revert(ArthError::PoolNotRegistered);
        }

        let count = self.get_pool_count();
        let index = self.pool_index.get(&pool).unwrap_or(0);
        let last_index = count - 1;
        if index != last_index {
            if let Some(last_pool) = self.pools.get(&last_index) {
                self.pools.set(&index, last_pool);
                self.pool_index.set(&last_pool, index);
            }
        }
        self.registered.set(&pool, false);
        self.pool_count.set(last_index);

        self.env().emit_event(PoolRemoved { pool });
    }

    // ========== Internal Functions ==========

    fn compose_price(&self, oracle: &Var<Address>, token: &Var<Address>) -> U256 {
        let twap = TwapOracleContractRef::new(self.env().clone(), self.address_of(oracle));
        let in_reference = twap.consult(self.address_of(token), U256::from(PRICE_PRECISION));
        in_reference * self.get_gmu_price() / precision()
    }

    fn sum_pools(&self, excluded: Option<Address>) -> U256 {
        let mut total = U256::zero();
        for index in 0..self.get_pool_count() {
            let Some(pool) = self.pools.get(&index) else { continue };
            if Some(pool) == excluded {
                continue;
            }
            let pool_ref = CollateralPoolContractRef::new(self.env().clone(), pool);
            total += pool_ref.get_collateral_gmu_balance();
        }
        total
    }

    fn update_fees(&mut self, fees: FeeConfig) {
        self.require_admin_or_timelock();
        let all = [fees.minting_fee, fees.redemption_fee, fees.buyback_fee, fees.recollat_fee];
        if all.iter().any(|fee| *fee >= PRICE_PRECISION) {
            self.env().revert(ArthError::FeeOutOfRange);
        }

        self.fees.set(fees);
        self.env().emit_event(FeesUpdated {
            minting_fee: fees.minting_fee,
            redemption_fee: fees.redemption_fee,
            buyback_fee: fees.buyback_fee,
            recollat_fee: fees.recollat_fee,
        });
    }

    fn toggle(&mut self, operation: PausableOperation, pauser_role: u8) {
        let caller = self.env().caller();
        if !self.has_role(pauser_role, caller) && !self.has_role(ROLE_DEFAULT_ADMIN, caller) {
            self.env().revert(ArthError::Forbidden);
        }

        let mut pauses = self.get_pauses();
        let paused = !pauses.is_paused(operation);
        pauses.set(operation, paused);
        self.pauses.set(pauses);

        self.env().emit_event(PauseToggled { operation, paused, by: caller });
    }

    fn has_role(&self, role_id: u8, account: Address) -> bool {
        let registry = RoleRegistryContractRef::new(self.env().clone(), self.address_of(&self.access_control));
        registry.has_role(role_id, account)
    }

    fn require_admin_or_timelock(&self) {
        let caller = self.env().caller();
        if !self.has_role(ROLE_DEFAULT_ADMIN, caller) && !self.has_role(ROLE_TIMELOCK, caller) {
            self.env().revert(ArthError::Forbidden);
        }
    }

    fn address_of(&self, slot: &Var<Address>) -> Address {
        match slot.get() {
            Some(address) => address,
            None => self.env().revert(ArthError::InvalidConfig),
        }
    }
}
