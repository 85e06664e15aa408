//! ARTH Pool Contract
//!
//! One pool per collateral asset. Handles:
//! - Minting ARTH against collateral and/or ARTHX (1:1, fractional,
//!   algorithmic and the unified `mint`)
//! - Two-phase redemption: `redeem*` burns ARTH and records what is owed,
//!   `collect_redemption` pays it out once the delay has passed
//! - Recollateralization rewarded along the bonus curve
//! - ARTHX buybacks against collateral held above target
//! - AMO borrow/repay of idle collateral
//!
//! Internal bookkeeping (redemption requests, reserved collateral, AMO
//! debits) is always written before any ledger call.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::{ContractEnv, ContractRef};
use crate::access_control::{ROLE_AMO, ROLE_DEFAULT_ADMIN, ROLE_TIMELOCK};
use crate::curve::CurveParams;
use crate::errors::{ArthError, ArthResult};
use crate::events::{
    BoughtBack, Borrow, CollateralFeedUpdated, CurveUpdated, Minted, PoolParametersUpdated,
    Recollateralized, RedemptionCollected, RedemptionRequested, Repay, StabilityFeeCharged,
};
use crate::interfaces::{
    ControllerContractRef, Erc20LedgerContractRef, RoleRegistryContractRef,
    SpotPriceFeedContractRef,
};
use crate::math::{from_d18, missing_decimals, normalize_price, to_d18, value_of};
use crate::pricing::{self, ensure_min, RedeemQuote};
use crate::stability_fee::fee_in_maha;
use crate::types::{GlobalState, MintResult, PausableOperation, PriceSnapshot, RedemptionRequest};

fn or_revert<T>(env: &ContractEnv, result: ArthResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => env.revert(error),
    }
}

/// ARTH Pool Contract
#[odra::module(events = [
    Minted,
    RedemptionRequested,
    RedemptionCollected,
    Recollateralized,
    BoughtBack,
    Borrow,
    Repay,
    StabilityFeeCharged,
    PoolParametersUpdated,
    CurveUpdated,
    CollateralFeedUpdated
])]
pub struct ArthPool {
    access_control: Var<Address>,
    controller: Var<Address>,

    // Tokens
    collateral: Var<Address>,
    arth: Var<Address>,
    arthx: Var<Address>,
    maha: Var<Address>,

    /// Spot feed pricing the collateral in GMU
    collateral_feed: Var<Address>,
    /// 18 minus the collateral's decimals
    missing_decimals: Var<u8>,

    /// Max collateral the pool may hold, collateral base units
    ceiling: Var<U256>,
    redemption_delay: Var<u64>,
    /// Added on top of the curve bonus, parts-per-million
    bonus_rate_buffer: Var<u64>,
    curve: Var<CurveParams>,

    // Redemption queue
    redemptions: Mapping<Address, Option<RedemptionRequest>>,
    /// Collateral reserved for pending redemptions
    unclaimed_collateral: Var<U256>,
    /// ARTHX owed to pending redemptions, not yet minted
    unclaimed_arthx: Var<U256>,

    // AMO ledger
    borrowed: Mapping<Address, U256>,
    total_borrowed: Var<U256>,
}

#[odra::module]
impl ArthPool {
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        access_control: Address,
        controller: Address,
        collateral: Address,
        arth: Address,
        arthx: Address,
        maha: Address,
        collateral_feed: Address,
        collateral_decimals: u8,
        ceiling: U256,
        redemption_delay: u64,
        curve: CurveParams,
    ) {
        or_revert(&self.env(), curve.validate());

        self.access_control.set(access_control);
        self.controller.set(controller);
        self.collateral.set(collateral);
        self.arth.set(arth);
        self.arthx.set(arthx);
        self.maha.set(maha);
        self.collateral_feed.set(collateral_feed);
        self.missing_decimals.set(missing_decimals(collateral_decimals));
        self.ceiling.set(ceiling);
        self.redemption_delay.set(redemption_delay);
        self.bonus_rate_buffer.set(0);
        self.curve.set(curve);
        self.unclaimed_collateral.set(U256::zero());
        self.unclaimed_arthx.set(U256::zero());
        self.total_borrowed.set(U256::zero());
    }

    // ========== Mint ==========

    /// Mint ARTH 1:1 against collateral; requires a 100% collateral ratio
    pub fn mint_1t1_arth(&mut self, collateral_in: U256, arth_out_min: U256) -> U256 {
        let state = self.operation_state(PausableOperation::Mint, collateral_in);
        self.check_ceiling(collateral_in);

        let quote = or_revert(
            &self.env(),
            pricing::quote_mint_1t1(&state, self.get_collateral_price(), self.scale_up(collateral_in)),
        );
        or_revert(&self.env(), ensure_min(quote.arth_out, arth_out_min, ArthError::ArthSlippage));

        let caller = self.env().caller();
        self.pull_collateral(caller, collateral_in);
        self.arth_ref().mint(caller, quote.arth_out);

        self.env().emit_event(Minted {
            minter: caller,
            collateral_in,
            arthx_in: U256::zero(),
            arth_out: quote.arth_out,
            fee: quote.fee,
        });
        quote.arth_out
    }

    /// Mint ARTH by burning ARTHX; requires a 0% collateral ratio
    pub fn mint_algorithmic_arth(&mut self, arthx_in: U256, arth_out_min: U256) -> U256 {
        let state = self.operation_state(PausableOperation::Mint, arthx_in);

        let quote = or_revert(
            &self.env(),
            pricing::quote_mint_algorithmic(&state, self.controller_ref().get_arthx_price(), arthx_in),
        );
        or_revert(&self.env(), ensure_min(quote.arth_out, arth_out_min, ArthError::ArthSlippage));

        let caller = self.env().caller();
        self.arthx_ref().burn_from(caller, arthx_in);
        self.arth_ref().mint(caller, quote.arth_out);

        self.env().emit_event(Minted {
            minter: caller,
            collateral_in: U256::zero(),
            arthx_in,
            arth_out: quote.arth_out,
            fee: quote.fee,
        });
        quote.arth_out
    }

    /// Mint ARTH from both legs as supplied; requires a fractional ratio
    pub fn mint_fractional_arth(&mut self, collateral_in: U256, arthx_in: U256, arth_out_min: U256) -> U256 {
        let state = self.operation_state(PausableOperation::Mint, collateral_in.saturating_add(arthx_in));
        self.check_ceiling(collateral_in);

        let prices = self.price_snapshot();
        let quote = or_revert(
            &self.env(),
            pricing::quote_mint_fractional(&state, &prices, self.scale_up(collateral_in), arthx_in),
        );
        or_revert(&self.env(), ensure_min(quote.arth_out, arth_out_min, ArthError::ArthSlippage));

        let caller = self.env().caller();
        self.pull_collateral(caller, collateral_in);
        if !arthx_in.is_zero() {
            self.arthx_ref().burn_from(caller, arthx_in);
        }
        self.arth_ref().mint(caller, quote.arth_out);

        self.env().emit_event(Minted {
            minter: caller,
            collateral_in,
            arthx_in,
            arth_out: quote.arth_out,
            fee: quote.fee,
        });
        quote.arth_out
    }

    /// Unified mint: the ARTHX leg is derived from the current ratio and
    /// capped at `arthx_in_max`; the minting fee goes to the fee collector.
    pub fn mint(&mut self, collateral_in: U256, arthx_in_max: U256, arth_out_min: U256) -> MintResult {
        let state = self.operation_state(PausableOperation::Mint, collateral_in);
        self.check_ceiling(collateral_in);

        let prices = self.price_snapshot();
        let quote = or_revert(&self.env(), pricing::quote_mint(&state, &prices, self.scale_up(collateral_in)));
        or_revert(&self.env(), ensure_min(quote.arth_out, arth_out_min, ArthError::ArthSlippage));
        if quote.arthx_used > arthx_in_max {
            self.env().revert(ArthError::ArthxSlippage);
        }

        let caller = self.env().caller();
        self.pull_collateral(caller, collateral_in);
        if !quote.arthx_used.is_zero() {
            self.arthx_ref().burn_from(caller, quote.arthx_used);
        }
        let mut arth = self.arth_ref();
        arth.mint(caller, quote.arth_out);
        if !quote.fee.is_zero() {
            arth.mint(self.controller_ref().get_fee_collector(), quote.fee);
        }

        self.env().emit_event(Minted {
            minter: caller,
            collateral_in,
            arthx_in: quote.arthx_used,
            arth_out: quote.arth_out,
            fee: quote.fee,
        });
        MintResult { arth_out: quote.arth_out, arthx_used: quote.arthx_used }
    }

    // ========== Redeem ==========

    pub fn redeem_1t1_arth(&mut self, arth_in: U256, collateral_out_min: U256) {
        let state = self.operation_state(PausableOperation::Redeem, arth_in);
        let prices = self.price_snapshot();
        let quote = or_revert(&self.env(), pricing::quote_redeem_1t1(&state, &prices, arth_in));
        self.request_redemption(&state, quote, arth_in, U256::zero(), collateral_out_min, false);
    }

    pub fn redeem_fractional_arth(&mut self, arth_in: U256, arthx_out_min: U256, collateral_out_min: U256) {
        let state = self.operation_state(PausableOperation::Redeem, arth_in);
        let prices = self.price_snapshot();
        let quote = or_revert(&self.env(), pricing::quote_redeem_fractional(&state, &prices, arth_in));
        self.request_redemption(&state, quote, arth_in, arthx_out_min, collateral_out_min, false);
    }

    pub fn redeem_algorithmic_arth(&mut self, arth_in: U256, arthx_out_min: U256) {
        let state = self.operation_state(PausableOperation::Redeem, arth_in);
        let prices = PriceSnapshot {
            collateral_price: U256::zero(),
            arthx_price: self.controller_ref().get_arthx_price(),
        };
        let quote = or_revert(&self.env(), pricing::quote_redeem_algorithmic(&state, &prices, arth_in));
        self.request_redemption(&state, quote, arth_in, arthx_out_min, U256::zero(), false);
    }

    /// Unified redeem; the redemption fee is moved to the fee collector
    /// instead of being burnt.
    pub fn redeem(&mut self, arth_in: U256, arthx_out_min: U256, collateral_out_min: U256) {
        let state = self.operation_state(PausableOperation::Redeem, arth_in);
        let prices = self.price_snapshot();
        let quote = or_revert(&self.env(), pricing::quote_redeem(&state, &prices, arth_in));
        self.request_redemption(&state, quote, arth_in, arthx_out_min, collateral_out_min, true);
    }

    /// Pay out the caller's pending redemption once the delay has passed
    pub fn collect_redemption(&mut self) {
        let caller = self.env().caller();
        let request = match self.redemptions.get(&caller).flatten() {
            Some(request) => request,
            None => self.env().revert(ArthError::NoActiveRedemption),
        };

        let now = self.env().get_block_time();
        if now < request.request_tick.saturating_add(self.get_redemption_delay()) {
            self.env().revert(ArthError::RedemptionDelayActive);
        }

        // Effects
        self.redemptions.set(&caller, None);
        self.unclaimed_collateral
            .set(self.get_unclaimed_collateral().saturating_sub(request.collateral_owed));
        self.unclaimed_arthx
            .set(self.get_unclaimed_arthx().saturating_sub(request.arthx_owed));

        // Interactions
        if !request.collateral_owed.is_zero() {
            self.push_collateral(caller, request.collateral_owed);
        }
        if !request.arthx_owed.is_zero() {
            self.arthx_ref().mint(caller, request.arthx_owed);
        }

        self.env().emit_event(RedemptionCollected {
            redeemer: caller,
            collateral_out: request.collateral_owed,
            arthx_out: request.arthx_owed,
        });
    }

    // ========== Recollateralize / Buyback ==========

    /// Add collateral toward the target value in exchange for ARTHX plus a bonus
    pub fn recollateralize_arth(&mut self, collateral_in: U256, arthx_out_min: U256) -> U256 {
        let state = self.operation_state(PausableOperation::Recollateralize, collateral_in);
        let prices = self.price_snapshot();

        let quote = or_revert(
            &self.env(),
            pricing::quote_recollateralize(
                &state,
                &self.get_curve(),
                self.get_bonus_rate_buffer(),
                &prices,
                self.scale_up(collateral_in),
                self.missing_decimals.get().unwrap_or(0),
                self.arth_ref().total_supply(),
                self.global_collateral_value(),
            ),
        );
        or_revert(&self.env(), ensure_min(quote.arthx_out, arthx_out_min, ArthError::ArthxSlippage));

        let collateral_used = self.scale_down(quote.collateral_used);
        let caller = self.env().caller();
        self.pull_collateral(caller, collateral_used);
        self.arthx_ref().mint(caller, quote.arthx_out);

        self.env().emit_event(Recollateralized {
            caller,
            collateral_in: collateral_used,
            arthx_out: quote.arthx_out,
            bonus: quote.bonus,
        });
        quote.arthx_out
    }

    /// Burn ARTHX for collateral held above the target value
    pub fn buy_back_arthx(&mut self, arthx_in: U256, collateral_out_min: U256) -> U256 {
        let state = self.operation_state(PausableOperation::Buyback, arthx_in);
        let prices = self.price_snapshot();

        let collateral_out = self.scale_down(or_revert(
            &self.env(),
            pricing::quote_buyback(
                &state,
                &prices,
                arthx_in,
                self.arth_ref().total_supply(),
                self.global_collateral_value(),
            ),
        ));
        if collateral_out > self.free_collateral() {
            self.env().revert(ArthError::InsufficientCollateral);
        }
        or_revert(&self.env(), ensure_min(collateral_out, collateral_out_min, ArthError::CollateralSlippage));

        let caller = self.env().caller();
        self.arthx_ref().burn_from(caller, arthx_in);
        self.push_collateral(caller, collateral_out);

        self.env().emit_event(BoughtBack { caller, arthx_in, collateral_out });
        collateral_out
    }

    // ========== AMO ==========

    /// Lend idle collateral to an AMO operator
    pub fn borrow(&mut self, amount: U256) {
        let caller = self.require_amo();
        if amount.is_zero() {
            self.env().revert(ArthError::ZeroAmount);
        }
        if amount > self.free_collateral() {
            self.env().revert(ArthError::InsufficientCollateral);
        }

        // Effects
        self.borrowed.set(&caller, self.get_borrowed(caller) + amount);
        self.total_borrowed.set(self.get_total_borrowed() + amount);

        // Interactions
        self.push_collateral(caller, amount);

        self.env().emit_event(Borrow { caller, amount });
    }

    /// Return borrowed collateral; the caller must have approved the pool
    pub fn repay(&mut self, amount: U256) {
        let caller = self.require_amo();
        if amount.is_zero() {
            self.env().revert(ArthError::ZeroAmount);
        }
        let debt = self.get_borrowed(caller);
        if amount > debt {
            self.env().revert(ArthError::RepayExceedsBorrowed);
        }

        // Effects
        self.borrowed.set(&caller, debt - amount);
        self.total_borrowed.set(self.get_total_borrowed() - amount);

        // Interactions
        self.pull_collateral(caller, amount);

        self.env().emit_event(Repay { caller, amount });
    }

    // ========== Views ==========

    /// Collateral price in GMU, 1e6 precision
    pub fn get_collateral_price(&self) -> U256 {
        let feed = SpotPriceFeedContractRef::new(self.env().clone(), self.address_of(&self.collateral_feed));
        normalize_price(feed.latest_price(), feed.decimals())
    }

    /// Collateral attributed to the pool: held + lent to AMOs − reserved for redemptions
    pub fn get_collateral_balance(&self) -> U256 {
        (self.ledger_balance() + self.get_total_borrowed()).saturating_sub(self.get_unclaimed_collateral())
    }

    /// Collateral balance valued in GMU (18 decimals)
    pub fn get_collateral_gmu_balance(&self) -> U256 {
        value_of(self.scale_up(self.get_collateral_balance()), self.get_collateral_price())
    }

    pub fn get_global_cr(&self) -> u64 {
        self.controller_ref().get_global_state().global_collateral_ratio
    }

    /// GMU value the ARTH supply should be backed by at the current ratio
    pub fn get_target_collateral_value(&self) -> U256 {
        pricing::target_collateral_value(self.arth_ref().total_supply(), self.get_global_cr())
    }

    /// Collateral value held above target across all pools, GMU
    pub fn get_available_excess_collateral(&self) -> U256 {
        self.global_collateral_value().saturating_sub(self.get_target_collateral_value())
    }

    /// MAHA a redeemer of `arth_amount` would be charged right now
    pub fn estimate_stability_fee_in_maha(&self, arth_amount: U256) -> U256 {
        let controller = self.controller_ref();
        let rate = controller.get_global_state().stability_fee;
        if rate == 0 {
            return U256::zero();
        }
        fee_in_maha(arth_amount, rate, controller.get_arth_price(), controller.get_maha_price())
    }

    pub fn get_redemption_request(&self, account: Address) -> Option<RedemptionRequest> {
        self.redemptions.get(&account).flatten()
    }

    pub fn get_unclaimed_collateral(&self) -> U256 {
        self.unclaimed_collateral.get().unwrap_or(U256::zero())
    }

    pub fn get_unclaimed_arthx(&self) -> U256 {
        self.unclaimed_arthx.get().unwrap_or(U256::zero())
    }

    pub fn get_borrowed(&self, account: Address) -> U256 {
        self.borrowed.get(&account).unwrap_or(U256::zero())
    }

    pub fn get_total_borrowed(&self) -> U256 {
        self.total_borrowed.get().unwrap_or(U256::zero())
    }

    pub fn get_ceiling(&self) -> U256 {
        self.ceiling.get().unwrap_or(U256::zero())
    }

    pub fn get_redemption_delay(&self) -> u64 {
        self.redemption_delay.get().unwrap_or(1)
    }

    pub fn get_bonus_rate_buffer(&self) -> u64 {
        self.bonus_rate_buffer.get().unwrap_or(0)
    }

    pub fn get_curve(&self) -> CurveParams {
        self.curve.get().unwrap_or_default()
    }

    pub fn get_collateral_token(&self) -> Option<Address> {
        self.collateral.get()
    }

    // ========== Admin ==========

    pub fn set_ceiling(&mut self, ceiling: U256) {
        self.require_admin_or_timelock();
        self.ceiling.set(ceiling);
        self.emit_parameters();
    }

    pub fn set_redemption_delay(&mut self, delay: u64) {
        self.require_admin_or_timelock();
        self.redemption_delay.set(delay);
        self.emit_parameters();
    }

    pub fn set_bonus_rate_buffer(&mut self, buffer: u64) {
        self.require_admin_or_timelock();
        self.bonus_rate_buffer.set(buffer);
        self.emit_parameters();
    }

    /// Swap in a new recollateralization curve
    pub fn set_curve(&mut self, curve: CurveParams) {
        self.require_admin_or_timelock();
        or_revert(&self.env(), curve.validate());
        self.curve.set(curve);
        self.env().emit_event(CurveUpdated { curve });
    }

    pub fn set_collateral_feed(&mut self, feed: Address) {
        self.require_admin_or_timelock();
        self.collateral_feed.set(feed);
        self.env().emit_event(CollateralFeedUpdated { feed });
    }

    // ========== Internal Functions ==========

    /// Global state for an operation, reverting if it is paused or the amount is zero
    fn operation_state(&self, operation: PausableOperation, amount: U256) -> GlobalState {
        let state = self.controller_ref().get_global_state();
        if state.pauses.is_paused(operation) {
            self.env().revert(ArthError::Paused);
        }
        if amount.is_zero() {
            self.env().revert(ArthError::ZeroAmount);
        }
        state
    }

    fn check_ceiling(&self, collateral_in: U256) {
        if self.get_collateral_balance().saturating_add(collateral_in) > self.get_ceiling() {
            self.env().revert(ArthError::CeilingExceeded);
        }
    }

    fn request_redemption(
        &mut self,
        state: &GlobalState,
        quote: RedeemQuote,
        arth_in: U256,
        arthx_out_min: U256,
        collateral_out_min: U256,
        route_fee: bool,
    ) {
        let collateral_out = self.scale_down(quote.collateral_out);
        if collateral_out > self.free_collateral() {
            self.env().revert(ArthError::InsufficientCollateral);
        }
        or_revert(&self.env(), ensure_min(collateral_out, collateral_out_min, ArthError::CollateralSlippage));
        or_revert(&self.env(), ensure_min(quote.arthx_out, arthx_out_min, ArthError::ArthxSlippage));

        let caller = self.env().caller();
        let maha_fee = if state.stability_fee == 0 {
            U256::zero()
        } else {
            let controller = self.controller_ref();
            fee_in_maha(arth_in, state.stability_fee, controller.get_arth_price(), controller.get_maha_price())
        };
        if !maha_fee.is_zero() && self.maha_ref().balance_of(caller) < maha_fee {
            self.env().revert(ArthError::InsufficientFeeBalance);
        }

        // Effects: accumulate into the caller's single pending request
        let now = self.env().get_block_time();
        let mut request = self.get_redemption_request(caller).unwrap_or(RedemptionRequest {
            requester: caller,
            collateral_owed: U256::zero(),
            arthx_owed: U256::zero(),
            request_tick: now,
        });
        request.collateral_owed += collateral_out;
        request.arthx_owed += quote.arthx_out;
        request.request_tick = now;
        self.redemptions.set(&caller, Some(request.clone()));
        self.unclaimed_collateral.set(self.get_unclaimed_collateral() + collateral_out);
        self.unclaimed_arthx.set(self.get_unclaimed_arthx() + quote.arthx_out);

        // Interactions
        let mut arth = self.arth_ref();
        if route_fee && !quote.fee.is_zero() {
            arth.burn_from(caller, arth_in - quote.fee);
            arth.protocol_transfer(caller, self.controller_ref().get_fee_collector(), quote.fee);
        } else {
            arth.burn_from(caller, arth_in);
        }
        if !maha_fee.is_zero() {
            self.maha_ref().burn_from(caller, maha_fee);
            self.env().emit_event(StabilityFeeCharged { payer: caller, maha_amount: maha_fee });
        }

        self.env().emit_event(RedemptionRequested {
            redeemer: caller,
            arth_in,
            collateral_owed: request.collateral_owed,
            arthx_owed: request.arthx_owed,
            request_tick: now,
        });
    }

    /// Global collateral value with this pool's balance read locally
    fn global_collateral_value(&self) -> U256 {
        let others = self
            .controller_ref()
            .get_global_collateral_value_excluding(self.env().self_address());
        others + self.get_collateral_gmu_balance()
    }

    fn price_snapshot(&self) -> PriceSnapshot {
        PriceSnapshot {
            collateral_price: self.get_collateral_price(),
            arthx_price: self.controller_ref().get_arthx_price(),
        }
    }

    /// Collateral actually held and not reserved for redemptions
    fn free_collateral(&self) -> U256 {
        self.ledger_balance().saturating_sub(self.get_unclaimed_collateral())
    }

    fn ledger_balance(&self) -> U256 {
        self.collateral_ref().balance_of(self.env().self_address())
    }

    fn pull_collateral(&self, from: Address, amount: U256) {
        if amount.is_zero() {
            return;
        }
        let pool = self.env().self_address();
        if !self.collateral_ref().transfer_from(from, pool, amount) {
            self.env().revert(ArthError::TransferFailed);
        }
    }

    fn push_collateral(&self, to: Address, amount: U256) {
        if !self.collateral_ref().transfer(to, amount) {
            self.env().revert(ArthError::TransferFailed);
        }
    }

    fn scale_up(&self, amount: U256) -> U256 {
        to_d18(amount, self.missing_decimals.get().unwrap_or(0))
    }

    fn scale_down(&self, amount_d18: U256) -> U256 {
        from_d18(amount_d18, self.missing_decimals.get().unwrap_or(0))
    }

    fn emit_parameters(&self) {
        self.env().emit_event(PoolParametersUpdated {
            ceiling: self.get_ceiling(),
            redemption_delay: self.get_redemption_delay(),
            bonus_rate_buffer: self.get_bonus_rate_buffer(),
        });
    }

    fn require_amo(&self) -> Address {
        let caller = self.env().caller();
        if !self.has_role(ROLE_AMO, caller) {
            self.env().revert(ArthError::Forbidden);
        }
        caller
    }

    fn require_admin_or_timelock(&self) {
        let caller = self.env().caller();
        if !self.has_role(ROLE_DEFAULT_ADMIN, caller) && !self.has_role(ROLE_TIMELOCK, caller) {
            self.env().revert(ArthError::Forbidden);
        }
    }

    fn has_role(&self, role_id: u8, account: Address) -> bool {
        RoleRegistryContractRef::new(self.env().clone(), self.address_of(&self.access_control))
            .has_role(role_id, account)
    }

    fn controller_ref(&self) -> ControllerContractRef {
        ControllerContractRef::new(self.env().clone(), self.address_of(&self.controller))
    }

    fn collateral_ref(&self) -> Erc20LedgerContractRef {
        self.ledger(&self.collateral)
    }

    fn arth_ref(&self) -> Erc20LedgerContractRef {
        self.ledger(&self.arth)
    }

    fn arthx_ref(&self) -> Erc20LedgerContractRef {
        self.ledger(&self.arthx)
    }

    fn maha_ref(&self) -> Erc20LedgerContractRef {
        self.ledger(&self.maha)
    }

    fn ledger(&self, slot: &Var<Address>) -> Erc20LedgerContractRef {
        Erc20LedgerContractRef::new(self.env().clone(), self.address_of(slot))
    }

    fn address_of(&self, slot: &Var<Address>) -> Address {
        match slot.get() {
            Some(address) => address,
            None => self.env().revert(ArthError::InvalidConfig),
        }
    }
}
