//! Pure pricing for mint, redeem, recollateralize and buyback.
//!
//! Every function takes the controller's [`GlobalState`] snapshot and the
//! relevant oracle prices explicitly, and returns a quote or an [`ArthError`].
//! Nothing here touches storage; pools apply the quote afterwards.
//!
//! Collateral amounts are expected in 18 decimals. Pools scale their native
//! collateral units up before quoting and back down before transferring.

use odra::casper_types::U256;
use crate::curve::CurveParams;
use crate::errors::{ArthError, ArthResult};
use crate::math::{
    amount_for_value, apply_fee, from_d18, mul_ratio, ratio_of, to_d18, value_of,
    COLLATERAL_RATIO_MAX, PRICE_PRECISION,
};
use crate::types::{GlobalState, PriceSnapshot, RefreshConfig};

/// Lowest ratio accepted by the unified `mint` and `redeem`
pub const UNIFIED_RATIO_MIN: u64 = 1;
/// Highest ratio accepted by the unified `mint` and `redeem`
pub const UNIFIED_RATIO_MAX: u64 = COLLATERAL_RATIO_MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintQuote {
    pub arth_out: U256,
    /// ARTHX burnt (zero for 1:1 mints)
    pub arthx_used: U256,
    /// ARTH withheld as minting fee
    pub fee: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedeemQuote {
    /// Collateral owed, 18 decimals
    pub collateral_out: U256,
    pub arthx_out: U256,
    /// ARTH withheld as redemption fee
    pub fee: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecollatQuote {
    /// Collateral actually taken, 18 decimals
    pub collateral_used: U256,
    pub arthx_out: U256,
    /// Bonus applied, parts-per-million
    pub bonus: u64,
}

pub fn ensure_min(actual: U256, min: U256, error: ArthError) -> ArthResult<()> {
    if actual < min {
        return Err(error);
    }
    Ok(())
}

fn ensure_price(price: U256) -> ArthResult<U256> {
    if price.is_zero() {
        return Err(ArthError::InvalidPrice);
    }
    Ok(price)
}

fn ensure_ratio(gcr: u64, min: u64, max: u64) -> ArthResult<()> {
    if gcr < min || gcr > max {
        return Err(ArthError::InvalidRatio);
    }
    Ok(())
}

fn fee_split(gross: U256, fee: u64) -> (U256, U256) {
    let net = apply_fee(gross, fee);
    (net, gross - net)
}

// ========== Mint ==========

/// Fully collateralized mint, only at 100% GCR
pub fn quote_mint_1t1(
    state: &GlobalState,
    collateral_price: U256,
    collateral_in: U256,
) -> ArthResult<MintQuote> {
    ensure_ratio(state.global_collateral_ratio, COLLATERAL_RATIO_MAX, COLLATERAL_RATIO_MAX)?;
    let value = value_of(collateral_in, ensure_price(collateral_price)?);
    let (arth_out, fee) = fee_split(value, state.fees.minting_fee);
    Ok(MintQuote { arth_out, arthx_used: U256::zero(), fee })
}

/// Purely algorithmic mint, only at 0% GCR
pub fn quote_mint_algorithmic(
    state: &GlobalState,
    arthx_price: U256,
    arthx_in: U256,
) -> ArthResult<MintQuote> {
    ensure_ratio(state.global_collateral_ratio, 0, 0)?;
    let value = value_of(arthx_in, ensure_price(arthx_price)?);
    let (arth_out, fee) = fee_split(value, state.fees.minting_fee);
    Ok(MintQuote { arth_out, arthx_used: arthx_in, fee })
}

/// Fractional mint with caller-supplied legs, only strictly between 0% and 100%.
///
/// Both legs are consumed in full; their proportion is not checked against the
/// current ratio.
pub fn quote_mint_fractional(
    state: &GlobalState,
    prices: &PriceSnapshot,
    collateral_in: U256,
    arthx_in: U256,
) -> ArthResult<MintQuote> {
    ensure_ratio(state.global_collateral_ratio, 1, COLLATERAL_RATIO_MAX - 1)?;
    let collateral_value = value_of(collateral_in, ensure_price(prices.collateral_price)?);
    let arthx_value = value_of(arthx_in, ensure_price(prices.arthx_price)?);
    let (arth_out, fee) = fee_split(collateral_value + arthx_value, state.fees.minting_fee);
    Ok(MintQuote { arth_out, arthx_used: arthx_in, fee })
}

/// Unified mint: the ARTHX leg is derived from the collateral leg and the GCR.
///
/// `total = collateral_value / gcr`; the part not covered by collateral is
/// paid in ARTHX at its current price.
pub fn quote_mint(
    state: &GlobalState,
    prices: &PriceSnapshot,
    collateral_in: U256,
) -> ArthResult<MintQuote> {
    let gcr = state.global_collateral_ratio;
    ensure_ratio(gcr, UNIFIED_RATIO_MIN, UNIFIED_RATIO_MAX)?;

    let collateral_value = value_of(collateral_in, ensure_price(prices.collateral_price)?);
    let total_value = collateral_value * U256::from(PRICE_PRECISION) / U256::from(gcr);
    let arthx_value = total_value - collateral_value;

    let arthx_used = if arthx_value.is_zero() {
        U256::zero()
    } else {
        amount_for_value(arthx_value, ensure_price(prices.arthx_price)?)
    };

    let (arth_out, fee) = fee_split(total_value, state.fees.minting_fee);
    Ok(MintQuote { arth_out, arthx_used, fee })
}

// ========== Redeem ==========

/// Split the post-fee ARTH value into a collateral leg (`gcr`) and an ARTHX leg
fn split_redemption(
    state: &GlobalState,
    prices: &PriceSnapshot,
    arth_in: U256,
) -> ArthResult<RedeemQuote> {
    let gcr = state.global_collateral_ratio;
    let (after_fee, fee) = fee_split(arth_in, state.fees.redemption_fee);

    let collateral_value = mul_ratio(after_fee, gcr);
    let arthx_value = after_fee - collateral_value;

    let collateral_out = if collateral_value.is_zero() {
        U256::zero()
    } else {
        amount_for_value(collateral_value, ensure_price(prices.collateral_price)?)
    };
    let arthx_out = if arthx_value.is_zero() {
        U256::zero()
    } else {
        amount_for_value(arthx_value, ensure_price(prices.arthx_price)?)
    };

    Ok(RedeemQuote { collateral_out, arthx_out, fee })
}

pub fn quote_redeem_1t1(
    state: &GlobalState,
    prices: &PriceSnapshot,
    arth_in: U256,
) -> ArthResult<RedeemQuote> {
    ensure_ratio(state.global_collateral_ratio, COLLATERAL_RATIO_MAX, COLLATERAL_RATIO_MAX)?;
    split_redemption(state, prices, arth_in)
}

pub fn quote_redeem_fractional(
    state: &GlobalState,
    prices: &PriceSnapshot,
    arth_in: U256,
) -> ArthResult<RedeemQuote> {
    ensure_ratio(state.global_collateral_ratio, 1, COLLATERAL_RATIO_MAX - 1)?;
    split_redemption(state, prices, arth_in)
}

pub fn quote_redeem_algorithmic(
    state: &GlobalState,
    prices: &PriceSnapshot,
    arth_in: U256,
) -> ArthResult<RedeemQuote> {
    ensure_ratio(state.global_collateral_ratio, 0, 0)?;
    split_redemption(state, prices, arth_in)
}

pub fn quote_redeem(
    state: &GlobalState,
    prices: &PriceSnapshot,
    arth_in: U256,
) -> ArthResult<RedeemQuote> {
    ensure_ratio(state.global_collateral_ratio, UNIFIED_RATIO_MIN, UNIFIED_RATIO_MAX)?;
    split_redemption(state, prices, arth_in)
}

// ========== Recollateralize / buyback ==========

/// Collateral value the ARTH supply should be backed by at the current GCR
pub fn target_collateral_value(arth_supply: U256, gcr: u64) -> U256 {
    mul_ratio(arth_supply, gcr.min(COLLATERAL_RATIO_MAX))
}

/// Quote a recollateralization.
///
/// Only the collateral needed to bring the global collateral value up to
/// target is taken, rounded down to whole collateral base units
/// (`collateral_missing_decimals`). The ARTHX reward is the value of what is
/// actually taken, plus the curve bonus and the pool's bonus buffer, less the
/// recollateralize fee.
#[allow(clippy::too_many_arguments)]
pub fn quote_recollateralize(
    state: &GlobalState,
    curve: &CurveParams,
    bonus_buffer: u64,
    prices: &PriceSnapshot,
    collateral_in: U256,
    collateral_missing_decimals: u8,
    arth_supply: U256,
    global_collateral_value: U256,
) -> ArthResult<RecollatQuote> {
    let target = target_collateral_value(arth_supply, state.global_collateral_ratio);
    if global_collateral_value >= target {
        return Err(ArthError::RecollateralizeNotNeeded);
    }

    let collateral_price = ensure_price(prices.collateral_price)?;
    let arthx_price = ensure_price(prices.arthx_price)?;

    let fulfillment = ratio_of(global_collateral_value, target);
    let possible_value = target - global_collateral_value;
    let offered_value = value_of(collateral_in, collateral_price);

    let (used_value, collateral_used) = if offered_value <= possible_value {
        (offered_value, collateral_in)
    } else {
        let needed = amount_for_value(possible_value, collateral_price);
        let used = to_d18(from_d18(needed, collateral_missing_decimals), collateral_missing_decimals);
        if used.is_zero() {
            return Err(ArthError::ZeroAmount);
        }
        (value_of(used, collateral_price), used)
    };

    let bonus = curve.bonus(fulfillment).saturating_add(bonus_buffer);
    let rewarded_value =
        used_value * U256::from(PRICE_PRECISION.saturating_add(bonus)) / U256::from(PRICE_PRECISION);
    let net_value = apply_fee(rewarded_value, state.fees.recollat_fee);

    Ok(RecollatQuote {
        collateral_used,
        arthx_out: amount_for_value(net_value, arthx_price),
        bonus,
    })
}

/// Quote an ARTHX buyback against collateral held above target.
///
/// Returns the collateral paid out, 18 decimals.
pub fn quote_buyback(
    state: &GlobalState,
    prices: &PriceSnapshot,
    arthx_in: U256,
    arth_supply: U256,
    global_collateral_value: U256,
) -> ArthResult<U256> {
    let target = target_collateral_value(arth_supply, state.global_collateral_ratio);
    let excess = global_collateral_value.saturating_sub(target);

    let arthx_value = value_of(arthx_in, ensure_price(prices.arthx_price)?);
    if excess.is_zero() || arthx_value > excess {
        return Err(ArthError::InsufficientCollateral);
    }

    let collateral = amount_for_value(arthx_value, ensure_price(prices.collateral_price)?);
    Ok(apply_fee(collateral, state.fees.buyback_fee))
}

// ========== Collateral ratio ==========

/// Next GCR after one refresh step.
///
/// ARTH above the band means the market trusts the peg, so backing steps down;
/// below the band it steps up. Inside the band the ratio is unchanged.
pub fn next_collateral_ratio(gcr: u64, arth_price: U256, refresh: &RefreshConfig) -> u64 {
    let target = U256::from(refresh.price_target);
    let band = U256::from(refresh.price_band);

    if arth_price > target + band {
        gcr.saturating_sub(refresh.ratio_step)
    } else if arth_price + band < target {
        gcr.saturating_add(refresh.ratio_step).min(COLLATERAL_RATIO_MAX)
    } else {
        gcr
    }
}
