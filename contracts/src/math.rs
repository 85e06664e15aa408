//! Fixed-point helpers shared by the pricing code.
//!
//! Prices, ratios and fees use a 1e6 denominator (`PRICE_PRECISION`).
//! Token amounts are `U256` base units; protocol tokens carry 18 decimals.

use odra::casper_types::U256;

/// Denominator for prices, ratios and fees (1e6 = 1.0)
pub const PRICE_PRECISION: u64 = 1_000_000;

/// Global collateral ratio representing full collateralization
pub const COLLATERAL_RATIO_MAX: u64 = 1_000_000;

/// Decimals of ARTH, ARTHX and MAHA
pub const TOKEN_DECIMALS: u8 = 18;

pub fn precision() -> U256 {
    U256::from(PRICE_PRECISION)
}

/// `amount × (1 − fee)`, fee in parts-per-million
pub fn apply_fee(amount: U256, fee: u64) -> U256 {
    let keep = PRICE_PRECISION.saturating_sub(fee);
    amount * U256::from(keep) / precision()
}

/// `amount × fee`, fee in parts-per-million
pub fn fee_of(amount: U256, fee: u64) -> U256 {
    amount * U256::from(fee) / precision()
}

/// `amount × ratio`, ratio in parts-per-million
pub fn mul_ratio(amount: U256, ratio: u64) -> U256 {
    amount * U256::from(ratio) / precision()
}

/// Value of an 18-decimal amount at a 1e6-precision price
pub fn value_of(amount_d18: U256, price: U256) -> U256 {
    amount_d18 * price / precision()
}

/// Inverse of [`value_of`]: the amount worth `value` at `price`
pub fn amount_for_value(value: U256, price: U256) -> U256 {
    if price.is_zero() {
        return U256::zero();
    }
    value * precision() / price
}

/// Number of decimals a collateral token is short of 18
pub fn missing_decimals(decimals: u8) -> u8 {
    TOKEN_DECIMALS.saturating_sub(decimals)
}

fn decimal_factor(missing: u8) -> U256 {
    U256::from(10u64).pow(U256::from(missing))
}

/// Scale collateral base units up to 18 decimals
pub fn to_d18(amount: U256, missing: u8) -> U256 {
    amount * decimal_factor(missing)
}

/// Scale an 18-decimal amount down to collateral base units (rounds down)
pub fn from_d18(amount_d18: U256, missing: u8) -> U256 {
    amount_d18 / decimal_factor(missing)
}

/// Normalise a spot feed answer to 1e6 precision
pub fn normalize_price(price: U256, decimals: u8) -> U256 {
    price * precision() / decimal_factor(decimals)
}

/// `numerator / denominator` as parts-per-million, capped at 100%
pub fn ratio_of(numerator: U256, denominator: U256) -> u64 {
    if denominator.is_zero() {
        return PRICE_PRECISION;
    }
    let ratio = numerator * precision() / denominator;
    if ratio >= precision() {
        PRICE_PRECISION
    } else {
        ratio.as_u64()
    }
}
