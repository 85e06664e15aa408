//! Stability fee schedule.
//!
//! The stability fee is charged on ARTH redemptions and paid in MAHA.
//! During the genesis window the rate decays linearly from the bootstrap
//! rate toward the steady rate; after the window it stays flat.

use odra::casper_types::U256;
use crate::math::{amount_for_value, precision, PRICE_PRECISION};
use crate::types::{StabilityFeeConfig, HOUR};

/// One week of block time
pub const DEFAULT_GENESIS_WINDOW: u64 = 7 * 24 * HOUR;

/// Rate in effect at `now`, in parts-per-million
pub fn current_rate(config: &StabilityFeeConfig, now: u64) -> u64 {
    let elapsed = now.saturating_sub(config.genesis_start);
    if config.genesis_window == 0 || elapsed >= config.genesis_window {
        return config.steady_rate;
    }

    let start = config.bootstrap_rate as u128;
    let end = config.steady_rate as u128;
    let window = config.genesis_window as u128;
    let elapsed = elapsed as u128;

    // interpolate in either direction
    let rate = if start >= end {
        start - (start - end) * elapsed / window
    } else {
        start + (end - start) * elapsed / window
    };
    rate as u64
}

/// MAHA owed for redeeming `arth_amount` at `rate`.
///
/// The fee is valued in GMU through the ARTH price and paid in MAHA at the
/// MAHA price. A zero MAHA price yields zero.
pub fn fee_in_maha(arth_amount: U256, rate: u64, arth_price: U256, maha_price: U256) -> U256 {
    if rate == 0 || arth_amount.is_zero() {
        return U256::zero();
    }
    let fee_in_arth = arth_amount * U256::from(rate) / precision();
    let fee_value = fee_in_arth * arth_price / precision();
    amount_for_value(fee_value, maha_price)
}

/// Rates above 100% are rejected by the setters
pub fn is_valid_rate(rate: u64) -> bool {
    rate < PRICE_PRECISION
}
