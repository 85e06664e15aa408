//! Recollateralization reward curve.
//!
//! Maps the fulfillment ratio (current collateral value over target collateral
//! value) to the bonus paid on top of recollateralized collateral. The bonus
//! falls from `max_bonus` to `min_bonus` along a cubic smoothstep, so the
//! first units of recollateralization earn close to the maximum and the curve
//! flattens out as the target is approached.

use odra::prelude::*;
use crate::errors::{ArthError, ArthResult};
use crate::math::PRICE_PRECISION;

/// Curve parameters, all in parts-per-million
#[odra::odra_type]
#[derive(Copy)]
pub struct CurveParams {
    pub min_fulfillment: u64,
    pub max_fulfillment: u64,
    pub min_bonus: u64,
    pub max_bonus: u64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            min_fulfillment: 0,
            max_fulfillment: PRICE_PRECISION,
            min_bonus: 3_000,   // 0.3%
            max_bonus: 500_000, // 50%
        }
    }
}

impl CurveParams {
    pub fn validate(&self) -> ArthResult<()> {
        if self.min_fulfillment >= self.max_fulfillment
            || self.max_fulfillment > PRICE_PRECISION
            || self.min_bonus > self.max_bonus
        {
            return Err(ArthError::InvalidConfig);
        }
        Ok(())
    }

    /// Bonus for the given fulfillment ratio
    pub fn bonus(&self, fulfillment: u64) -> u64 {
        if fulfillment <= self.min_fulfillment {
            return self.max_bonus;
        }
        if fulfillment >= self.max_fulfillment {
            return self.min_bonus;
        }

        let p = PRICE_PRECISION as u128;
        let span = (self.max_fulfillment - self.min_fulfillment) as u128;
        let t = (fulfillment - self.min_fulfillment) as u128 * p / span;

        // smoothstep: t^2 (3 - 2t), kept in a single division so rounding stays monotone
        let eased = t * t * (3 * p - 2 * t) / (p * p);

        let range = (self.max_bonus - self.min_bonus) as u128;
        self.max_bonus - (range * eased / p) as u64
    }
}
