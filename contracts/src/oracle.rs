//! Keeper-updated price sources.
//!
//! `ManualTwapOracle` answers `consult` for a token/reference pair and
//! `ManualPriceFeed` reports a spot price with its own decimals. Both store
//! whatever their keeper last pushed; averaging and feed aggregation happen
//! off-chain.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::ArthError;
use crate::math::{amount_for_value, precision};

/// Pair oracle quoting `token` in units of `reference` (1e6 precision)
#[odra::module]
pub struct ManualTwapOracle {
    token: Var<Address>,
    reference: Var<Address>,
    /// Reference units per token, 1e6 = 1.0
    price: Var<U256>,
    last_update: Var<u64>,
    keeper: Var<Address>,
}

#[odra::module]
impl ManualTwapOracle {
    pub fn init(&mut self, token: Address, reference: Address, initial_price: U256) {
        self.token.set(token);
        self.reference.set(reference);
        self.price.set(initial_price);
        self.last_update.set(self.env().get_block_time());
        self.keeper.set(self.env().caller());
    }

    /// Amount of the other side of the pair worth `amount_in` of `token`.
    ///
    /// Quoting a token outside the pair returns zero.
    pub fn consult(&self, token: Address, amount_in: U256) -> U256 {
        let price = self.get_price();
        if Some(token) == self.token.get() {
            amount_in * price / precision()
        } else if Some(token) == self.reference.get() {
            amount_for_value(amount_in, price)
        } else {
            U256::zero()
        }
    }

    pub fn set_price(&mut self, price: U256) {
        self.require_keeper();
        if price.is_zero() {
            self.env().revert(ArthError::InvalidPrice);
        }
        self.price.set(price);
        self.last_update.set(self.env().get_block_time());
    }

    pub fn set_keeper(&mut self, keeper: Address) {
        self.require_keeper();
        self.keeper.set(keeper);
    }

    pub fn get_price(&self) -> U256 {
        self.price.get().unwrap_or(U256::zero())
    }

    pub fn get_last_update(&self) -> u64 {
        self.last_update.get().unwrap_or(0)
    }

    fn require_keeper(&self) {
        if self.keeper.get() != Some(self.env().caller()) {
            self.env().revert(ArthError::Forbidden);
        }
    }
}

/// Spot feed reporting a price with its own number of decimals
#[odra::module]
pub struct ManualPriceFeed {
    price: Var<U256>,
    decimals: Var<u8>,
    keeper: Var<Address>,
}

#[odra::module]
impl ManualPriceFeed {
    pub fn init(&mut self, initial_price: U256, decimals: u8) {
        self.price.set(initial_price);
        self.decimals.set(decimals);
        self.keeper.set(self.env().caller());
    }

    pub fn latest_price(&self) -> U256 {
        self.price.get().unwrap_or(U256::zero())
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(8)
    }

    pub fn set_price(&mut self, price: U256) {
        if self.keeper.get() != Some(self.env().caller()) {
            self.env().revert(ArthError::Forbidden);
        }
        self.price.set(price);
    }
}
