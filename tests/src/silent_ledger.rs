//! Collateral ledger that reports failed transfers through its return value
//! instead of reverting, and never moves any balance.

use odra::casper_types::U256;
use odra::prelude::*;

#[odra::module]
pub struct SilentLedger {
    decimals: Var<u8>,
}

#[odra::module]
impl SilentLedger {
    pub fn init(&mut self, decimals: u8) {
        self.decimals.set(decimals);
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(18)
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        U256::zero()
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        false
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        false
    }
}
