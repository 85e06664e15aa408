//! External collaborator interfaces.
//!
//! The engine only talks to ledgers, price feeds and the role registry
//! through these traits, so any contract exposing the same entry points can
//! be bound at deploy time.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::types::GlobalState;

/// Fungible ledger for ARTH, ARTHX, MAHA and collateral tokens
#[odra::external_contract]
pub trait Erc20Ledger {
    fn decimals(&self) -> u8;
    fn total_supply(&self) -> U256;
    fn balance_of(&self, account: Address) -> U256;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn mint(&mut self, to: Address, amount: U256);
    fn burn_from(&mut self, from: Address, amount: U256);
    fn protocol_transfer(&mut self, from: Address, to: Address, amount: U256);
}

/// Time-weighted pair oracle
#[odra::external_contract]
pub trait TwapOracle {
    /// Amount of the counter asset worth `amount_in` of `token`
    fn consult(&self, token: Address, amount_in: U256) -> U256;
}

/// Spot price reporter
#[odra::external_contract]
pub trait SpotPriceFeed {
    fn latest_price(&self) -> U256;
    fn decimals(&self) -> u8;
}

/// Role membership checks
#[odra::external_contract]
pub trait RoleRegistry {
    fn has_role(&self, role_id: u8, account: Address) -> bool;
}

/// What the controller needs from each registered pool
#[odra::external_contract]
pub trait CollateralPool {
    fn get_collateral_gmu_balance(&self) -> U256;
}

/// What each pool needs from the controller
#[odra::external_contract]
pub trait Controller {
    fn get_global_state(&self) -> GlobalState;
    fn get_arth_price(&self) -> U256;
    fn get_arthx_price(&self) -> U256;
    fn get_maha_price(&self) -> U256;
    fn get_global_collateral_value(&self) -> U256;
    fn get_global_collateral_value_excluding(&self, pool: Address) -> U256;
    fn get_fee_collector(&self) -> Address;
}
