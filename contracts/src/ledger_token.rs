//! Ledger Token Contract
//!
//! CEP-18 style fungible token used for ARTH, ARTHX, MAHA and collateral.
//! `mint`, `burn_from` and `protocol_transfer` are reserved to minters,
//! which the deployer manages.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::ArthError;
use crate::events::{Approval, Burn, Mint, Transfer};

#[odra::module(events = [Transfer, Approval, Mint, Burn])]
pub struct LedgerToken {
    name: Var<String>,
    symbol: Var<String>,
    decimals: Var<u8>,
    supply: Var<U256>,
    balances: Mapping<Address, U256>,
    /// (owner, spender) -> remaining allowance
    allowances: Mapping<(Address, Address), U256>,
    owner: Var<Address>,
    minters: Mapping<Address, bool>,
}

#[odra::module]
impl LedgerToken {
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.supply.set(U256::zero());
        self.owner.set(self.env().caller());
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(18)
    }

    pub fn total_supply(&self) -> U256 {
        self.supply.get_or_default()
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get_or_default(&account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get_or_default(&(owner, spender))
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.move_balance(sender, recipient, amount);
        true
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        self.env().emit_event(Approval { owner, spender, amount });
        true
    }

    /// Spend the caller's allowance over `owner`'s balance
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();
        let remaining = match self.allowance(owner, spender).checked_sub(amount) {
            Some(remaining) => remaining,
            None => self.env().revert(ArthError::InsufficientAllowance),
        };
        self.allowances.set(&(owner, spender), remaining);
        self.move_balance(owner, recipient, amount);
        true
    }

    pub fn burn(&mut self, amount: U256) {
        let caller = self.env().caller();
        self.destroy(caller, amount);
    }

    // ========== Minter only ==========

    pub fn mint(&mut self, to: Address, amount: U256) {
        self.only_minter();
        self.credit(to, amount);
        self.supply.set(self.total_supply() + amount);
        self.env().emit_event(Mint { recipient: to, amount });
    }

    /// Burn without an allowance; pools use it to take ARTH, ARTHX and MAHA
    pub fn burn_from(&mut self, from: Address, amount: U256) {
        self.only_minter();
        self.destroy(from, amount);
    }

    /// Move tokens between accounts without an allowance
    pub fn protocol_transfer(&mut self, from: Address, to: Address, amount: U256) {
        self.only_minter();
        self.move_balance(from, to, amount);
    }

    // ========== Owner only ==========

    pub fn add_minter(&mut self, minter: Address) {
        self.only_owner();
        self.minters.set(&minter, true);
    }

    pub fn remove_minter(&mut self, minter: Address) {
        self.only_owner();
        self.minters.set(&minter, false);
    }

    pub fn is_minter(&self, account: Address) -> bool {
        self.minters.get_or_default(&account)
    }

    pub fn get_owner(&self) -> Option<Address> {
        self.owner.get()
    }

    fn move_balance(&mut self, from: Address, to: Address, amount: U256) {
        self.debit(from, amount);
        self.credit(to, amount);
        self.env().emit_event(Transfer { from, to, amount });
    }

    fn destroy(&mut self, from: Address, amount: U256) {
        self.debit(from, amount);
        self.supply.set(self.total_supply().saturating_sub(amount));
        self.env().emit_event(Burn { owner: from, amount });
    }

    fn debit(&mut self, account: Address, amount: U256) {
        match self.balance_of(account).checked_sub(amount) {
            Some(rest) => self.balances.set(&account, rest),
            None => self.env().revert(ArthError::InsufficientBalance),
        }
    }

    fn credit(&mut self, account: Address, amount: U256) {
        self.balances.set(&account, self.balance_of(account) + amount);
    }

    fn only_minter(&self) {
        if !self.is_minter(self.env().caller()) {
            self.env().revert(ArthError::Forbidden);
        }
    }

    fn only_owner(&self) {
        if self.owner.get() != Some(self.env().caller()) {
            self.env().revert(ArthError::Forbidden);
        }
    }
}
