//! Access Control Contract
//!
//! Role registry shared by the controller and every pool.
//!
//! Role hierarchy:
//! - DEFAULT_ADMIN administers every role and passes every admin check
//! - TIMELOCK may call the controller and pool parameter setters
//! - AMO may borrow and repay pool collateral
//! - each *_PAUSER may toggle its own pause flag

use odra::prelude::*;
use crate::errors::ArthError;
use crate::events::{RoleGranted, RoleRevoked};

pub const ROLE_DEFAULT_ADMIN: u8 = 0;
pub const ROLE_AMO: u8 = 1;
pub const ROLE_COLLATERAL_RATIO_PAUSER: u8 = 2;
pub const ROLE_MINT_PAUSER: u8 = 3;
pub const ROLE_REDEEM_PAUSER: u8 = 4;
pub const ROLE_RECOLLATERALIZE_PAUSER: u8 = 5;
pub const ROLE_BUYBACK_PAUSER: u8 = 6;
pub const ROLE_TIMELOCK: u8 = 7;

const ROLE_COUNT: u8 = 8;

/// Role registry with per-role admin roles and member counts
#[odra::module(events = [RoleGranted, RoleRevoked])]
pub struct AccessControl {
    members: Mapping<(u8, Address), bool>,
    /// role -> role allowed to grant and revoke it
    admin_of: Mapping<u8, u8>,
    member_counts: Mapping<u8, u32>,
}

#[odra::module]
impl AccessControl {
    pub fn init(&mut self, initial_admin: Address) {
        for role_id in 0..ROLE_COUNT {
            self.admin_of.set(&role_id, ROLE_DEFAULT_ADMIN);
        }
        self.add_member(ROLE_DEFAULT_ADMIN, initial_admin);
    }

    pub fn has_role(&self, role_id: u8, account: Address) -> bool {
        self.members.get(&(role_id, account)).unwrap_or(false)
    }

    pub fn get_role_admin(&self, role_id: u8) -> u8 {
        self.admin_of.get(&role_id).unwrap_or(ROLE_DEFAULT_ADMIN)
    }

    pub fn get_role_member_count(&self, role_id: u8) -> u32 {
        self.member_counts.get(&role_id).unwrap_or(0)
    }

    /// Grant `role_id` to `account`; no-op if already held
    pub fn grant_role(&mut self, role_id: u8, account: Address) {
        let sender = self.only_admin_of(role_id);
        if self.add_member(role_id, account) {
            self.env().emit_event(RoleGranted { role_id, account, sender });
        }
    }

    /// Revoke `role_id` from `account`; no-op if not held
    pub fn revoke_role(&mut self, role_id: u8, account: Address) {
        let sender = self.only_admin_of(role_id);
        if self.remove_member(role_id, account) {
            self.env().emit_event(RoleRevoked { role_id, account, sender });
        }
    }

    pub fn renounce_role(&mut self, role_id: u8) {
        let caller = self.env().caller();
        if self.remove_member(role_id, caller) {
            self.env().emit_event(RoleRevoked { role_id, account: caller, sender: caller });
        }
    }

    /// Reassign which role administers `role_id` (default admin only)
    pub fn set_role_admin(&mut self, role_id: u8, admin_role_id: u8) {
        self.only_admin_of(ROLE_DEFAULT_ADMIN);
        self.admin_of.set(&role_id, admin_role_id);
    }

    fn only_admin_of(&self, role_id: u8) -> Address {
        let caller = self.env().caller();
        if !self.has_role(self.get_role_admin(role_id), caller) {
            self.env().revert(ArthError::Forbidden);
        }
        caller
    }

    /// Returns false if the account already held the role
    fn add_member(&mut self, role_id: u8, account: Address) -> bool {
        if self.has_role(role_id, account) {
            return false;
        }
        self.members.set(&(role_id, account), true);
        self.member_counts.set(&role_id, self.get_role_member_count(role_id) + 1);
        true
    }

    /// Returns false if the account did not hold the role.
    /// The last default admin can never be removed.
    fn remove_member(&mut self, role_id: u8, account: Address) -> bool {
        if !self.has_role(role_id, account) {
            return false;
        }
        let count = self.get_role_member_count(role_id);
        if role_id == ROLE_DEFAULT_ADMIN && count <= 1 {
            self.env().revert(ArthError::InvalidConfig);
        }
        self.members.set(&(role_id, account), false);
        self.member_counts.set(&role_id, count.saturating_sub(1));
        true
    }
}
