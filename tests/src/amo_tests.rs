use pretty_assertions::assert_eq;

use arth_protocol_contracts::access_control::ROLE_AMO;
use arth_protocol_contracts::errors::ArthError;

use crate::fixture::{e18, setup};

#[test]
fn borrow_requires_amo_role() {
    let mut p = setup();
    p.user_mint_1t1(e18(10));

    p.env.set_caller(p.amo);
    assert_eq!(p.pool.try_borrow(e18(1)), Err(ArthError::Forbidden.into()));
    assert!(p.collateral.balance_of(p.amo).is_zero());
    assert!(p.pool.get_borrowed(p.amo).is_zero());
}

#[test]
fn borrow_and_repay_round_trip() {
    let mut p = setup();
    p.user_mint_1t1(e18(10));
    let pool = p.pool_address();
    let amo = p.amo;

    p.as_admin();
    p.access.grant_role(ROLE_AMO, amo);

    p.env.set_caller(amo);
    p.pool.borrow(e18(1));
    assert_eq!(p.collateral.balance_of(amo), e18(1));
    assert_eq!(p.collateral.balance_of(pool), e18(9));
    assert_eq!(p.pool.get_borrowed(amo), e18(1));
    assert!(p.env.emitted(&p.pool, "Borrow"));

    // Lent collateral still backs ARTH
    assert_eq!(p.pool.get_collateral_balance(), e18(10));
    assert_eq!(p.pool.get_collateral_gmu_balance(), e18(10));

    p.collateral.approve(pool, e18(1));
    p.pool.repay(e18(1));
    assert!(p.collateral.balance_of(amo).is_zero());
    assert_eq!(p.collateral.balance_of(pool), e18(10));
    assert!(p.pool.get_borrowed(amo).is_zero());
    assert!(p.pool.get_total_borrowed().is_zero());
    assert!(p.env.emitted(&p.pool, "Repay"));
}

#[test]
fn repay_cannot_exceed_borrowed() {
    let mut p = setup();
    p.user_mint_1t1(e18(10));
    let pool = p.pool_address();
    let amo = p.amo;

    p.as_admin();
    p.access.grant_role(ROLE_AMO, amo);
    p.collateral.mint(amo, e18(5));

    p.env.set_caller(amo);
    p.pool.borrow(e18(1));
    p.collateral.approve(pool, e18(2));
    assert_eq!(p.pool.try_repay(e18(2)), Err(ArthError::RepayExceedsBorrowed.into()));
    assert_eq!(p.pool.get_borrowed(amo), e18(1));
}

#[test]
fn repay_without_approval_reverts_whole_call() {
    let mut p = setup();
    p.user_mint_1t1(e18(10));
    let amo = p.amo;

    p.as_admin();
    p.access.grant_role(ROLE_AMO, amo);

    p.env.set_caller(amo);
    p.pool.borrow(e18(1));
    assert_eq!(p.pool.try_repay(e18(1)), Err(ArthError::InsufficientAllowance.into()));
    assert_eq!(p.pool.get_borrowed(amo), e18(1));
}

#[test]
fn borrow_cannot_take_reserved_collateral() {
    let mut p = setup();
    p.user_mint_1t1(e18(2));
    let amo = p.amo;

    p.as_user();
    p.pool.redeem_1t1_arth(e18(1), odra::casper_types::U256::zero());

    p.as_admin();
    p.access.grant_role(ROLE_AMO, amo);
    p.env.set_caller(amo);
    assert_eq!(p.pool.try_borrow(e18(2)), Err(ArthError::InsufficientCollateral.into()));
}

#[test]
fn revoked_amo_is_forbidden() {
    let mut p = setup();
    p.user_mint_1t1(e18(10));
    let amo = p.amo;

    p.as_admin();
    p.access.grant_role(ROLE_AMO, amo);
    p.access.revoke_role(ROLE_AMO, amo);
    assert!(p.env.emitted(&p.access, "RoleRevoked"));

    p.env.set_caller(amo);
    assert_eq!(p.pool.try_borrow(e18(1)), Err(ArthError::Forbidden.into()));
}
