use odra::casper_types::U256;
use pretty_assertions::assert_eq;

use arth_protocol_contracts::access_control::{ROLE_BUYBACK_PAUSER, ROLE_RECOLLATERALIZE_PAUSER};
use arth_protocol_contracts::errors::ArthError;

use crate::fixture::{e18, milli, setup, Protocol};

/// ARTH supply with no collateral behind it: mint algorithmically, then go back to 100%
fn uncollateralized(arthx_in: u64) -> Protocol {
    let mut p = setup();
    p.set_ratio(0);
    p.as_user();
    p.pool.mint_algorithmic_arth(e18(arthx_in), U256::zero());
    p.set_ratio(1_000_000);
    p
}

#[test]
fn recollateralize_at_zero_fulfillment_earns_max_bonus() {
    let mut p = uncollateralized(10);
    let pool = p.pool_address();
    assert!(p.controller.get_global_collateral_value().is_zero());
    let arthx_before = p.arthx.balance_of(p.user);

    p.as_user();
    p.collateral.approve(pool, e18(1));
    let arthx_out = p.pool.recollateralize_arth(e18(1), U256::zero());

    // 1 × (1 + 50%) × (1 − 0.1%)
    assert_eq!(arthx_out, U256::from(1_498_500_000_000_000_000u64));
    assert_eq!(p.arthx.balance_of(p.user), arthx_before + arthx_out);
    assert_eq!(p.pool.get_collateral_balance(), e18(1));
    assert!(p.env.emitted(&p.pool, "Recollateralized"));
}

#[test]
fn recollateralize_takes_only_what_is_needed() {
    let mut p = uncollateralized(10);
    let pool = p.pool_address();
    let target = p.pool.get_target_collateral_value();
    assert_eq!(target, milli(9_990));

    p.as_user();
    p.collateral.approve(pool, e18(50));
    p.pool.recollateralize_arth(e18(50), U256::zero());

    assert_eq!(p.pool.get_collateral_balance(), milli(9_990));
    assert_eq!(p.collateral.balance_of(p.user), e18(100) - milli(9_990));

    assert_eq!(
        p.pool.try_recollateralize_arth(e18(1), U256::zero()),
        Err(ArthError::RecollateralizeNotNeeded.into())
    );
}

#[test]
fn recollateralize_slippage() {
    let mut p = uncollateralized(10);
    let pool = p.pool_address();

    p.as_user();
    p.collateral.approve(pool, e18(1));
    assert_eq!(
        p.pool.try_recollateralize_arth(e18(1), e18(2)),
        Err(ArthError::ArthxSlippage.into())
    );
}

#[test]
fn paused_recollateralize_changes_nothing() {
    let mut p = uncollateralized(10);
    let pool = p.pool_address();
    let pauser = p.pauser;
    p.as_admin();
    p.access.grant_role(ROLE_RECOLLATERALIZE_PAUSER, pauser);
    p.env.set_caller(pauser);
    p.controller.toggle_recollateralize();

    p.as_user();
    p.collateral.approve(pool, e18(1));
    let arthx_before = p.arthx.balance_of(p.user);
    assert_eq!(
        p.pool.try_recollateralize_arth(e18(1), U256::zero()),
        Err(ArthError::Paused.into())
    );
    assert_eq!(p.arthx.balance_of(p.user), arthx_before);
    assert_eq!(p.collateral.balance_of(p.user), e18(100));
    assert!(p.pool.get_collateral_balance().is_zero());
}

#[test]
fn bonus_buffer_tops_up_the_curve() {
    let mut p = uncollateralized(10);
    let pool = p.pool_address();
    p.as_admin();
    p.pool.set_bonus_rate_buffer(100_000);
    p.controller.set_recollat_fee(0);

    p.as_user();
    p.collateral.approve(pool, e18(1));
    let arthx_out = p.pool.recollateralize_arth(e18(1), U256::zero());
    assert_eq!(arthx_out, milli(1_600));
}

#[test]
fn buyback_pays_out_excess_collateral() {
    let mut p = setup();
    p.user_mint_1t1(e18(10));
    p.set_ratio(500_000);
    assert!(!p.pool.get_available_excess_collateral().is_zero());
    let arthx_supply = p.arthx.total_supply();
    let collateral_before = p.collateral.balance_of(p.user);

    p.as_user();
    let collateral_out = p.pool.buy_back_arthx(e18(1), milli(999));

    assert_eq!(collateral_out, milli(999));
    assert_eq!(p.arthx.balance_of(p.user), e18(99));
    assert_eq!(p.arthx.total_supply(), arthx_supply - e18(1));
    assert_eq!(p.collateral.balance_of(p.user), collateral_before + milli(999));
    assert!(p.env.emitted(&p.pool, "BoughtBack"));
}

#[test]
fn buyback_without_excess_fails() {
    let mut p = setup();
    p.user_mint_1t1(e18(10));

    p.as_user();
    assert_eq!(
        p.pool.try_buy_back_arthx(e18(1), U256::zero()),
        Err(ArthError::InsufficientCollateral.into())
    );
    assert_eq!(p.arthx.balance_of(p.user), e18(100));
}

#[test]
fn buyback_pause_and_slippage() {
    let mut p = setup();
    p.user_mint_1t1(e18(10));
    p.set_ratio(500_000);

    p.as_user();
    assert_eq!(
        p.pool.try_buy_back_arthx(e18(1), e18(1)),
        Err(ArthError::CollateralSlippage.into())
    );

    p.as_admin();
    let pauser = p.pauser;
    p.access.grant_role(ROLE_BUYBACK_PAUSER, pauser);
    p.env.set_caller(pauser);
    p.controller.toggle_buyback();

    p.as_user();
    assert_eq!(
        p.pool.try_buy_back_arthx(e18(1), U256::zero()),
        Err(ArthError::Paused.into())
    );
}
