use odra::casper_types::U256;
use odra::host::Deployer;
use odra::prelude::*;
use pretty_assertions::assert_eq;

use arth_protocol_contracts::access_control::ROLE_MINT_PAUSER;
use arth_protocol_contracts::curve::CurveParams;
use arth_protocol_contracts::errors::ArthError;
use arth_protocol_contracts::ledger_token::{LedgerToken, LedgerTokenInitArgs};
use arth_protocol_contracts::pool::{ArthPool, ArthPoolInitArgs};

use crate::fixture::{e18, milli, setup};
use crate::silent_ledger::{SilentLedger, SilentLedgerInitArgs};

#[test]
fn mint_1t1_at_full_ratio() {
    let mut p = setup();

    let arth_out = p.user_mint_1t1(e18(1));

    assert_eq!(arth_out, milli(999));
    assert_eq!(p.arth.balance_of(p.user), milli(999));
    assert_eq!(p.collateral.balance_of(p.user), e18(99));
    assert_eq!(p.pool.get_collateral_balance(), e18(1));
    assert!(p.env.emitted(&p.pool, "Minted"));
}

#[test]
fn mint_1t1_rejects_fractional_ratio_and_slippage() {
    let mut p = setup();
    let pool = p.pool_address();

    p.as_user();
    p.collateral.approve(pool, e18(1));
    assert_eq!(
        p.pool.try_mint_1t1_arth(e18(1), e18(1)),
        Err(ArthError::ArthSlippage.into())
    );

    p.set_ratio(900_000);
    p.as_user();
    assert_eq!(
        p.pool.try_mint_1t1_arth(e18(1), U256::zero()),
        Err(ArthError::InvalidRatio.into())
    );
    assert_eq!(p.collateral.balance_of(p.user), e18(100));
    assert!(p.arth.balance_of(p.user).is_zero());
}

#[test]
fn mint_algorithmic_burns_arthx() {
    let mut p = setup();
    p.set_ratio(0);
    let supply_before = p.arthx.total_supply();

    p.as_user();
    let arth_out = p.pool.mint_algorithmic_arth(e18(1), milli(999));

    assert_eq!(arth_out, milli(999));
    assert_eq!(p.arthx.balance_of(p.user), e18(99));
    assert_eq!(p.arthx.total_supply(), supply_before - e18(1));
    assert_eq!(p.arth.balance_of(p.user), milli(999));
}

#[test]
fn mint_fractional_takes_both_legs_as_given() {
    let mut p = setup();
    p.set_ratio(500_000);
    let pool = p.pool_address();

    p.as_user();
    p.collateral.approve(pool, e18(1));
    // Disproportionate legs are accepted
    let arth_out = p.pool.mint_fractional_arth(e18(1), e18(3), U256::zero());

    assert_eq!(arth_out, milli(3_996));
    assert_eq!(p.arthx.balance_of(p.user), e18(97));
    assert_eq!(p.pool.get_collateral_balance(), e18(1));

    p.set_ratio(1_000_000);
    p.as_user();
    assert_eq!(
        p.pool.try_mint_fractional_arth(e18(1), e18(1), U256::zero()),
        Err(ArthError::InvalidRatio.into())
    );
}

#[test]
fn oversized_fractional_legs_hit_the_ceiling() {
    let mut p = setup();
    p.set_ratio(500_000);

    p.as_user();
    assert_eq!(
        p.pool.try_mint_fractional_arth(U256::MAX, U256::MAX, U256::zero()),
        Err(ArthError::CeilingExceeded.into())
    );
    assert_eq!(
        p.pool.try_mint_1t1_arth(U256::MAX, U256::zero()),
        Err(ArthError::CeilingExceeded.into())
    );
    assert!(p.arth.total_supply().is_zero());
    assert_eq!(p.arthx.balance_of(p.user), e18(100));
}

#[test]
fn unified_mint_splits_by_ratio_and_routes_fee() {
    let mut p = setup();
    p.set_ratio(800_000);
    let pool = p.pool_address();

    p.as_user();
    p.collateral.approve(pool, e18(4));
    let result = p.pool.mint(e18(4), e18(1), U256::zero());

    // 4 collateral backs 5 ARTH at 80%; the other 1 is paid in ARTHX
    assert_eq!(result.arthx_used, e18(1));
    assert_eq!(result.arth_out, milli(4_995));
    assert_eq!(p.arth.balance_of(p.user), milli(4_995));
    assert_eq!(p.arth.balance_of(p.collector), milli(5));
    assert_eq!(p.arthx.balance_of(p.user), e18(99));
}

#[test]
fn unified_mint_reports_each_slippage_leg() {
    let mut p = setup();
    p.set_ratio(800_000);
    let pool = p.pool_address();

    p.as_user();
    p.collateral.approve(pool, e18(4));
    assert_eq!(
        p.pool.try_mint(e18(4), milli(999), U256::zero()),
        Err(ArthError::ArthxSlippage.into())
    );
    assert_eq!(
        p.pool.try_mint(e18(4), e18(1), e18(5)),
        Err(ArthError::ArthSlippage.into())
    );
}

#[test]
fn unified_mint_rejects_zero_ratio() {
    let mut p = setup();
    p.set_ratio(0);
    let pool = p.pool_address();

    p.as_user();
    p.collateral.approve(pool, e18(1));
    assert_eq!(
        p.pool.try_mint(e18(1), e18(1), U256::zero()),
        Err(ArthError::InvalidRatio.into())
    );
}

#[test]
fn ceiling_is_never_exceeded() {
    let mut p = setup();
    p.as_admin();
    p.pool.set_ceiling(e18(5));

    p.user_mint_1t1(e18(3));
    assert!(p.pool.get_collateral_balance() <= p.pool.get_ceiling());

    let pool = p.pool_address();
    p.as_user();
    p.collateral.approve(pool, e18(3));
    assert_eq!(
        p.pool.try_mint_1t1_arth(e18(3), U256::zero()),
        Err(ArthError::CeilingExceeded.into())
    );
    assert_eq!(p.pool.get_collateral_balance(), e18(3));

    p.user_mint_1t1(e18(2));
    assert_eq!(p.pool.get_collateral_balance(), e18(5));
    assert!(p.pool.get_collateral_balance() <= p.pool.get_ceiling());
}

#[test]
fn paused_minting_is_rejected() {
    let mut p = setup();
    p.as_admin();
    let pauser = p.pauser;
    p.access.grant_role(ROLE_MINT_PAUSER, pauser);

    p.env.set_caller(pauser);
    p.controller.toggle_minting();
    assert!(p.controller.get_pauses().mint_paused);

    let pool = p.pool_address();
    p.as_user();
    p.collateral.approve(pool, e18(1));
    assert_eq!(
        p.pool.try_mint_1t1_arth(e18(1), U256::zero()),
        Err(ArthError::Paused.into())
    );

    p.env.set_caller(pauser);
    p.controller.toggle_minting();
    assert_eq!(p.user_mint_1t1(e18(1)), milli(999));
}

#[test]
fn six_decimal_collateral_is_scaled() {
    let mut p = setup();
    p.as_admin();

    let mut usdc = LedgerToken::deploy(
        &p.env,
        LedgerTokenInitArgs {
            name: "USD Coin".to_string(),
            symbol: "USDC".to_string(),
            decimals: 6,
        },
    );
    let feed = crate::fixture::deploy_feed(&p.env);
    let mut usdc_pool = ArthPool::deploy(
        &p.env,
        ArthPoolInitArgs {
            access_control: p.access.address().clone(),
            controller: p.controller.address().clone(),
            collateral: usdc.address().clone(),
            arth: p.arth.address().clone(),
            arthx: p.arthx.address().clone(),
            maha: p.maha.address().clone(),
            collateral_feed: feed.address().clone(),
            collateral_decimals: 6,
            ceiling: U256::from(1_000_000_000_000u64),
            redemption_delay: 1,
            curve: CurveParams::default(),
        },
    );
    let usdc_pool_address = usdc_pool.address().clone();
    p.controller.add_pool(usdc_pool_address);
    p.arth.add_minter(usdc_pool_address);
    usdc.add_minter(p.admin);
    usdc.mint(p.user, U256::from(5_000_000u64));

    p.as_user();
    usdc.approve(usdc_pool_address, U256::from(1_000_000u64));
    let arth_out = usdc_pool.mint_1t1_arth(U256::from(1_000_000u64), U256::zero());
    assert_eq!(arth_out, milli(999));
    assert_eq!(usdc_pool.get_collateral_gmu_balance(), e18(1));

    // Both pools count toward the global value
    p.user_mint_1t1(e18(2));
    assert_eq!(p.controller.get_global_collateral_value(), e18(3));
}

#[test]
fn refused_collateral_transfer_reverts_mint() {
    let mut p = setup();
    p.as_admin();

    let ledger = SilentLedger::deploy(&p.env, SilentLedgerInitArgs { decimals: 18 });
    let mut silent_pool = ArthPool::deploy(
        &p.env,
        ArthPoolInitArgs {
            access_control: p.access.address().clone(),
            controller: p.controller.address().clone(),
            collateral: ledger.address().clone(),
            arth: p.arth.address().clone(),
            arthx: p.arthx.address().clone(),
            maha: p.maha.address().clone(),
            collateral_feed: p.collateral_feed.address().clone(),
            collateral_decimals: 18,
            ceiling: e18(1_000),
            redemption_delay: 1,
            curve: CurveParams::default(),
        },
    );
    let silent_pool_address = silent_pool.address().clone();
    p.controller.add_pool(silent_pool_address);
    p.arth.add_minter(silent_pool_address);

    p.as_user();
    assert_eq!(
        silent_pool.try_mint_1t1_arth(e18(50), U256::zero()),
        Err(ArthError::TransferFailed.into())
    );
    assert!(p.arth.balance_of(p.user).is_zero());
    assert!(p.arth.total_supply().is_zero());
    assert!(silent_pool.get_collateral_balance().is_zero());
}
