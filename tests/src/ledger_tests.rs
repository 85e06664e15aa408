use pretty_assertions::assert_eq;

use arth_protocol_contracts::errors::ArthError;

use crate::fixture::{e18, setup};

#[test]
fn transfer_from_spends_allowance() {
    let mut p = setup();
    let amo = p.amo;
    let collector = p.collector;

    p.as_user();
    p.maha.approve(amo, e18(3));
    assert!(p.env.emitted(&p.maha, "Approval"));

    p.env.set_caller(amo);
    p.maha.transfer_from(p.user, collector, e18(2));
    assert_eq!(p.maha.balance_of(collector), e18(2));
    assert_eq!(p.maha.allowance(p.user, amo), e18(1));
    assert!(p.env.emitted(&p.maha, "Transfer"));

    assert_eq!(
        p.maha.try_transfer_from(p.user, collector, e18(2)),
        Err(ArthError::InsufficientAllowance.into())
    );
}

#[test]
fn minting_is_restricted_to_minters() {
    let mut p = setup();
    let user = p.user;
    let supply = p.arthx.total_supply();

    p.as_user();
    assert_eq!(p.arthx.try_mint(user, e18(1)), Err(ArthError::Forbidden.into()));
    assert_eq!(p.arthx.try_burn_from(user, e18(1)), Err(ArthError::Forbidden.into()));
    assert_eq!(p.arthx.try_add_minter(user), Err(ArthError::Forbidden.into()));
    assert_eq!(p.arthx.total_supply(), supply);

    p.arthx.burn(e18(1));
    assert_eq!(p.arthx.total_supply(), supply - e18(1));
    assert!(p.env.emitted(&p.arthx, "Burn"));
}

#[test]
fn transfer_beyond_balance_fails() {
    let mut p = setup();
    let amo = p.amo;

    p.as_user();
    assert_eq!(
        p.maha.try_transfer(amo, e18(101)),
        Err(ArthError::InsufficientBalance.into())
    );
    assert!(p.maha.balance_of(amo).is_zero());
    assert_eq!(p.maha.decimals(), 18);
    assert_eq!(p.maha.symbol(), "MAHA".to_string());
}
