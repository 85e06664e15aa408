//! ARTH Protocol Contracts
//!
//! Fractional-algorithmic stablecoin engine on Casper.
//!
//! ## Architecture
//!
//! - **ArthController**: Global collateral ratio, fees, pause flags, price
//!   composition and collateral aggregation across pools
//! - **ArthPool**: One per collateral asset; mint, two-phase redeem,
//!   recollateralize, buyback and AMO borrow/repay
//! - **AccessControl**: Role registry (admin, timelock, AMO, pausers)
//! - **LedgerToken**: Fungible ledger used for ARTH, ARTHX, MAHA and collateral
//! - **ManualTwapOracle / ManualPriceFeed**: Keeper-updated price sources
//!
//! Pricing lives in pure functions (`pricing`, `curve`, `stability_fee`)
//! that take a [`types::GlobalState`] snapshot, so contracts only load state,
//! quote, and apply.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod math;
pub mod curve;
pub mod pricing;
pub mod stability_fee;

// Contract modules
pub mod access_control;
pub mod ledger_token;
pub mod oracle;
pub mod controller;
pub mod pool;
