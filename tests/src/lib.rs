//! ARTH Protocol Integration Tests
//!
//! Every contract is deployed into the Odra test VM and driven through its
//! host reference.


#[cfg(test)]
mod silent_ledger;

#[cfg(test)]
mod mint_tests;


#[cfg(test)]
mod recollateralize_tests;

#[cfg(test)]
mod amo_tests;


#[cfg(test)]
mod ledger_tests;
