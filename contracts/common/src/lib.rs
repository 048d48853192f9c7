#![cfg_attr(not(test), no_std)]

//! Shared building blocks for the carbon credit exchange contracts: the
//! fixed-point decimal helpers every monetary computation goes through, the
//! error taxonomy surfaced to callers, the value types exchanged between
//! contracts, and client interfaces for the two asset ledgers.

#[cfg(test)]
extern crate std;

pub mod decimal;
pub mod errors;
pub mod interfaces;
pub mod types;

#[cfg(test)]
mod test;

pub use errors::ExchangeError;
pub use types::{LiquidityInfo, PoolSnapshot, SwapQuote};
