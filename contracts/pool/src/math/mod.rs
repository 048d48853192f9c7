//! Constant-product pricing for the credit/base pool.
//!
//! Amounts are 18-decimal fixed point (see `carbonex_common::decimal`). The
//! exchange rate is quoted as credit per unit of base.

use carbonex_common::{decimal, ExchangeError, SwapQuote};
use soroban_sdk::Env;

/// `credit_reserve / base_reserve`, truncated. Zero for an empty pool.
pub fn exchange_rate(
    env: &Env,
    credit_reserve: i128,
    base_reserve: i128,
) -> Result<i128, ExchangeError> {
    if base_reserve == 0 {
        return Ok(0);
    }
    decimal::div(env, credit_reserve, base_reserve)
}

/// Prices a swap of `amount_in` against the given reserves.
///
/// The fee is taken from the input before pricing:
///   amount_out = reserve_out * (amount_in - fee) / (reserve_in + amount_in - fee)
///
/// The effective rate is input paid per unit of output received.
pub fn quote_swap(
    env: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
    fee_rate_bps: u32,
) -> Result<SwapQuote, ExchangeError> {
    decimal::require_positive(amount_in)?;
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(ExchangeError::PoolNotInitialized);
    }

    let fee = decimal::apply_bps(env, amount_in, fee_rate_bps)?;
    let amount_in_after_fee = amount_in - fee;
    let denominator = reserve_in
        .checked_add(amount_in_after_fee)
        .ok_or(ExchangeError::Overflow)?;
    let amount_out = decimal::mul_div(env, reserve_out, amount_in_after_fee, denominator)?;
    if amount_out == 0 {
        return Err(ExchangeError::InvalidAmount);
    }

    Ok(SwapQuote {
        amount_out,
        fee,
        effective_rate: decimal::div(env, amount_in, amount_out)?,
    })
}

/// Rejects any state transition that shrinks `reserve_in * reserve_out`.
pub fn ensure_k_not_decreased(
    env: &Env,
    before: (i128, i128),
    after: (i128, i128),
) -> Result<(), ExchangeError> {
    let k_before = decimal::product(env, before.0, before.1)?;
    let k_after = decimal::product(env, after.0, after.1)?;
    if k_after < k_before {
        return Err(ExchangeError::InvariantViolated);
    }
    Ok(())
}
