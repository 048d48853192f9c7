//! Fixed-point decimal arithmetic with 18 fractional digits.
//!
//! Values are `i128` scaled by [`SCALE`]. Divisions truncate toward zero
//! unless a helper says otherwise; operands are non-negative, so truncation
//! and flooring coincide.
//! Products that do not fit in `i128` are carried in a host `U256` until the
//! final division, so no precision is lost before the single truncation.

use soroban_sdk::{Env, U256};

use crate::ExchangeError;

/// Number of fractional digits carried by every monetary value.
pub const DECIMALS: u32 = 18;
/// Fixed-point scale factor (1e18).
pub const SCALE: i128 = 1_000_000_000_000_000_000;
/// Basis point denominator.
pub const BPS_DENOMINATOR: i128 = 10_000;
/// 100% expressed as a scaled percentage.
pub const ONE_HUNDRED_PERCENT: i128 = 100 * SCALE;

/// Converts whole units into a scaled value.
pub fn from_units(units: i128) -> Result<i128, ExchangeError> {
    units.checked_mul(SCALE).ok_or(ExchangeError::Overflow)
}

pub fn require_positive(amount: i128) -> Result<(), ExchangeError> {
    if amount <= 0 {
        return Err(ExchangeError::InvalidAmount);
    }
    Ok(())
}

pub fn require_non_negative(amount: i128) -> Result<(), ExchangeError> {
    if amount < 0 {
        return Err(ExchangeError::InvalidAmount);
    }
    Ok(())
}

fn check_operands(a: i128, b: i128, denominator: i128) -> Result<(), ExchangeError> {
    if a < 0 || b < 0 || denominator < 0 {
        return Err(ExchangeError::InvalidAmount);
    }
    if denominator == 0 {
        return Err(ExchangeError::DivisionByZero);
    }
    Ok(())
}

fn wide_product(env: &Env, a: i128, b: i128) -> U256 {
    U256::from_u128(env, a as u128).mul(&U256::from_u128(env, b as u128))
}

fn narrow(value: &U256) -> Result<i128, ExchangeError> {
    value
        .to_u128()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or(ExchangeError::Overflow)
}

/// Computes `a * b / denominator`, truncated.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, ExchangeError> {
    check_operands(a, b, denominator)?;
    match a.checked_mul(b) {
        Some(product) => Ok(product / denominator),
        None => {
            let divisor = U256::from_u128(env, denominator as u128);
            narrow(&wide_product(env, a, b).div(&divisor))
        }
    }
}

/// Computes `a * b / denominator`, rounded up. Used where truncation would
/// let a caller pay the pool less than its pro-rata amount.
pub fn mul_div_round_up(
    env: &Env,
    a: i128,
    b: i128,
    denominator: i128,
) -> Result<i128, ExchangeError> {
    check_operands(a, b, denominator)?;
    let (quotient, remainder) = match a.checked_mul(b) {
        Some(product) => (product / denominator, product % denominator),
        None => {
            let product = wide_product(env, a, b);
            let divisor = U256::from_u128(env, denominator as u128);
            (
                narrow(&product.div(&divisor))?,
                narrow(&product.rem_euclid(&divisor))?,
            )
        }
    };
    if remainder == 0 {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(ExchangeError::Overflow)
    }
}

/// Computes `a * b / denominator`, rounded half-up.
///
/// Reserved for reporting. Balance-affecting math never rounds to nearest.
pub fn mul_div_round_half_up(
    env: &Env,
    a: i128,
    b: i128,
    denominator: i128,
) -> Result<i128, ExchangeError> {
    check_operands(a, b, denominator)?;
    let (quotient, remainder) = match a.checked_mul(b) {
        Some(product) => (product / denominator, product % denominator),
        None => {
            let product = wide_product(env, a, b);
            let divisor = U256::from_u128(env, denominator as u128);
            (
                narrow(&product.div(&divisor))?,
                narrow(&product.rem_euclid(&divisor))?,
            )
        }
    };
    // 2 * remainder >= denominator, written so it cannot overflow.
    if remainder >= denominator - remainder {
        quotient.checked_add(1).ok_or(ExchangeError::Overflow)
    } else {
        Ok(quotient)
    }
}

/// Fixed-point product of two scaled values.
pub fn mul(env: &Env, a: i128, b: i128) -> Result<i128, ExchangeError> {
    mul_div(env, a, b, SCALE)
}

/// Fixed-point quotient of two scaled values.
pub fn div(env: &Env, a: i128, b: i128) -> Result<i128, ExchangeError> {
    mul_div(env, a, SCALE, b)
}

/// Portion of `amount` corresponding to `bps` basis points, truncated.
pub fn apply_bps(env: &Env, amount: i128, bps: u32) -> Result<i128, ExchangeError> {
    mul_div(env, amount, bps as i128, BPS_DENOMINATOR)
}

/// Exact product of two non-negative values, for invariant comparisons.
pub fn product(env: &Env, a: i128, b: i128) -> Result<U256, ExchangeError> {
    require_non_negative(a)?;
    require_non_negative(b)?;
    Ok(wide_product(env, a, b))
}

/// Slippage tolerances are scaled percentages in `[0, 100)`.
pub fn require_percentage(pct: i128) -> Result<(), ExchangeError> {
    if !(0..ONE_HUNDRED_PERCENT).contains(&pct) {
        return Err(ExchangeError::InvalidAmount);
    }
    Ok(())
}

/// Returns the `[rate * (1 - p/100), rate / (1 - p/100)]` band tolerated for a
/// scaled slippage percentage `p`.
pub fn slippage_band(
    env: &Env,
    rate: i128,
    max_slippage_pct: i128,
) -> Result<(i128, i128), ExchangeError> {
    require_percentage(max_slippage_pct)?;
    let factor = SCALE - max_slippage_pct / 100;
    Ok((mul(env, rate, factor)?, div(env, rate, factor)?))
}

/// Fails with `SlippageExceeded` when `observed` falls outside the band
/// around `reference`.
pub fn ensure_within_slippage(
    env: &Env,
    reference: i128,
    observed: i128,
    max_slippage_pct: i128,
) -> Result<(), ExchangeError> {
    let (lower, upper) = slippage_band(env, reference, max_slippage_pct)?;
    if observed < lower || observed > upper {
        return Err(ExchangeError::SlippageExceeded);
    }
    Ok(())
}
