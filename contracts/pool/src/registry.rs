//! Provider share registry.
//!
//! Each provider's share count lives under its own persistent key, so no
//! operation touches more than the caller's own entry. Entries that drop to
//! zero are removed. A single counter tracks how many providers hold shares.

use carbonex_common::{decimal, ExchangeError};
use soroban_sdk::{Address, Env};

use crate::storage::DataKey;

const SHARES_LIFETIME_THRESHOLD: u32 = 17_280;
const SHARES_BUMP_AMOUNT: u32 = 518_400;

pub fn get_shares(env: &Env, provider: &Address) -> i128 {
    let key = DataKey::Shares(provider.clone());
    let shares: Option<i128> = env.storage().persistent().get(&key);
    if shares.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, SHARES_LIFETIME_THRESHOLD, SHARES_BUMP_AMOUNT);
    }
    shares.unwrap_or(0)
}

fn write_shares(env: &Env, provider: &Address, shares: i128) {
    let key = DataKey::Shares(provider.clone());
    if shares == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &shares);
    env.storage()
        .persistent()
        .extend_ttl(&key, SHARES_LIFETIME_THRESHOLD, SHARES_BUMP_AMOUNT);
}

/// Number of providers currently holding shares.
pub fn provider_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProviderCount)
        .unwrap_or(0)
}

fn write_provider_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ProviderCount, &count);
}

/// Credits `shares` to `provider`, registering it on first deposit.
/// Returns the provider's new share count.
pub fn add_liquidity_provider(
    env: &Env,
    provider: &Address,
    shares: i128,
) -> Result<i128, ExchangeError> {
    decimal::require_positive(shares)?;
    let current = get_shares(env, provider);
    let updated = current.checked_add(shares).ok_or(ExchangeError::Overflow)?;
    if current == 0 {
        let count = provider_count(env)
            .checked_add(1)
            .ok_or(ExchangeError::Overflow)?;
        write_provider_count(env, count);
    }
    write_shares(env, provider, updated);
    Ok(updated)
}

/// Debits `shares` from `provider`, dropping the entry once it reaches zero.
/// Returns the provider's remaining share count.
pub fn remove_liquidity_provider(
    env: &Env,
    provider: &Address,
    shares: i128,
) -> Result<i128, ExchangeError> {
    decimal::require_positive(shares)?;
    let current = get_shares(env, provider);
    if shares > current {
        return Err(ExchangeError::InsufficientShares);
    }
    let remaining = current - shares;
    write_shares(env, provider, remaining);
    if remaining == 0 {
        write_provider_count(env, provider_count(env).saturating_sub(1));
    }
    Ok(remaining)
}

/// Provider's fraction of `total_shares`, scaled and rounded half-up.
/// Zero when the pool has no shares outstanding.
pub fn get_share_percentage(
    env: &Env,
    provider: &Address,
    total_shares: i128,
) -> Result<i128, ExchangeError> {
    if total_shares == 0 {
        return Ok(0);
    }
    decimal::mul_div_round_half_up(env, get_shares(env, provider), decimal::SCALE, total_shares)
}
