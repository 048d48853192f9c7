use carbonex_common::{
    decimal,
    interfaces::{BaseCurrencyClient, CreditLedgerClient},
    ExchangeError,
};
use soroban_sdk::{Address, Env};

use crate::{
    events::PoolEvents,
    math, registry,
    storage::{self, PoolConfig, PoolState},
};

/// Deposits `base_amount_in` plus the matching credit and returns the shares
/// minted. The first deposit seeds the pool with the configured amounts.
pub fn add_liquidity(
    env: &Env,
    provider: &Address,
    base_amount_in: i128,
    max_slippage_pct: i128,
) -> Result<i128, ExchangeError> {
    decimal::require_positive(base_amount_in)?;
    decimal::require_percentage(max_slippage_pct)?;
    let config = storage::require_config(env)?;
    let state = storage::get_pool_state(env);

    if !state.is_seeded() {
        return seed(env, &config, provider, base_amount_in);
    }

    // Rounded up so the depositor never pays less than its pro-rata credit.
    let credit_in = decimal::mul_div_round_up(
        env,
        base_amount_in,
        state.credit_reserve,
        state.base_reserve,
    )?;
    let shares = decimal::mul_div(env, base_amount_in, state.total_shares, state.base_reserve)?;
    if credit_in == 0 || shares == 0 {
        return Err(ExchangeError::InvalidAmount);
    }

    let next = PoolState {
        credit_reserve: state
            .credit_reserve
            .checked_add(credit_in)
            .ok_or(ExchangeError::Overflow)?,
        base_reserve: state
            .base_reserve
            .checked_add(base_amount_in)
            .ok_or(ExchangeError::Overflow)?,
        total_shares: state
            .total_shares
            .checked_add(shares)
            .ok_or(ExchangeError::Overflow)?,
    };
    let rate_before = math::exchange_rate(env, state.credit_reserve, state.base_reserve)?;
    let rate_after = math::exchange_rate(env, next.credit_reserve, next.base_reserve)?;
    decimal::ensure_within_slippage(env, rate_before, rate_after, max_slippage_pct)?;

    let credit = CreditLedgerClient::new(env, &config.credit_token);
    let base = BaseCurrencyClient::new(env, &config.base_ledger);
    if credit.balance(provider) < credit_in || base.balance(provider) < base_amount_in {
        return Err(ExchangeError::InsufficientBalance);
    }

    let pool = env.current_contract_address();
    credit.transfer(provider, &pool, &credit_in);
    base.transfer(provider, &pool, &base_amount_in);

    registry::add_liquidity_provider(env, provider, shares)?;
    storage::set_pool_state(env, &next);

    PoolEvents::add_liquidity(env, provider, credit_in, base_amount_in, shares);
    PoolEvents::sync(env, next.credit_reserve, next.base_reserve, next.total_shares);
    Ok(shares)
}

/// Seeds an empty pool with exactly the configured amounts. Any base offered
/// above the seed amount stays with the provider.
fn seed(
    env: &Env,
    config: &PoolConfig,
    provider: &Address,
    base_amount_in: i128,
) -> Result<i128, ExchangeError> {
    if base_amount_in < config.seed_base {
        return Err(ExchangeError::InsufficientBalance);
    }

    let credit = CreditLedgerClient::new(env, &config.credit_token);
    let base = BaseCurrencyClient::new(env, &config.base_ledger);
    if credit.balance(provider) < config.seed_credit || base.balance(provider) < config.seed_base {
        return Err(ExchangeError::InsufficientBalance);
    }

    let pool = env.current_contract_address();
    credit.transfer(provider, &pool, &config.seed_credit);
    base.transfer(provider, &pool, &config.seed_base);

    let state = PoolState {
        credit_reserve: config.seed_credit,
        base_reserve: config.seed_base,
        total_shares: config.initial_shares,
    };
    registry::add_liquidity_provider(env, provider, config.initial_shares)?;
    storage::set_pool_state(env, &state);

    PoolEvents::seed(env, provider, config.seed_credit, config.seed_base, config.initial_shares);
    PoolEvents::sync(env, state.credit_reserve, state.base_reserve, state.total_shares);
    Ok(config.initial_shares)
}

/// Burns the shares worth `base_amount_out` of base and pays out both assets
/// pro rata. Returns `(credit_out, base_out)` after any withdrawal fee.
pub fn remove_liquidity(
    env: &Env,
    provider: &Address,
    base_amount_out: i128,
    max_slippage_pct: i128,
) -> Result<(i128, i128), ExchangeError> {
    decimal::require_positive(base_amount_out)?;
    decimal::require_percentage(max_slippage_pct)?;
    let config = storage::require_config(env)?;
    let state = storage::get_pool_state(env);
    if !state.is_seeded() {
        return Err(ExchangeError::PoolNotInitialized);
    }

    let shares = decimal::mul_div(env, base_amount_out, state.total_shares, state.base_reserve)?;
    if shares > registry::get_shares(env, provider) {
        return Err(ExchangeError::InsufficientShares);
    }
    if shares == 0 {
        return Err(ExchangeError::InvalidAmount);
    }
    withdraw_shares(env, &config, &state, provider, shares, max_slippage_pct)
}

/// Burns every share `provider` holds.
pub fn remove_all_liquidity(
    env: &Env,
    provider: &Address,
    max_slippage_pct: i128,
) -> Result<(i128, i128), ExchangeError> {
    decimal::require_percentage(max_slippage_pct)?;
    let config = storage::require_config(env)?;
    let state = storage::get_pool_state(env);
    if !state.is_seeded() {
        return Err(ExchangeError::PoolNotInitialized);
    }

    let shares = registry::get_shares(env, provider);
    if shares == 0 {
        return Err(ExchangeError::InsufficientShares);
    }
    withdraw_shares(env, &config, &state, provider, shares, max_slippage_pct)
}

fn withdraw_shares(
    env: &Env,
    config: &PoolConfig,
    state: &PoolState,
    provider: &Address,
    shares: i128,
    max_slippage_pct: i128,
) -> Result<(i128, i128), ExchangeError> {
    let credit_share = decimal::mul_div(env, state.credit_reserve, shares, state.total_shares)?;
    let base_share = decimal::mul_div(env, state.base_reserve, shares, state.total_shares)?;
    // Both reserves must stay strictly positive.
    if credit_share >= state.credit_reserve || base_share >= state.base_reserve {
        return Err(ExchangeError::PoolWouldBeDrained);
    }

    let credit_out =
        credit_share - decimal::apply_bps(env, credit_share, config.withdrawal_fee_bps)?;
    let base_out = base_share - decimal::apply_bps(env, base_share, config.withdrawal_fee_bps)?;
    if credit_out == 0 || base_out == 0 {
        return Err(ExchangeError::InvalidAmount);
    }

    let next = PoolState {
        credit_reserve: state.credit_reserve - credit_out,
        base_reserve: state.base_reserve - base_out,
        total_shares: state.total_shares - shares,
    };
    let rate_before = math::exchange_rate(env, state.credit_reserve, state.base_reserve)?;
    let rate_after = math::exchange_rate(env, next.credit_reserve, next.base_reserve)?;
    decimal::ensure_within_slippage(env, rate_before, rate_after, max_slippage_pct)?;

    registry::remove_liquidity_provider(env, provider, shares)?;

    let pool = env.current_contract_address();
    CreditLedgerClient::new(env, &config.credit_token).transfer(&pool, provider, &credit_out);
    BaseCurrencyClient::new(env, &config.base_ledger).transfer(&pool, provider, &base_out);

    storage::set_pool_state(env, &next);

    PoolEvents::remove_liquidity(env, provider, credit_out, base_out, shares);
    PoolEvents::sync(env, next.credit_reserve, next.base_reserve, next.total_shares);
    Ok((credit_out, base_out))
}
