#![cfg_attr(not(test), no_std)]

mod events;
mod liquidity;
mod math;
mod reentrancy;
mod registry;
mod storage;
mod swap;

#[cfg(test)]
extern crate std;


pub use storage::{PoolConfig, PoolState};

use carbonex_common::{ExchangeError, LiquidityInfo, PoolSnapshot, SwapQuote};
use soroban_sdk::{contract, contractimpl, Address, Env};
use swap::{SwapDirection, SwapLimit};

/// Constant-product pool pairing the carbon credit token with the base
/// currency.
///
/// Every mutating entry point runs under the pool lock and either commits
/// all of its balance, reserve and registry writes or none of them.
#[contract]
pub struct LiquidityPool;

fn locked<T>(
    env: &Env,
    operation: impl FnOnce(&Env) -> Result<T, ExchangeError>,
) -> Result<T, ExchangeError> {
    reentrancy::acquire(env)?;
    let result = operation(env)?;
    reentrancy::release(env);
    storage::extend_instance_ttl(env);
    Ok(result)
}

fn snapshot(env: &Env) -> Result<PoolSnapshot, ExchangeError> {
    let config = storage::require_config(env)?;
    let state = storage::get_pool_state(env);
    Ok(PoolSnapshot {
        credit_reserve: state.credit_reserve,
        base_reserve: state.base_reserve,
        total_shares: state.total_shares,
        fee_rate_bps: config.fee_rate_bps,
        exchange_rate: math::exchange_rate(env, state.credit_reserve, state.base_reserve)?,
        seeded: state.is_seeded(),
    })
}

#[contractimpl]
impl LiquidityPool {
    pub fn initialize(env: Env, config: PoolConfig) -> Result<(), ExchangeError> {
        if storage::get_config(&env).is_some() {
            return Err(ExchangeError::AlreadyInitialized);
        }
        config.validate()?;
        storage::set_config(&env, &config);
        storage::set_pool_state(&env, &PoolState::empty());
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Returns the shares minted to `provider`.
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        base_amount_in: i128,
        max_slippage_pct: i128,
    ) -> Result<i128, ExchangeError> {
        provider.require_auth();
        locked(&env, |env| {
            liquidity::add_liquidity(env, &provider, base_amount_in, max_slippage_pct)
        })
    }

    /// Returns `(credit_out, base_out)` paid to `provider`.
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        base_amount_out: i128,
        max_slippage_pct: i128,
    ) -> Result<(i128, i128), ExchangeError> {
        provider.require_auth();
        locked(&env, |env| {
            liquidity::remove_liquidity(env, &provider, base_amount_out, max_slippage_pct)
        })
    }

    pub fn remove_all_liquidity(
        env: Env,
        provider: Address,
        max_slippage_pct: i128,
    ) -> Result<(i128, i128), ExchangeError> {
        provider.require_auth();
        locked(&env, |env| {
            liquidity::remove_all_liquidity(env, &provider, max_slippage_pct)
        })
    }

    /// Sells `amount_in` credit for base. `max_rate` is credit paid per base
    /// received, the same unit as `calculate_exchange_rate`.
    pub fn swap_credit_for_base(
        env: Env,
        trader: Address,
        amount_in: i128,
        max_rate: i128,
    ) -> Result<i128, ExchangeError> {
        trader.require_auth();
        locked(&env, |env| {
            swap::swap(
                env,
                &trader,
                SwapDirection::CreditForBase,
                amount_in,
                SwapLimit::MaxRate(max_rate),
            )
        })
    }

    /// Sells `amount_in` base for credit. `max_rate` is base paid per credit
    /// received, the inverse of `calculate_exchange_rate`.
    pub fn swap_base_for_credit(
        env: Env,
        trader: Address,
        amount_in: i128,
        max_rate: i128,
    ) -> Result<i128, ExchangeError> {
        trader.require_auth();
        locked(&env, |env| {
            swap::swap(
                env,
                &trader,
                SwapDirection::BaseForCredit,
                amount_in,
                SwapLimit::MaxRate(max_rate),
            )
        })
    }

    /// Sells `amount_in` credit and fails unless at least `min_amount_out`
    /// base is paid out.
    pub fn swap_credit_for_base_min_out(
        env: Env,
        trader: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, ExchangeError> {
        trader.require_auth();
        locked(&env, |env| {
            swap::swap(
                env,
                &trader,
                SwapDirection::CreditForBase,
                amount_in,
                SwapLimit::MinAmountOut(min_amount_out),
            )
        })
    }

    /// Sells `amount_in` base and fails unless at least `min_amount_out`
    /// credit is paid out.
    pub fn swap_base_for_credit_min_out(
        env: Env,
        trader: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, ExchangeError> {
        trader.require_auth();
        locked(&env, |env| {
            swap::swap(
                env,
                &trader,
                SwapDirection::BaseForCredit,
                amount_in,
                SwapLimit::MinAmountOut(min_amount_out),
            )
        })
    }

    pub fn quote_credit_for_base(env: Env, amount_in: i128) -> Result<SwapQuote, ExchangeError> {
        swap::quote(&env, SwapDirection::CreditForBase, amount_in)
    }

    pub fn quote_base_for_credit(env: Env, amount_in: i128) -> Result<SwapQuote, ExchangeError> {
        swap::quote(&env, SwapDirection::BaseForCredit, amount_in)
    }

    /// Credit per unit of base; zero while the pool is empty.
    pub fn calculate_exchange_rate(env: Env) -> Result<i128, ExchangeError> {
        storage::require_config(&env)?;
        let state = storage::get_pool_state(&env);
        math::exchange_rate(&env, state.credit_reserve, state.base_reserve)
    }

    /// `(credit_reserve, base_reserve)`
    pub fn get_reserves(env: Env) -> (i128, i128) {
        let state = storage::get_pool_state(&env);
        (state.credit_reserve, state.base_reserve)
    }

    pub fn get_liquidity_info(env: Env) -> Result<PoolSnapshot, ExchangeError> {
        snapshot(&env)
    }

    pub fn get_provider_info(env: Env, provider: Address) -> Result<LiquidityInfo, ExchangeError> {
        let pool = snapshot(&env)?;
        let share_fraction = registry::get_share_percentage(&env, &provider, pool.total_shares)?;
        Ok(LiquidityInfo {
            pool,
            provider_shares: registry::get_shares(&env, &provider),
            share_fraction,
        })
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, ExchangeError> {
        storage::require_config(&env)
    }

    pub fn get_shares(env: Env, provider: Address) -> i128 {
        registry::get_shares(&env, &provider)
    }

    /// Scaled fraction of all shares held by `provider`, rounded half-up.
    pub fn get_share_percentage(env: Env, provider: Address) -> Result<i128, ExchangeError> {
        let state = storage::get_pool_state(&env);
        registry::get_share_percentage(&env, &provider, state.total_shares)
    }

    pub fn get_provider_count(env: Env) -> u32 {
        registry::provider_count(&env)
    }

    pub fn is_locked(env: Env) -> bool {
        reentrancy::is_locked(&env)
    }
}
