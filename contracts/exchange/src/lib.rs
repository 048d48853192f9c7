#![cfg_attr(not(test), no_std)]

mod helpers;
mod storage;

#[cfg(test)]
extern crate std;


use carbonex_common::{ExchangeError, LiquidityInfo, PoolSnapshot, SwapQuote};
use helpers::{base_ledger, credit_ledger, pool, settle};
use soroban_sdk::{contract, contractimpl, Address, Env};

/// Single entry point for the exchange.
///
/// Resolves the credit ledger, the base-currency ledger and the pool, then
/// forwards each request as one call. A failing collaborator aborts the whole
/// invocation, so no request leaves a partial update behind.
#[contract]
pub struct Exchange;

#[contractimpl]
impl Exchange {
    pub fn initialize(
        env: Env,
        credit_token: Address,
        base_ledger: Address,
        pool: Address,
    ) -> Result<(), ExchangeError> {
        if storage::is_initialized(&env) {
            return Err(ExchangeError::AlreadyInitialized);
        }
        storage::set_collaborators(&env, &credit_token, &base_ledger, &pool);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Credit ledger
    // -----------------------------------------------------------------------

    pub fn mint(env: Env, admin: Address, to: Address, amount: i128) -> Result<(), ExchangeError> {
        admin.require_auth();
        settle(credit_ledger(&env)?.try_mint(&admin, &to, &amount))
    }

    pub fn disable_minting(env: Env, admin: Address) -> Result<(), ExchangeError> {
        admin.require_auth();
        settle(credit_ledger(&env)?.try_disable_minting(&admin))
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ExchangeError> {
        from.require_auth();
        settle(credit_ledger(&env)?.try_transfer(&from, &to, &amount))
    }

    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), ExchangeError> {
        owner.require_auth();
        settle(credit_ledger(&env)?.try_approve(&owner, &spender, &amount))
    }

    pub fn transfer_from(
        env: Env,
        owner: Address,
        spender: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ExchangeError> {
        spender.require_auth();
        settle(credit_ledger(&env)?.try_transfer_from(&owner, &spender, &to, &amount))
    }

    // -----------------------------------------------------------------------
    // Liquidity
    // -----------------------------------------------------------------------

    pub fn add_liquidity(
        env: Env,
        provider: Address,
        base_amount: i128,
        max_slippage_pct: i128,
    ) -> Result<(), ExchangeError> {
        provider.require_auth();
        settle(pool(&env)?.try_add_liquidity(&provider, &base_amount, &max_slippage_pct))?;
        Ok(())
    }

    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        base_amount: i128,
        max_slippage_pct: i128,
    ) -> Result<(), ExchangeError> {
        provider.require_auth();
        settle(pool(&env)?.try_remove_liquidity(&provider, &base_amount, &max_slippage_pct))?;
        Ok(())
    }

    pub fn remove_all_liquidity(
        env: Env,
        provider: Address,
        max_slippage_pct: i128,
    ) -> Result<(), ExchangeError> {
        provider.require_auth();
        settle(pool(&env)?.try_remove_all_liquidity(&provider, &max_slippage_pct))?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Swaps
    // -----------------------------------------------------------------------

    /// `max_rate` is credit paid per base received.
    pub fn swap_credit_for_base(
        env: Env,
        trader: Address,
        amount_in: i128,
        max_rate: i128,
    ) -> Result<i128, ExchangeError> {
        trader.require_auth();
        settle(pool(&env)?.try_swap_credit_for_base(&trader, &amount_in, &max_rate))
    }

    /// `max_rate` is base paid per credit received, the inverse of
    /// `calculate_exchange_rate`.
    pub fn swap_base_for_credit(
        env: Env,
        trader: Address,
        amount_in: i128,
        max_rate: i128,
    ) -> Result<i128, ExchangeError> {
        trader.require_auth();
        settle(pool(&env)?.try_swap_base_for_credit(&trader, &amount_in, &max_rate))
    }

    pub fn swap_credit_for_base_min_out(
        env: Env,
        trader: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, ExchangeError> {
        trader.require_auth();
        settle(pool(&env)?.try_swap_credit_for_base_min_out(&trader, &amount_in, &min_amount_out))
    }

    pub fn swap_base_for_credit_min_out(
        env: Env,
        trader: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, ExchangeError> {
        trader.require_auth();
        settle(pool(&env)?.try_swap_base_for_credit_min_out(&trader, &amount_in, &min_amount_out))
    }

    /// Prices a swap without executing it. `credit_in` selects the direction.
    pub fn quote_swap(env: Env, credit_in: bool, amount_in: i128) -> Result<SwapQuote, ExchangeError> {
        let client = pool(&env)?;
        if credit_in {
            settle(client.try_quote_credit_for_base(&amount_in))
        } else {
            settle(client.try_quote_base_for_credit(&amount_in))
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn get_liquidity_info(env: Env) -> Result<PoolSnapshot, ExchangeError> {
        settle(pool(&env)?.try_get_liquidity_info())
    }

    pub fn get_provider_info(env: Env, provider: Address) -> Result<LiquidityInfo, ExchangeError> {
        settle(pool(&env)?.try_get_provider_info(&provider))
    }

    pub fn calculate_exchange_rate(env: Env) -> Result<i128, ExchangeError> {
        settle(pool(&env)?.try_calculate_exchange_rate())
    }

    pub fn balance_of(env: Env, id: Address) -> Result<i128, ExchangeError> {
        Ok(credit_ledger(&env)?.balance(&id))
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> Result<i128, ExchangeError> {
        Ok(credit_ledger(&env)?.allowance(&owner, &spender))
    }

    pub fn get_base_balance(env: Env, id: Address) -> Result<i128, ExchangeError> {
        Ok(base_ledger(&env)?.balance(&id))
    }
}
