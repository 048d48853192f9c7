use carbonex_common::{
    interfaces::{BaseCurrencyClient, CreditLedgerClient},
    ExchangeError, LiquidityInfo, PoolSnapshot, SwapQuote,
};
use soroban_sdk::{contractclient, Address, Env};

use crate::storage;

#[contractclient(name = "PoolClient")]
pub trait PoolInterface {
    fn add_liquidity(
        env: Env,
        provider: Address,
        base_amount_in: i128,
        max_slippage_pct: i128,
    ) -> Result<i128, ExchangeError>;
    fn remove_liquidity(
        env: Env,
        provider: Address,
        base_amount_out: i128,
        max_slippage_pct: i128,
    ) -> Result<(i128, i128), ExchangeError>;
    fn remove_all_liquidity(
        env: Env,
        provider: Address,
        max_slippage_pct: i128,
    ) -> Result<(i128, i128), ExchangeError>;
    fn swap_credit_for_base(
        env: Env,
        trader: Address,
        amount_in: i128,
        max_rate: i128,
    ) -> Result<i128, ExchangeError>;
    fn swap_base_for_credit(
        env: Env,
        trader: Address,
        amount_in: i128,
        max_rate: i128,
    ) -> Result<i128, ExchangeError>;
    fn swap_credit_for_base_min_out(
        env: Env,
        trader: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, ExchangeError>;
    fn swap_base_for_credit_min_out(
        env: Env,
        trader: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, ExchangeError>;
    fn quote_credit_for_base(env: Env, amount_in: i128) -> Result<SwapQuote, ExchangeError>;
    fn quote_base_for_credit(env: Env, amount_in: i128) -> Result<SwapQuote, ExchangeError>;
    fn calculate_exchange_rate(env: Env) -> Result<i128, ExchangeError>;
    fn get_liquidity_info(env: Env) -> Result<PoolSnapshot, ExchangeError>;
    fn get_provider_info(env: Env, provider: Address) -> Result<LiquidityInfo, ExchangeError>;
}

/// Collapses the outcome of a `try_*` cross-contract call into a single
/// `ExchangeError`.
///
/// Typed errors from the callee pass through unchanged. A return value that
/// fails to decode and any other host-level failure both surface as
/// `InvariantViolated`, since neither carries a typed cause.
pub fn settle<T, C, I>(
    result: Result<Result<T, C>, Result<ExchangeError, I>>,
) -> Result<T, ExchangeError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(ExchangeError::InvariantViolated),
        Err(Ok(error)) => Err(error),
        Err(Err(_)) => Err(ExchangeError::InvariantViolated),
    }
}

pub fn credit_ledger(env: &Env) -> Result<CreditLedgerClient<'_>, ExchangeError> {
    let address = storage::get_credit_token(env).ok_or(ExchangeError::NotInitialized)?;
    Ok(CreditLedgerClient::new(env, &address))
}

pub fn base_ledger(env: &Env) -> Result<BaseCurrencyClient<'_>, ExchangeError> {
    let address = storage::get_base_ledger(env).ok_or(ExchangeError::NotInitialized)?;
    Ok(BaseCurrencyClient::new(env, &address))
}

pub fn pool(env: &Env) -> Result<PoolClient<'_>, ExchangeError> {
    let address = storage::get_pool(env).ok_or(ExchangeError::NotInitialized)?;
    Ok(PoolClient::new(env, &address))
}
