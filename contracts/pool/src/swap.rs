use carbonex_common::{
    decimal,
    interfaces::{BaseCurrencyClient, CreditLedgerClient},
    ExchangeError, SwapQuote,
};
use soroban_sdk::{Address, Env};

use crate::{
    events::PoolEvents,
    math,
    storage::{self, PoolConfig, PoolState},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapDirection {
    CreditForBase,
    BaseForCredit,
}

impl SwapDirection {
    /// `(reserve_in, reserve_out)` for this direction.
    fn reserves(self, state: &PoolState) -> (i128, i128) {
        match self {
            SwapDirection::CreditForBase => (state.credit_reserve, state.base_reserve),
            SwapDirection::BaseForCredit => (state.base_reserve, state.credit_reserve),
        }
    }
}

/// Slippage guard a trader attaches to a swap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapLimit {
    /// Highest acceptable input paid per unit of output. For credit-for-base
    /// this is credit per base; for base-for-credit it is base per credit, the
    /// inverse of `calculate_exchange_rate`.
    MaxRate(i128),
    /// Smallest acceptable output, in the output asset's raw units.
    MinAmountOut(i128),
}

impl SwapLimit {
    fn validate(self) -> Result<(), ExchangeError> {
        match self {
            SwapLimit::MaxRate(rate) => decimal::require_positive(rate),
            SwapLimit::MinAmountOut(amount) => decimal::require_positive(amount),
        }
    }

    fn admits(self, quote: &SwapQuote) -> bool {
        match self {
            SwapLimit::MaxRate(rate) => quote.effective_rate <= rate,
            SwapLimit::MinAmountOut(amount) => quote.amount_out >= amount,
        }
    }
}

fn seeded_state(env: &Env) -> Result<(PoolConfig, PoolState), ExchangeError> {
    let config = storage::require_config(env)?;
    let state = storage::get_pool_state(env);
    if !state.is_seeded() {
        return Err(ExchangeError::PoolNotInitialized);
    }
    Ok((config, state))
}

/// Prices a swap against the current reserves without moving any funds.
pub fn quote(
    env: &Env,
    direction: SwapDirection,
    amount_in: i128,
) -> Result<SwapQuote, ExchangeError> {
    decimal::require_positive(amount_in)?;
    let (config, state) = seeded_state(env)?;
    let (reserve_in, reserve_out) = direction.reserves(&state);
    math::quote_swap(env, amount_in, reserve_in, reserve_out, config.fee_rate_bps)
}

/// Executes a swap of `amount_in` for the opposite asset and returns the
/// amount paid out. Fails with `SlippageExceeded` when the quote breaks
/// `limit`.
pub fn swap(
    env: &Env,
    trader: &Address,
    direction: SwapDirection,
    amount_in: i128,
    limit: SwapLimit,
) -> Result<i128, ExchangeError> {
    decimal::require_positive(amount_in)?;
    limit.validate()?;
    let (config, state) = seeded_state(env)?;
    let (reserve_in, reserve_out) = direction.reserves(&state);

    let quote = math::quote_swap(env, amount_in, reserve_in, reserve_out, config.fee_rate_bps)?;
    if !limit.admits(&quote) {
        return Err(ExchangeError::SlippageExceeded);
    }
    if quote.amount_out >= reserve_out {
        return Err(ExchangeError::InsufficientReserve);
    }

    let new_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(ExchangeError::Overflow)?;
    let new_reserve_out = reserve_out - quote.amount_out;
    math::ensure_k_not_decreased(
        env,
        (reserve_in, reserve_out),
        (new_reserve_in, new_reserve_out),
    )?;

    let credit = CreditLedgerClient::new(env, &config.credit_token);
    let base = BaseCurrencyClient::new(env, &config.base_ledger);
    let pool = env.current_contract_address();

    let next = match direction {
        SwapDirection::CreditForBase => {
            if credit.balance(trader) < amount_in {
                return Err(ExchangeError::InsufficientBalance);
            }
            credit.transfer(trader, &pool, &amount_in);
            base.transfer(&pool, trader, &quote.amount_out);
            PoolEvents::swap(env, trader, amount_in, 0, 0, quote.amount_out, quote.fee);
            PoolState {
                credit_reserve: new_reserve_in,
                base_reserve: new_reserve_out,
                total_shares: state.total_shares,
            }
        }
        SwapDirection::BaseForCredit => {
            if base.balance(trader) < amount_in {
                return Err(ExchangeError::InsufficientBalance);
            }
            base.transfer(trader, &pool, &amount_in);
            credit.transfer(&pool, trader, &quote.amount_out);
            PoolEvents::swap(env, trader, 0, amount_in, quote.amount_out, 0, quote.fee);
            PoolState {
                credit_reserve: new_reserve_out,
                base_reserve: new_reserve_in,
                total_shares: state.total_shares,
            }
        }
    };

    storage::set_pool_state(env, &next);
    PoolEvents::sync(env, next.credit_reserve, next.base_reserve, next.total_shares);
    Ok(quote.amount_out)
}
