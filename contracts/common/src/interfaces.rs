use soroban_sdk::{contractclient, Address, Env};

use crate::ExchangeError;

/// Credit ledger surface used by the pool and the exchange facade.
#[contractclient(name = "CreditLedgerClient")]
pub trait CreditLedgerInterface {
    fn mint(env: Env, admin: Address, to: Address, amount: i128) -> Result<(), ExchangeError>;
    fn disable_minting(env: Env, admin: Address) -> Result<(), ExchangeError>;
    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ExchangeError>;
    fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), ExchangeError>;
    fn transfer_from(
        env: Env,
        owner: Address,
        spender: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ExchangeError>;
    fn balance(env: Env, id: Address) -> i128;
    fn allowance(env: Env, owner: Address, spender: Address) -> i128;
    fn total_supply(env: Env) -> i128;
}

/// Base-currency ledger surface. There are no allowances: only the owner
/// moves their own balance.
#[contractclient(name = "BaseCurrencyClient")]
pub trait BaseCurrencyInterface {
    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ExchangeError>;
    fn balance(env: Env, id: Address) -> i128;
}
