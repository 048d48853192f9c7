#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod events;
mod storage;


use carbonex_common::{decimal, ExchangeError};
use events::LedgerEvents;
use soroban_sdk::{contract, contractimpl, Address, Env};

/// Balance book for the base currency (USDC) the credit trades against.
///
/// Issuance and redemption go through the admin via `credit` / `debit`;
/// holders move their own funds with `transfer`.
#[contract]
pub struct BaseLedger;

fn check_admin(env: &Env) -> Result<(), ExchangeError> {
    let admin = storage::read_admin(env).ok_or(ExchangeError::NotInitialized)?;
    admin.require_auth();
    storage::extend_instance_ttl(env);
    Ok(())
}

fn credit_balance(env: &Env, to: &Address, amount: i128) -> Result<(), ExchangeError> {
    let balance = storage::read_balance(env, to)
        .checked_add(amount)
        .ok_or(ExchangeError::Overflow)?;
    storage::write_balance(env, to, balance);
    Ok(())
}

fn debit_balance(env: &Env, from: &Address, amount: i128) -> Result<(), ExchangeError> {
    let balance = storage::read_balance(env, from);
    if balance < amount {
        return Err(ExchangeError::InsufficientBalance);
    }
    storage::write_balance(env, from, balance - amount);
    Ok(())
}

#[contractimpl]
impl BaseLedger {
    pub fn initialize(env: Env, admin: Address) -> Result<(), ExchangeError> {
        if storage::read_admin(&env).is_some() {
            return Err(ExchangeError::AlreadyInitialized);
        }
        storage::write_admin(&env, &admin);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn credit(env: Env, to: Address, amount: i128) -> Result<(), ExchangeError> {
        check_admin(&env)?;
        decimal::require_positive(amount)?;
        credit_balance(&env, &to, amount)?;
        LedgerEvents::credit(&env, &to, amount);
        Ok(())
    }

    pub fn debit(env: Env, from: Address, amount: i128) -> Result<(), ExchangeError> {
        check_admin(&env)?;
        decimal::require_positive(amount)?;
        debit_balance(&env, &from, amount)?;
        LedgerEvents::debit(&env, &from, amount);
        Ok(())
    }

    /// Debit followed by credit. The debit fails before anything is written,
    /// so a short balance leaves both sides untouched.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ExchangeError> {
        if storage::read_admin(&env).is_none() {
            return Err(ExchangeError::NotInitialized);
        }
        from.require_auth();
        decimal::require_positive(amount)?;

        debit_balance(&env, &from, amount)?;
        credit_balance(&env, &to, amount)?;
        storage::extend_instance_ttl(&env);
        LedgerEvents::transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn admin(env: Env) -> Result<Address, ExchangeError> {
        storage::read_admin(&env).ok_or(ExchangeError::NotInitialized)
    }
}
