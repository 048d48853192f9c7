#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod events;
mod storage;

#[cfg(test)]
mod test;

use carbonex_common::{decimal, ExchangeError};
use events::CreditTokenEvents;
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

/// Fungible carbon credit ledger.
///
/// Tracks balances and (owner, spender) allowances. Only the admin fixed at
/// initialization may mint, until minting is switched off for good.
#[contract]
pub struct CreditToken;

fn ensure_initialized(env: &Env) -> Result<(), ExchangeError> {
    if !storage::has_admin(env) {
        return Err(ExchangeError::NotInitialized);
    }
    storage::extend_instance_ttl(env);
    Ok(())
}

fn check_admin(env: &Env, admin: &Address) -> Result<(), ExchangeError> {
    let stored = storage::read_admin(env).ok_or(ExchangeError::NotInitialized)?;
    admin.require_auth();
    if *admin != stored {
        return Err(ExchangeError::Unauthorized);
    }
    Ok(())
}

/// Moves `amount` from `from` to `to`. Both writes land or neither does.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ExchangeError> {
    let from_balance = storage::read_balance(env, from);
    if from_balance < amount {
        return Err(ExchangeError::InsufficientBalance);
    }
    let to_balance = if from == to {
        from_balance - amount
    } else {
        storage::read_balance(env, to)
    };
    let credited = to_balance
        .checked_add(amount)
        .ok_or(ExchangeError::Overflow)?;

    storage::write_balance(env, from, from_balance - amount);
    storage::write_balance(env, to, credited);
    Ok(())
}

#[contractimpl]
impl CreditToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), ExchangeError> {
        if storage::has_admin(&env) {
            return Err(ExchangeError::AlreadyInitialized);
        }
        storage::write_admin(&env, &admin);
        storage::write_minting_enabled(&env, true);
        storage::write_total_supply(&env, 0);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: decimal::DECIMALS,
            name,
            symbol,
        });
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn mint(env: Env, admin: Address, to: Address, amount: i128) -> Result<(), ExchangeError> {
        check_admin(&env, &admin)?;
        if !storage::read_minting_enabled(&env) {
            return Err(ExchangeError::MintingDisabled);
        }
        decimal::require_positive(amount)?;

        let total_supply = storage::read_total_supply(&env)
            .checked_add(amount)
            .ok_or(ExchangeError::Overflow)?;
        let balance = storage::read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(ExchangeError::Overflow)?;

        storage::write_total_supply(&env, total_supply);
        storage::write_balance(&env, &to, balance);
        storage::extend_instance_ttl(&env);
        TokenUtils::new(&env).events().mint(admin, to, amount);
        Ok(())
    }

    /// Permanently disables minting. There is no way to turn it back on.
    pub fn disable_minting(env: Env, admin: Address) -> Result<(), ExchangeError> {
        check_admin(&env, &admin)?;
        if !storage::read_minting_enabled(&env) {
            return Err(ExchangeError::AlreadyDisabled);
        }
        storage::write_minting_enabled(&env, false);
        storage::extend_instance_ttl(&env);
        CreditTokenEvents::minting_disabled(&env, &admin);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ExchangeError> {
        ensure_initialized(&env)?;
        from.require_auth();
        decimal::require_positive(amount)?;

        move_balance(&env, &from, &to, amount)?;
        TokenUtils::new(&env).events().transfer(from, to, amount);
        Ok(())
    }

    /// Sets the allowance of `spender` over `owner`'s balance, replacing any
    /// previous value.
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), ExchangeError> {
        ensure_initialized(&env)?;
        owner.require_auth();
        decimal::require_non_negative(amount)?;

        storage::write_allowance(&env, &owner, &spender, amount);
        CreditTokenEvents::approve(&env, &owner, &spender, amount);
        Ok(())
    }

    /// Spends `amount` of `spender`'s allowance to move `owner`'s credits to
    /// `to`. The allowance shrinks by exactly the amount moved.
    pub fn transfer_from(
        env: Env,
        owner: Address,
        spender: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ExchangeError> {
        ensure_initialized(&env)?;
        spender.require_auth();
        decimal::require_positive(amount)?;

        let allowance = storage::read_allowance(&env, &owner, &spender);
        if allowance < amount {
            return Err(ExchangeError::InsufficientAllowance);
        }
        move_balance(&env, &owner, &to, amount)?;
        storage::write_allowance(&env, &owner, &spender, allowance - amount);
        TokenUtils::new(&env).events().transfer(owner, to, amount);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &owner, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::read_total_supply(&env)
    }

    pub fn minting_enabled(env: Env) -> bool {
        storage::read_minting_enabled(&env)
    }

    pub fn admin(env: Env) -> Result<Address, ExchangeError> {
        storage::read_admin(&env).ok_or(ExchangeError::NotInitialized)
    }

    pub fn decimals(_env: Env) -> u32 {
        decimal::DECIMALS
    }

    pub fn name(env: Env) -> Result<String, ExchangeError> {
        ensure_initialized(&env)?;
        Ok(TokenUtils::new(&env).metadata().get_metadata().name)
    }

    pub fn symbol(env: Env) -> Result<String, ExchangeError> {
        ensure_initialized(&env)?;
        Ok(TokenUtils::new(&env).metadata().get_metadata().symbol)
    }
}
