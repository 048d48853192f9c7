use carbonex_common::ExchangeError;
use soroban_sdk::Env;

use crate::storage::{get_reentrancy_guard, set_reentrancy_guard, ReentrancyGuard};

/// Takes the single-writer lock held for the whole of a liquidity or swap
/// operation. Fails with `Locked` if a nested call tries to mutate the pool
/// while an outer one is still running.
///
/// A failed invocation rolls back every write, the lock included.
pub fn acquire(env: &Env) -> Result<(), ExchangeError> {
    if get_reentrancy_guard(env).locked {
        return Err(ExchangeError::Locked);
    }
    set_reentrancy_guard(env, &ReentrancyGuard { locked: true });
    Ok(())
}

/// Releases the lock once the operation has committed its state.
pub fn release(env: &Env) {
    set_reentrancy_guard(env, &ReentrancyGuard { locked: false });
}

pub fn is_locked(env: &Env) -> bool {
    get_reentrancy_guard(env).locked
}
