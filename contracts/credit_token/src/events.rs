use soroban_sdk::{symbol_short, Address, Env};

/// Events not covered by the SEP-41 helpers in `soroban-token-sdk`.
pub struct CreditTokenEvents;

impl CreditTokenEvents {
    /// Topics: `("approve", owner, spender)`
    /// Data:   `amount`
    pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("approve"), owner, spender), amount);
    }

    /// Emitted once, when the admin permanently switches minting off.
    pub fn minting_disabled(env: &Env, admin: &Address) {
        env.events().publish((symbol_short!("mint_off"), admin), ());
    }
}
