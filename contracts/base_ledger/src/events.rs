use soroban_sdk::{symbol_short, Address, Env};

pub struct LedgerEvents;

impl LedgerEvents {
    pub fn credit(env: &Env, to: &Address, amount: i128) {
        env.events().publish((symbol_short!("credit"), to), amount);
    }

    pub fn debit(env: &Env, from: &Address, amount: i128) {
        env.events().publish((symbol_short!("debit"), from), amount);
    }

    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
    }
}
