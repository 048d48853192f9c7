use soroban_sdk::{symbol_short, Address, Env};

pub struct PoolEvents;

impl PoolEvents {
    /// Topics: `("seed", provider)`
    /// Data:   `(credit_in, base_in, shares)`
    pub fn seed(env: &Env, provider: &Address, credit_in: i128, base_in: i128, shares: i128) {
        env.events()
            .publish((symbol_short!("seed"), provider), (credit_in, base_in, shares));
    }

    pub fn add_liquidity(
        env: &Env,
        provider: &Address,
        credit_in: i128,
        base_in: i128,
        shares: i128,
    ) {
        env.events()
            .publish((symbol_short!("add_liq"), provider), (credit_in, base_in, shares));
    }

    pub fn remove_liquidity(
        env: &Env,
        provider: &Address,
        credit_out: i128,
        base_out: i128,
        shares: i128,
    ) {
        env.events()
            .publish((symbol_short!("remove"), provider), (credit_out, base_out, shares));
    }

    /// Topics: `("swap", trader)`
    /// Data:   `(credit_in, base_in, credit_out, base_out, fee)`
    ///
    /// Exactly one of the inputs and one of the outputs is non-zero. The fee
    /// is denominated in the input asset.
    pub fn swap(
        env: &Env,
        trader: &Address,
        credit_in: i128,
        base_in: i128,
        credit_out: i128,
        base_out: i128,
        fee: i128,
    ) {
        env.events().publish(
            (symbol_short!("swap"), trader),
            (credit_in, base_in, credit_out, base_out, fee),
        );
    }

    pub fn sync(env: &Env, credit_reserve: i128, base_reserve: i128, total_shares: i128) {
        env.events()
            .publish((symbol_short!("sync"),), (credit_reserve, base_reserve, total_shares));
    }
}
