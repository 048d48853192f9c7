use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // ~30 days in 5s ledgers

#[contracttype]
pub enum DataKey {
    CreditToken,
    BaseLedger,
    Pool,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Pool)
}

pub fn set_collaborators(env: &Env, credit_token: &Address, base_ledger: &Address, pool: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::CreditToken, credit_token);
    instance.set(&DataKey::BaseLedger, base_ledger);
    instance.set(&DataKey::Pool, pool);
}

pub fn get_credit_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::CreditToken)
}

pub fn get_base_ledger(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::BaseLedger)
}

pub fn get_pool(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Pool)
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
