use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // ~30 days in 5s ledgers
const BALANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const BALANCE_BUMP_AMOUNT: u32 = 518_400;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Balance(Address),
}

pub fn read_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    let balance: Option<i128> = env.storage().persistent().get(&key);
    if balance.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }
    balance.unwrap_or(0)
}

pub fn write_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
