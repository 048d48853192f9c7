use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // ~30 days in 5s ledgers
const BALANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const BALANCE_BUMP_AMOUNT: u32 = 518_400;

#[contracttype]
#[derive(Clone)]
pub enum CreditTokenKey {
    Balance(Address),
    Allowance(Address, Address),
    TotalSupply,
    Admin,
    MintingEnabled,
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&CreditTokenKey::Admin)
}

pub fn read_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&CreditTokenKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&CreditTokenKey::Admin, admin);
}

pub fn read_minting_enabled(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&CreditTokenKey::MintingEnabled)
        .unwrap_or(false)
}

pub fn write_minting_enabled(env: &Env, enabled: bool) {
    env.storage().instance().set(&CreditTokenKey::MintingEnabled, &enabled);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&CreditTokenKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, total_supply: i128) {
    env.storage().instance().set(&CreditTokenKey::TotalSupply, &total_supply);
}

/// Missing balances read as zero.
pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = CreditTokenKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, balance: i128) {
    let key = CreditTokenKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Missing allowances read as zero.
pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = CreditTokenKey::Allowance(owner.clone(), spender.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = CreditTokenKey::Allowance(owner.clone(), spender.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
