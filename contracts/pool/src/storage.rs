use carbonex_common::{
    decimal::{self, BPS_DENOMINATOR},
    ExchangeError,
};
use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // ~30 days in 5s ledgers

/// Fee charged on swap input: 3%.
pub const DEFAULT_FEE_RATE_BPS: u32 = 300;
/// Each asset seeded by the first provider, in whole units.
pub const DEFAULT_SEED_UNITS: i128 = 5_000;
/// Shares minted to the seeding provider, in whole units.
pub const DEFAULT_INITIAL_SHARE_UNITS: i128 = 100_000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub credit_token: Address,
    pub base_ledger: Address,
    pub fee_rate_bps: u32,
    /// Retained in the reserves on withdrawal. Zero disables it.
    pub withdrawal_fee_bps: u32,
    pub seed_credit: i128,
    pub seed_base: i128,
    pub initial_shares: i128,
}

impl PoolConfig {
    /// 3% swap fee, no withdrawal fee, 5000/5000 seed and 100000 initial shares.
    pub fn standard(credit_token: Address, base_ledger: Address) -> Result<Self, ExchangeError> {
        Ok(Self {
            credit_token,
            base_ledger,
            fee_rate_bps: DEFAULT_FEE_RATE_BPS,
            withdrawal_fee_bps: 0,
            seed_credit: decimal::from_units(DEFAULT_SEED_UNITS)?,
            seed_base: decimal::from_units(DEFAULT_SEED_UNITS)?,
            initial_shares: decimal::from_units(DEFAULT_INITIAL_SHARE_UNITS)?,
        })
    }

    pub fn validate(&self) -> Result<(), ExchangeError> {
        let bps_ok = |bps: u32| (bps as i128) < BPS_DENOMINATOR;
        if !bps_ok(self.fee_rate_bps) || !bps_ok(self.withdrawal_fee_bps) {
            return Err(ExchangeError::InvalidConfig);
        }
        if self.seed_credit <= 0 || self.seed_base <= 0 || self.initial_shares <= 0 {
            return Err(ExchangeError::InvalidConfig);
        }
        if self.credit_token == self.base_ledger {
            return Err(ExchangeError::InvalidConfig);
        }
        Ok(())
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub credit_reserve: i128,
    pub base_reserve: i128,
    pub total_shares: i128,
}

impl PoolState {
    pub fn empty() -> Self {
        Self { credit_reserve: 0, base_reserve: 0, total_shares: 0 }
    }

    pub fn is_seeded(&self) -> bool {
        self.total_shares > 0
    }
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ReentrancyGuard {
    pub locked: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    State,
    Guard,
    Shares(Address),
    ProviderCount,
}

pub fn get_config(env: &Env) -> Option<PoolConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn require_config(env: &Env) -> Result<PoolConfig, ExchangeError> {
    get_config(env).ok_or(ExchangeError::NotInitialized)
}

pub fn get_pool_state(env: &Env) -> PoolState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_else(PoolState::empty)
}

pub fn set_pool_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_reentrancy_guard(env: &Env) -> ReentrancyGuard {
    env.storage()
        .instance()
        .get(&DataKey::Guard)
        .unwrap_or(ReentrancyGuard { locked: false })
}

pub fn set_reentrancy_guard(env: &Env, guard: &ReentrancyGuard) {
    env.storage().instance().set(&DataKey::Guard, guard);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
