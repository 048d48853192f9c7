use soroban_sdk::contracttype;

/// Point-in-time view of the pool aggregate.
///
/// `exchange_rate` is quoted as credit per unit of base currency and is zero
/// while the pool is empty.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolSnapshot {
    pub credit_reserve: i128,
    pub base_reserve: i128,
    pub total_shares: i128,
    pub fee_rate_bps: u32,
    pub exchange_rate: i128,
    pub seeded: bool,
}

/// Pool snapshot enriched with one provider's position.
///
/// `share_fraction` is `shares / total_shares` rounded half-up for display,
/// where `decimal::SCALE` means the provider owns the entire pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityInfo {
    pub pool: PoolSnapshot,
    pub provider_shares: i128,
    pub share_fraction: i128,
}

/// Result of pricing a swap against the current reserves without executing it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    pub amount_out: i128,
    pub fee: i128,
    /// Input paid per unit of output received: credit per base when selling
    /// credit, base per credit when selling base. Only the former shares a
    /// unit with the pool's exchange rate.
    pub effective_rate: i128,
}
