use soroban_sdk::contracterror;

/// Failure taxonomy shared by every exchange contract.
///
/// All variants are local, synchronous and non-retryable. An invocation that
/// returns one of them leaves every contract it touched unchanged.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExchangeError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Non-positive amount where a positive one is required, or an
    /// out-of-range percentage.
    InvalidAmount = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    InsufficientShares = 6,
    SlippageExceeded = 7,
    InsufficientReserve = 8,
    PoolWouldBeDrained = 9,
    /// The pool is still empty and the operation needs a seeded pool.
    PoolNotInitialized = 10,
    MintingDisabled = 11,
    AlreadyDisabled = 12,
    Unauthorized = 13,
    Locked = 14,
    Overflow = 15,
    DivisionByZero = 16,
    InvariantViolated = 17,
    InvalidConfig = 18,
}
