use soroban_sdk::contracterror;

/// Every way a `ShareStaking` invocation can fail.
///
/// A failing invocation is rolled back in full by the host, so none of these
/// leave the pool or a user record partially updated.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // ── Lifecycle ────────────────────────────────────────────
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // ── Auth ─────────────────────────────────────────────────
    Unauthorized = 3,

    // ── Staking state machine ────────────────────────────────
    /// Zero, negative, or dust amount passed to `stake`, or a burn beyond the
    /// pool's supply.
    InvalidAmount = 4,
    /// `unbond` asked for more shares than the user owns (or for none).
    InsufficientShare = 5,
    /// `withdraw` called while the user is idle.
    NotUnbonding = 6,
    /// `withdraw` called before the unbonding period has elapsed.
    NotValid = 7,
    /// `withdraw` called after the expiry window lapsed.
    AlreadyExpired = 8,

    // ── External asset ───────────────────────────────────────
    TransferFailed = 9,

    // ── Accounting ───────────────────────────────────────────
    /// A counter or share conversion left the `i128` range.
    ArithmeticOverflow = 10,

    // ── Admin hand-over ──────────────────────────────────────
    NoPendingAdmin = 11,
}
