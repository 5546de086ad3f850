use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage key constants ───────────────────────────────────────────────────

const USER: Symbol = symbol_short!("USER");

const USER_TTL_THRESHOLD: u32 = 5_184_000;
const USER_TTL_EXTEND_TO: u32 = 10_368_000;

// ── Types ───────────────────────────────────────────────────────────────────

/// An unbond request waiting for its window.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingUnbond {
    /// Ledger timestamp of the `unbond` call.
    pub since: u64,
    /// Shares that `withdraw` will redeem. Always positive.
    pub locked_share: i128,
}

/// Where a user is in the unbond/withdraw cycle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Lifecycle {
    Idle,
    Unbonding(PendingUnbond),
}

/// Per-user position. Created on first access, reset to idle after a
/// withdrawal, never removed.
///
/// `share` still includes a pending `locked_share`; the locked tranche leaves
/// `share` only when it is withdrawn.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRecord {
    pub share: i128,
    pub lifecycle: Lifecycle,
}

impl Default for UserRecord {
    fn default() -> Self {
        UserRecord {
            share: 0,
            lifecycle: Lifecycle::Idle,
        }
    }
}

/// Numeric status reported by `get_user`.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum UserStatus {
    Idle = 0,
    Unbonding = 1,
}

/// Flat snapshot of a user's position returned by `get_user`.
///
/// Idle users always report `unbond_time == 0` and `unbond_share == 0`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserInfo {
    pub status: UserStatus,
    pub share: i128,
    pub unbond_time: u64,
    pub unbond_share: i128,
}

impl UserRecord {
    pub fn status(&self) -> UserStatus {
        match self.lifecycle {
            Lifecycle::Idle => UserStatus::Idle,
            Lifecycle::Unbonding(_) => UserStatus::Unbonding,
        }
    }

    pub fn info(&self) -> UserInfo {
        let (unbond_time, unbond_share) = match &self.lifecycle {
            Lifecycle::Idle => (0, 0),
            Lifecycle::Unbonding(pending) => (pending.since, pending.locked_share),
        };
        UserInfo {
            status: self.status(),
            share: self.share,
            unbond_time,
            unbond_share,
        }
    }
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn user_key(user: &Address) -> (Symbol, Address) {
    (USER, user.clone())
}

/// Fetch a user's record, defaulting to an idle, empty position.
pub fn load_user(env: &Env, user: &Address) -> UserRecord {
    let key = user_key(user);
    let record: Option<UserRecord> = env.storage().persistent().get(&key);
    match record {
        Some(record) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, USER_TTL_THRESHOLD, USER_TTL_EXTEND_TO);
            record
        }
        None => UserRecord::default(),
    }
}

/// Replace a user's record. Callers own all validation.
pub fn store_user(env: &Env, user: &Address, record: &UserRecord) {
    let key = user_key(user);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, USER_TTL_THRESHOLD, USER_TTL_EXTEND_TO);
}
