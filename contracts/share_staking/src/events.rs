#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::clock::UnbondClock;
use crate::ledger::PendingUnbond;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub asset: Address,
    pub unbond_period: u64,
    pub expiry_window: u64,
    pub timestamp: u64,
}

/// Fired when a user deposits into the pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub user: Address,
    pub amount: i128,
    pub minted_share: i128,
    pub total_staked: i128,
    pub total_shares: i128,
    pub timestamp: u64,
}

/// Fired when a user locks shares for withdrawal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnbondedEvent {
    pub user: Address,
    pub share: i128,
    pub timestamp: u64,
}

/// Fired when a new unbond request replaces one still pending; the earlier
/// tranche is no longer withdrawable.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnbondCancelledEvent {
    pub user: Address,
    pub share: i128,
    pub unbond_time: u64,
    pub timestamp: u64,
}

/// Fired when a pending tranche is redeemed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub user: Address,
    pub share: i128,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkerSetEvent {
    pub worker: Address,
    pub timestamp: u64,
}

/// Fired whenever any part of the unbond clock is replaced.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClockChangedEvent {
    pub unbond_period: u64,
    pub expiry_window: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CodeUpgradedEvent {
    pub wasm_hash: BytesN<32>,
    pub timestamp: u64,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, asset: Address, clock: &UnbondClock) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            asset,
            unbond_period: clock.unbond_period,
            expiry_window: clock.expiry_window,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    user: Address,
    amount: i128,
    minted_share: i128,
    total_staked: i128,
    total_shares: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), user.clone()),
        StakedEvent {
            user,
            amount,
            minted_share,
            total_staked,
            total_shares,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unbonded(env: &Env, user: Address, share: i128) {
    env.events().publish(
        (symbol_short!("UNBOND"), user.clone()),
        UnbondedEvent {
            user,
            share,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unbond_cancelled(env: &Env, user: Address, replaced: &PendingUnbond) {
    env.events().publish(
        (symbol_short!("UNB_CNCL"), user.clone()),
        UnbondCancelledEvent {
            user,
            share: replaced.locked_share,
            unbond_time: replaced.since,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, user: Address, share: i128, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), user.clone()),
        WithdrawnEvent {
            user,
            share,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_worker_set(env: &Env, worker: Address) {
    env.events().publish(
        (symbol_short!("WORKER"),),
        WorkerSetEvent {
            worker,
            timestamp: env.ledger().timestamp(),
        },
    );
}

/// `topic` distinguishes a single-field change (`PERIOD`, `WINDOW`) from a
/// wholesale config upgrade (`CFG_UPG`).
pub fn publish_clock_changed(env: &Env, topic: soroban_sdk::Symbol, clock: &UnbondClock) {
    env.events().publish(
        (topic,),
        ClockChangedEvent {
            unbond_period: clock.unbond_period,
            expiry_window: clock.expiry_window,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_code_upgraded(env: &Env, wasm_hash: BytesN<32>) {
    env.events().publish(
        (symbol_short!("CODE_UPG"),),
        CodeUpgradedEvent {
            wasm_hash,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
