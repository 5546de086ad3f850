use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;

// ── Storage key constants ───────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const WORKER: Symbol = symbol_short!("WORKER");

// ── Admin ───────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(ContractError::NotInitialized)
}

/// Guard: revert if `caller` is not the stored admin.
///
/// The caller must already have been authenticated via `require_auth()`.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if *caller != get_admin(env)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// ── Two-step admin hand-over ────────────────────────────────────────────────

pub fn set_pending_admin(env: &Env, proposed: &Address) {
    env.storage().instance().set(&PENDING_ADMIN, proposed);
}

pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_ADMIN)
}

pub fn clear_pending_admin(env: &Env) {
    env.storage().instance().remove(&PENDING_ADMIN);
}

// ── Worker ──────────────────────────────────────────────────────────────────

pub fn set_worker(env: &Env, worker: &Address) {
    env.storage().instance().set(&WORKER, worker);
}

pub fn get_worker(env: &Env) -> Option<Address> {
    env.storage().instance().get(&WORKER)
}
