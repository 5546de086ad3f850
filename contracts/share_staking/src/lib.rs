#![no_std]

//! Share-based staking pool with a two-phase unbond / withdraw exit.
//!
//! Users deposit a single base asset and receive pool shares at the current
//! exchange rate. Exiting is a two-step process: `unbond` locks a number of
//! shares and starts the clock, then `withdraw` redeems them once the
//! unbonding period has passed and before the expiry window closes.
//!
//! Durable state (pool counters, user records, unbond clock) is kept apart
//! from the transition logic in [`engine`], so the admin may replace either
//! the clock (`upgrade_config`) or the code itself (`upgrade`) without
//! touching user or pool storage.

pub mod access;
pub mod asset;
pub mod clock;
pub mod engine;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod pool;

use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, Address, BytesN, Env, Symbol,
};

use asset::TokenAdapter;
use engine::{ShareEngine, StakingEngine};

pub use clock::{UnbondClock, DAY, DEFAULT_EXPIRY_WINDOW, DEFAULT_UNBOND_PERIOD};
pub use errors::ContractError;
pub use ledger::{Lifecycle, PendingUnbond, UserInfo, UserRecord, UserStatus};
pub use pool::SharePool;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const ASSET: Symbol = symbol_short!("ASSET");

const INSTANCE_TTL_THRESHOLD: u32 = 518_400;
const INSTANCE_TTL_EXTEND_TO: u32 = 1_036_800;

const CONTRACT_VERSION: u32 = 1;

contractmeta!(
    key = "Description",
    val = "Share-based staking pool with unbond cooldown and expiry"
);

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct ShareStaking;

#[contractimpl]
impl ShareStaking {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `asset`         – SEP-41 token users stake and are paid out in.
    /// * `unbond_period` – seconds between `unbond` and the earliest `withdraw`.
    /// * `expiry_window` – seconds after maturity before the tranche lapses.
    pub fn initialize(
        env: Env,
        admin: Address,
        asset: Address,
        unbond_period: u64,
        expiry_window: u64,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        let clock = UnbondClock::new(unbond_period, expiry_window);

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&ASSET, &asset);
        access::set_admin(&env, &admin);
        clock.save(&env);
        SharePool::default().save(&env);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);

        events::publish_initialized(&env, admin, asset, &clock);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of the base asset and return the shares minted.
    ///
    /// Permitted while an unbond is pending; the pending request is kept.
    pub fn stake(env: Env, user: Address, amount: i128) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        user.require_auth();

        let engine = Self::engine(&env)?;
        let asset = TokenAdapter::new(&env, &Self::get_asset(env.clone())?);
        let mut pool = SharePool::load(&env);
        let mut record = ledger::load_user(&env, &user);

        let minted = engine.stake(&asset, &user, &mut pool, &mut record, amount)?;

        pool.save(&env);
        ledger::store_user(&env, &user, &record);

        events::publish_staked(
            &env,
            user,
            amount,
            minted,
            pool.total_staked,
            pool.total_shares,
        );

        Ok(minted)
    }

    /// Lock `share` shares for withdrawal, starting the unbonding clock now.
    ///
    /// Calling again while already unbonding replaces the earlier request,
    /// restarts its clock and reports the replaced tranche as `UNB_CNCL`.
    pub fn unbond(env: Env, user: Address, share: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        user.require_auth();

        let engine = Self::engine(&env)?;
        let mut record = ledger::load_user(&env, &user);
        let replaced = match &record.lifecycle {
            Lifecycle::Unbonding(pending) => Some(pending.clone()),
            Lifecycle::Idle => None,
        };

        engine.unbond(&mut record, share, env.ledger().timestamp())?;

        ledger::store_user(&env, &user, &record);

        if let Some(pending) = replaced {
            events::publish_unbond_cancelled(&env, user.clone(), &pending);
        }
        events::publish_unbonded(&env, user, share);

        Ok(())
    }

    /// Redeem the pending tranche and return the amount paid out.
    ///
    /// Fails with `NotUnbonding` when idle, `NotValid` before maturity and
    /// `AlreadyExpired` once the expiry window has lapsed, checked in that
    /// order against the clock installed right now.
    pub fn withdraw(env: Env, user: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        user.require_auth();

        let engine = Self::engine(&env)?;
        let asset = TokenAdapter::new(&env, &Self::get_asset(env.clone())?);
        let mut pool = SharePool::load(&env);
        let mut record = ledger::load_user(&env, &user);
        let share = record.info().unbond_share;

        let payout = engine
            .withdraw(
                &asset,
                &user,
                &mut pool,
                &mut record,
                env.ledger().timestamp(),
            )
            .inspect_err(|e| {
                let code = *e as u32;
                log!(&env, "withdraw rejected", user.clone(), code);
            })?;

        pool.save(&env);
        ledger::store_user(&env, &user, &record);

        events::publish_withdrawn(&env, user, share, payout);

        Ok(payout)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the user's position; unknown users read as idle and empty.
    pub fn get_user(env: Env, user: Address) -> UserInfo {
        ledger::load_user(&env, &user).info()
    }

    pub fn get_pool(env: Env) -> SharePool {
        SharePool::load(&env)
    }

    pub fn get_config(env: Env) -> Result<UnbondClock, ContractError> {
        UnbondClock::load(&env)
    }

    /// Asset value of the user's current shares at today's exchange rate.
    pub fn get_stake_value(env: Env, user: Address) -> Result<i128, ContractError> {
        let record = ledger::load_user(&env, &user);
        SharePool::load(&env).value_of(&env, record.share)
    }

    pub fn get_asset(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ASSET)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_worker(env: Env) -> Option<Address> {
        access::get_worker(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Contract logic version.
    pub fn version() -> u32 {
        CONTRACT_VERSION
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        access::get_admin(&env)
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        access::get_pending_admin(&env)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    pub fn set_worker(env: Env, caller: Address, worker: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_admin(&env, &caller)?;

        access::set_worker(&env, &worker);

        events::publish_worker_set(&env, worker);

        Ok(())
    }

    /// Replace the unbonding period. Applies immediately to every pending
    /// unbond, including those started under the previous period.
    pub fn set_unbond_period(
        env: Env,
        caller: Address,
        new_period: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_admin(&env, &caller)?;

        let mut clock = UnbondClock::load(&env)?;
        clock.set_period(new_period);
        clock.save(&env);

        events::publish_clock_changed(&env, symbol_short!("PERIOD"), &clock);

        Ok(())
    }

    /// Replace the expiry window. Applies immediately to every pending unbond.
    pub fn set_expiry_window(
        env: Env,
        caller: Address,
        new_window: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_admin(&env, &caller)?;

        let mut clock = UnbondClock::load(&env)?;
        clock.set_expiry_window(new_window);
        clock.save(&env);

        events::publish_clock_changed(&env, symbol_short!("WINDOW"), &clock);

        Ok(())
    }

    /// Install a complete new clock in one step. Pool and user storage are
    /// left exactly as they are.
    pub fn upgrade_config(
        env: Env,
        caller: Address,
        clock: UnbondClock,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_admin(&env, &caller)?;

        clock.save(&env);

        events::publish_clock_changed(&env, symbol_short!("CFG_UPG"), &clock);

        Ok(())
    }

    /// Swap the contract code for an uploaded wasm, keeping all storage.
    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_admin(&env, &caller)?;

        events::publish_code_upgraded(&env, new_wasm_hash.clone());

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        access::require_admin(&env, &current_admin)?;

        access::set_pending_admin(&env, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the proposed admin can call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_admin.require_auth();

        let pending = access::get_pending_admin(&env).ok_or(ContractError::NoPendingAdmin)?;
        if new_admin != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_admin = access::get_admin(&env)?;
        access::set_admin(&env, &new_admin);
        access::clear_pending_admin(&env);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        access::require_admin(&env, &current_admin)?;

        let pending = access::get_pending_admin(&env).ok_or(ContractError::NoPendingAdmin)?;
        access::clear_pending_admin(&env);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized, otherwise keep
    /// the instance entry alive.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
        Ok(())
    }

    /// The engine for this invocation, bound to the clock installed now.
    fn engine(env: &Env) -> Result<ShareEngine, ContractError> {
        Ok(ShareEngine::new(env, UnbondClock::load(env)?))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;

#[cfg(test)]
mod test_upgrade;
