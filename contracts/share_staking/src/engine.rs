//! Transition logic for the stake / unbond / withdraw cycle.
//!
//! The engine works on in-memory copies of the pool and one user record and
//! only writes back through `&mut` once every check and the asset movement
//! have succeeded. Durable storage stays with the caller, so a different
//! [`StakingEngine`] can be swapped in over the same pool and ledger without
//! migrating anything.

use soroban_sdk::{Address, Env};

use crate::{
    asset::AssetAdapter,
    clock::UnbondClock,
    errors::ContractError,
    ledger::{Lifecycle, PendingUnbond, UserRecord},
    pool::SharePool,
};

pub trait StakingEngine {
    /// Host environment backing the wide share arithmetic.
    fn env(&self) -> &Env;

    /// Timing parameters in force for this invocation.
    fn clock(&self) -> &UnbondClock;

    /// Deposit `amount` for `user` and credit the minted shares.
    ///
    /// Allowed in any lifecycle state; a pending unbond is left untouched.
    fn stake<A: AssetAdapter>(
        &self,
        asset: &A,
        user: &Address,
        pool: &mut SharePool,
        record: &mut UserRecord,
        amount: i128,
    ) -> Result<i128, ContractError> {
        let mut next_pool = pool.clone();
        let minted = next_pool.deposit(self.env(), amount)?;
        let share = record
            .share
            .checked_add(minted)
            .ok_or(ContractError::ArithmeticOverflow)?;

        asset.transfer_in(user, amount)?;

        *pool = next_pool;
        record.share = share;
        Ok(minted)
    }

    /// Lock `share_amount` for withdrawal, starting the clock at `now`.
    ///
    /// A second call while already unbonding replaces the earlier request.
    fn unbond(
        &self,
        record: &mut UserRecord,
        share_amount: i128,
        now: u64,
    ) -> Result<(), ContractError> {
        if share_amount <= 0 || share_amount > record.share {
            return Err(ContractError::InsufficientShare);
        }

        record.lifecycle = Lifecycle::Unbonding(PendingUnbond {
            since: now,
            locked_share: share_amount,
        });
        Ok(())
    }

    /// Check the withdraw guards in order and return the pending tranche.
    fn withdrawable(&self, record: &UserRecord, now: u64) -> Result<PendingUnbond, ContractError> {
        let pending = match &record.lifecycle {
            Lifecycle::Idle => return Err(ContractError::NotUnbonding),
            Lifecycle::Unbonding(pending) => pending.clone(),
        };
        if !self.clock().is_mature(pending.since, now) {
            return Err(ContractError::NotValid);
        }
        if self.clock().is_expired(pending.since, now) {
            return Err(ContractError::AlreadyExpired);
        }
        Ok(pending)
    }

    /// Redeem the pending tranche, pay it to `user` and reset the record.
    fn withdraw<A: AssetAdapter>(
        &self,
        asset: &A,
        user: &Address,
        pool: &mut SharePool,
        record: &mut UserRecord,
        now: u64,
    ) -> Result<i128, ContractError> {
        let pending = self.withdrawable(record, now)?;

        let mut next_pool = pool.clone();
        let payout = next_pool.value_of(self.env(), pending.locked_share)?;
        next_pool.burn(pending.locked_share, payout)?;
        let share = record
            .share
            .checked_sub(pending.locked_share)
            .filter(|s| *s >= 0)
            .ok_or(ContractError::ArithmeticOverflow)?;

        if payout > 0 {
            asset.transfer_out(user, payout)?;
        }

        *pool = next_pool;
        record.share = share;
        record.lifecycle = Lifecycle::Idle;
        Ok(payout)
    }
}

/// The production engine: standard transitions driven by the installed clock.
pub struct ShareEngine {
    env: Env,
    clock: UnbondClock,
}

impl ShareEngine {
    pub fn new(env: &Env, clock: UnbondClock) -> Self {
        ShareEngine {
            env: env.clone(),
            clock,
        }
    }
}

impl StakingEngine for ShareEngine {
    fn env(&self) -> &Env {
        &self.env
    }

    fn clock(&self) -> &UnbondClock {
        &self.clock
    }
}
