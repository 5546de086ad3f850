use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::errors::ContractError;

const CLOCK: Symbol = symbol_short!("CLOCK");

pub const DAY: u64 = 86_400;
pub const DEFAULT_UNBOND_PERIOD: u64 = 7 * DAY;
pub const DEFAULT_EXPIRY_WINDOW: u64 = DAY;

/// Unbonding timing parameters.
///
/// Outstanding unbond timestamps are always judged against the clock that is
/// installed when `withdraw` runs, not the one that was installed when the
/// user unbonded. Replacing either duration therefore moves every pending
/// position's maturity and expiry at once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnbondClock {
    /// Seconds after `unbond` before the tranche can be withdrawn.
    pub unbond_period: u64,
    /// Seconds after maturity during which the withdrawal must happen.
    pub expiry_window: u64,
}

impl Default for UnbondClock {
    fn default() -> Self {
        UnbondClock {
            unbond_period: DEFAULT_UNBOND_PERIOD,
            expiry_window: DEFAULT_EXPIRY_WINDOW,
        }
    }
}

impl UnbondClock {
    pub fn new(unbond_period: u64, expiry_window: u64) -> Self {
        UnbondClock {
            unbond_period,
            expiry_window,
        }
    }

    pub fn load(env: &Env) -> Result<UnbondClock, ContractError> {
        env.storage()
            .instance()
            .get(&CLOCK)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn save(&self, env: &Env) {
        env.storage().instance().set(&CLOCK, self);
    }

    /// `now >= unbond_time + unbond_period`
    pub fn is_mature(&self, unbond_time: u64, now: u64) -> bool {
        now >= unbond_time.saturating_add(self.unbond_period)
    }

    /// `now > unbond_time + unbond_period + expiry_window`
    pub fn is_expired(&self, unbond_time: u64, now: u64) -> bool {
        now > unbond_time
            .saturating_add(self.unbond_period)
            .saturating_add(self.expiry_window)
    }

    pub fn set_period(&mut self, new_period: u64) {
        self.unbond_period = new_period;
    }

    pub fn set_expiry_window(&mut self, new_window: u64) {
        self.expiry_window = new_window;
    }
}
