use soroban_sdk::{contracttype, symbol_short, Env, Symbol, I256};

use crate::errors::ContractError;

const POOL: Symbol = symbol_short!("POOL");

/// Pool-wide custody and share supply.
///
/// The two counters are stored as one instance entry and always written
/// together, so no invocation can observe one updated without the other.
/// `total_shares == 0` if and only if `total_staked == 0`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SharePool {
    /// Base-asset units custodied for stakers.
    pub total_staked: i128,
    /// Shares outstanding across all users.
    pub total_shares: i128,
}

impl SharePool {
    pub fn load(env: &Env) -> SharePool {
        env.storage().instance().get(&POOL).unwrap_or_default()
    }

    pub fn save(&self, env: &Env) {
        env.storage().instance().set(&POOL, self);
    }

    /// Accept `amount` of the base asset and mint shares for it.
    ///
    /// The first deposit into an empty pool mints 1:1; afterwards shares are
    /// minted at the current exchange rate, rounded down. A deposit too small
    /// to mint a single share is rejected rather than absorbed.
    pub fn deposit(&mut self, env: &Env, amount: i128) -> Result<i128, ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let minted = if self.total_shares == 0 {
            amount
        } else {
            mul_div_floor(env, amount, self.total_shares, self.total_staked)?
        };
        if minted <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let total_shares = self
            .total_shares
            .checked_add(minted)
            .ok_or(ContractError::ArithmeticOverflow)?;

        self.total_staked = total_staked;
        self.total_shares = total_shares;
        Ok(minted)
    }

    /// Base-asset value of `share_amount` at the current rate, rounded down.
    pub fn value_of(&self, env: &Env, share_amount: i128) -> Result<i128, ContractError> {
        if self.total_shares == 0 {
            return Ok(0);
        }
        mul_div_floor(env, share_amount, self.total_staked, self.total_shares)
    }

    /// Retire `share_amount` shares together with the `asset_amount` paid out
    /// for them. `asset_amount` must be the `value_of` computed for this burn;
    /// anything negative or beyond the current supply is `InvalidAmount`.
    pub fn burn(&mut self, share_amount: i128, asset_amount: i128) -> Result<(), ContractError> {
        if share_amount < 0
            || asset_amount < 0
            || share_amount > self.total_shares
            || asset_amount > self.total_staked
        {
            return Err(ContractError::InvalidAmount);
        }

        self.total_shares -= share_amount;
        self.total_staked -= asset_amount;
        Ok(())
    }
}

/// `floor(a * b / d)` for non-negative operands.
///
/// The product is formed in 256 bits so 18-decimal balances do not overflow
/// before the division; only a quotient outside `i128` is an overflow.
fn mul_div_floor(env: &Env, a: i128, b: i128, d: i128) -> Result<i128, ContractError> {
    if a < 0 || b < 0 || d <= 0 {
        return Err(ContractError::ArithmeticOverflow);
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, d))
        .to_i128()
        .ok_or(ContractError::ArithmeticOverflow)
}
