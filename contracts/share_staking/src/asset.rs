use soroban_sdk::{log, token, Address, Env};

use crate::errors::ContractError;

/// Movement of the pool's base asset between a user and the contract.
pub trait AssetAdapter {
    /// Pull `amount` from `from` into pool custody.
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), ContractError>;
    /// Pay `amount` out of pool custody to `to`.
    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), ContractError>;
}

/// [`AssetAdapter`] backed by a SEP-41 token contract.
pub struct TokenAdapter<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl<'a> TokenAdapter<'a> {
    pub fn new(env: &'a Env, asset: &Address) -> Self {
        TokenAdapter {
            env,
            client: token::Client::new(env, asset),
        }
    }
}

impl AssetAdapter for TokenAdapter<'_> {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), ContractError> {
        match self
            .client
            .try_transfer(from, &self.env.current_contract_address(), &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "transfer_in rejected", from.clone(), amount);
                Err(ContractError::TransferFailed)
            }
        }
    }

    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), ContractError> {
        match self
            .client
            .try_transfer(&self.env.current_contract_address(), to, &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "transfer_out rejected", to.clone(), amount);
                Err(ContractError::TransferFailed)
            }
        }
    }
}
