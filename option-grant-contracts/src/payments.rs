//! Token movement out of the contract.
//!
//! The ledger never keeps token balances itself. It only asks a
//! [`TokenTransferPort`] for the contract's balance and to move value from
//! the contract to a recipient.

use crate::errors::OptionGrantError;
use soroban_sdk::{token, Address, Env};

pub trait TokenTransferPort {
    /// Balance held by `holder`.
    fn balance_of(&self, holder: &Address) -> i128;

    /// Move `amount` from the contract to `to`.
    fn transfer(&self, to: &Address, amount: i128) -> Result<(), OptionGrantError>;
}

/// [`TokenTransferPort`] over a Soroban token contract, paying out of the
/// current contract's own balance.
pub struct TokenPort<'a> {
    env: &'a Env,
    token: Address,
}

impl<'a> TokenPort<'a> {
    pub fn new(env: &'a Env, token: Address) -> Self {
        Self { env, token }
    }
}

impl TokenTransferPort for TokenPort<'_> {
    fn balance_of(&self, holder: &Address) -> i128 {
        token::Client::new(self.env, &self.token).balance(holder)
    }

    fn transfer(&self, to: &Address, amount: i128) -> Result<(), OptionGrantError> {
        let client = token::Client::new(self.env, &self.token);
        let contract = self.env.current_contract_address();
        match client.try_transfer(&contract, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(OptionGrantError::TransferFailed),
        }
    }
}
