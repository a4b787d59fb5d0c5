//! Principal ("company") access control for the option grant ledger.
//!
//! # Security Model
//!
//! - Single principal address, captured once during initialization
//! - The principal is immutable: there is no transfer, delegation or
//!   secondary role
//! - Every principal-only operation compares the caller against the stored
//!   principal on each invocation
//!
//! Authentication of the caller (`require_auth`) happens at the contract
//! entrypoint; this module only answers whether the authenticated caller is
//! the principal.

use crate::errors::OptionGrantError;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

/// Storage key for the principal address
pub const PRINCIPAL_KEY: Symbol = symbol_short!("principal");

/// Principal storage and authorization checks
pub struct AccessGuard;

impl AccessGuard {
    /// Store the principal address.
    ///
    /// Only called by `LedgerInitializer::initialize`, which guarantees it
    /// runs once.
    pub(crate) fn store_principal(env: &Env, principal: &Address) {
        env.storage().instance().set(&PRINCIPAL_KEY, principal);
    }

    /// Get the principal address
    ///
    /// # Returns
    /// * `Some(Address)` once the ledger is initialized
    /// * `None` before initialization
    pub fn get_principal(env: &Env) -> Option<Address> {
        env.storage().instance().get(&PRINCIPAL_KEY)
    }

    /// Require that the caller is the principal.
    ///
    /// # Returns
    /// * `Ok(())` if `caller` is the stored principal
    /// * `Err(OptionGrantError::NotInitialized)` if no principal is stored yet
    /// * `Err(OptionGrantError::Unauthorized)` otherwise
    ///
    /// # Usage
    /// ```ignore
    /// AccessGuard::require_principal(&env, &caller)?;
    /// ```
    pub fn require_principal(env: &Env, caller: &Address) -> Result<(), OptionGrantError> {
        let principal = Self::get_principal(env).ok_or(OptionGrantError::NotInitialized)?;
        if principal != *caller {
            return Err(OptionGrantError::Unauthorized);
        }
        Ok(())
    }
}
