//! Emergency pause control for state-changing ledger operations.
//!
//! When paused, grant, schedule, exercise, sweep and transfer entrypoints
//! reject execution. Read-only queries remain available.

use crate::admin::AccessGuard;
use crate::errors::OptionGrantError;
use crate::events::{emit_paused, emit_unpaused};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const PAUSED_KEY: Symbol = symbol_short!("paused");

pub struct PauseControl;

impl PauseControl {
    /// Returns true when the ledger is paused.
    pub fn is_paused(env: &Env) -> bool {
        env.storage().instance().get(&PAUSED_KEY).unwrap_or(false)
    }

    /// Pause or unpause the ledger (principal only).
    pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), OptionGrantError> {
        AccessGuard::require_principal(env, caller)?;
        env.storage().instance().set(&PAUSED_KEY, &paused);
        if paused {
            emit_paused(env, caller);
        } else {
            emit_unpaused(env, caller);
        }
        Ok(())
    }

    /// Reject state-changing operations when the ledger is paused.
    pub fn require_not_paused(env: &Env) -> Result<(), OptionGrantError> {
        if Self::is_paused(env) {
            return Err(OptionGrantError::ProtocolPaused);
        }
        Ok(())
    }
}
