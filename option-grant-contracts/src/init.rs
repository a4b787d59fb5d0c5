//! One-time initialization of the option grant ledger.
//!
//! # Security Model
//!
//! - **One-time initialization**: the ledger can only be initialized once
//! - **Principal authorization**: the entrypoint requires auth from `principal`
//! - **Immutable principal**: nothing after initialization can change it
//!
//! # Initialization Flow
//!
//! 1. Call `initialize()` with [`InitializationParams`]
//! 2. Parameters are validated before any state changes
//! 3. Principal, pool and configuration are stored together
//! 4. An `init` event is emitted for the audit trail

use crate::admin::AccessGuard;
use crate::clock::ClockSource;
use crate::errors::OptionGrantError;
use crate::events::emit_initialized;
use crate::storage::{ConfigStorage, PoolStorage};
use crate::types::{LedgerConfig, OptionPool};
use soroban_sdk::{contracttype, log, symbol_short, Address, Env, Symbol};

/// Storage key for the initialization flag
const INITIALIZED_KEY: Symbol = symbol_short!("init");

/// Initialization parameters for the ledger
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializationParams {
    /// The company address; the only caller allowed to grant and sweep
    pub principal: Address,
    /// Starting size of the option pool
    pub total_options: i128,
    /// Token paid out on exercise. `None` tracks options without moving value.
    pub token: Option<Address>,
    /// Ledger counter that drives vesting
    pub clock: ClockSource,
}

pub struct LedgerInitializer;

impl LedgerInitializer {
    /// Initialize the ledger.
    ///
    /// # Returns
    /// * `Ok(())` if initialization succeeds
    /// * `Err(OptionGrantError::AlreadyInitialized)` on any later call
    /// * `Err(OptionGrantError::InvalidAmount)` if `total_options` is negative
    pub fn initialize(env: &Env, params: &InitializationParams) -> Result<(), OptionGrantError> {
        if Self::is_initialized(env) {
            return Err(OptionGrantError::AlreadyInitialized);
        }
        if params.total_options < 0 {
            return Err(OptionGrantError::InvalidAmount);
        }

        AccessGuard::store_principal(env, &params.principal);
        PoolStorage::set(
            env,
            &OptionPool {
                total_options: params.total_options,
                total_vested: 0,
            },
        );
        ConfigStorage::set(
            env,
            &LedgerConfig {
                token: params.token.clone(),
                clock: params.clock,
            },
        );

        // Commit point
        env.storage().instance().set(&INITIALIZED_KEY, &true);

        log!(env, "ledger initialized", params.total_options);
        emit_initialized(env, &params.principal, params.total_options);

        Ok(())
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&INITIALIZED_KEY)
            .unwrap_or(false)
    }

    /// Configuration written at initialization.
    pub fn config(env: &Env) -> Result<LedgerConfig, OptionGrantError> {
        ConfigStorage::get(env).ok_or(OptionGrantError::NotInitialized)
    }
}
