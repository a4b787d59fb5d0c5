#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod admin;
mod clock;
mod errors;
mod events;
mod init;
mod ledger;
mod pause;
mod payments;
mod reentrancy;
mod storage;
pub mod types;
mod vesting;

use admin::AccessGuard;
use clock::{Clock, LedgerClock};
use init::LedgerInitializer;
use ledger::GrantLedger;
use pause::PauseControl;
use payments::TokenPort;
use types::{GrantRecord, LedgerConfig, OptionPool};

pub use clock::ClockSource;
pub use errors::OptionGrantError;
pub use init::InitializationParams;

#[contract]
pub struct OptionGrantContract;

fn ledger_clock(env: &Env) -> Result<LedgerClock<'_>, OptionGrantError> {
    let config = LedgerInitializer::config(env)?;
    Ok(LedgerClock::new(env, config.clock))
}

fn token_port(env: &Env) -> Result<Option<TokenPort<'_>>, OptionGrantError> {
    let config = LedgerInitializer::config(env)?;
    Ok(config.token.map(|token| TokenPort::new(env, token)))
}

#[contractimpl]
impl OptionGrantContract {
    // ============================================================================
    // Initialization and Administration
    // ============================================================================

    /// Initialize the ledger with its principal, pool size, token and clock (one-time setup)
    pub fn initialize(env: Env, params: InitializationParams) -> Result<(), OptionGrantError> {
        params.principal.require_auth();
        LedgerInitializer::initialize(&env, &params)
    }

    /// Check if the ledger has been initialized
    pub fn is_initialized(env: Env) -> bool {
        LedgerInitializer::is_initialized(&env)
    }

    /// Get the principal address
    ///
    /// # Returns
    /// * `Some(Address)` once initialized
    /// * `None` before initialization
    pub fn get_principal(env: Env) -> Option<Address> {
        AccessGuard::get_principal(&env)
    }

    pub fn get_config(env: Env) -> Option<LedgerConfig> {
        LedgerInitializer::config(&env).ok()
    }

    /// Pause the ledger (principal only). While paused, mutating operations fail with ProtocolPaused.
    pub fn pause(env: Env, caller: Address) -> Result<(), OptionGrantError> {
        caller.require_auth();
        PauseControl::set_paused(&env, &caller, true)
    }

    /// Unpause the ledger (principal only).
    pub fn unpause(env: Env, caller: Address) -> Result<(), OptionGrantError> {
        caller.require_auth();
        PauseControl::set_paused(&env, &caller, false)
    }

    pub fn is_paused(env: Env) -> bool {
        PauseControl::is_paused(&env)
    }

    // ============================================================================
    // Grant Management
    // ============================================================================

    /// Grant options from the pool to a beneficiary (principal only).
    ///
    /// # Errors
    /// * `Unauthorized` if caller is not the principal
    /// * `InvalidBeneficiary` if the beneficiary is this contract
    /// * `InvalidAmount` if amount <= 0
    /// * `GrantAlreadyExists` if the beneficiary already holds a grant
    /// * `InsufficientPool` if amount exceeds the remaining pool
    pub fn grant_options(
        env: Env,
        caller: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), OptionGrantError> {
        caller.require_auth();
        GrantLedger::grant_options(&env, &caller, &beneficiary, amount)
    }

    /// Start vesting a beneficiary's grant now (principal only, once per grant).
    ///
    /// # Arguments
    /// * `vesting_period` - Clock units after the cliff over which the grant vests linearly
    /// * `cliff_period` - Clock units after the start during which nothing vests
    pub fn set_vesting_schedule(
        env: Env,
        caller: Address,
        beneficiary: Address,
        vesting_period: u64,
        cliff_period: u64,
    ) -> Result<(), OptionGrantError> {
        caller.require_auth();
        let clock = ledger_clock(&env)?;
        GrantLedger::set_vesting_schedule(
            &env,
            &clock,
            &caller,
            &beneficiary,
            vesting_period,
            cliff_period,
        )
    }

    /// Sweep vesting progress into all unexercised grants (principal only).
    ///
    /// # Returns
    /// * Total newly vested options added to the pool's `total_vested`
    pub fn vest_options(env: Env, caller: Address) -> Result<i128, OptionGrantError> {
        caller.require_auth();
        let clock = ledger_clock(&env)?;
        GrantLedger::vest_options(&env, &clock, &caller)
    }

    // ============================================================================
    // Beneficiary Operations
    // ============================================================================

    /// Exercise vested options of the caller's own grant. Succeeds at most once per grant.
    ///
    /// # Errors
    /// * `InvalidAmount` if amount <= 0
    /// * `GrantNotFound` if the caller holds no grant
    /// * `AlreadyExercised` on any call after the first success
    /// * `InsufficientVested` if amount exceeds vested, unexercised options
    /// * `TransferFailed` if the token payout fails
    /// * `ReentrancyDetected` if called from within another exercise or transfer
    pub fn exercise_options(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), OptionGrantError> {
        caller.require_auth();
        let clock = ledger_clock(&env)?;
        let port = token_port(&env)?;
        GrantLedger::exercise_options(&env, &clock, port.as_ref(), &caller, amount)
    }

    // ============================================================================
    // Token Operations
    // ============================================================================

    /// Transfer tokens held by the contract to a recipient (principal only).
    ///
    /// # Errors
    /// * `TokenNotConfigured` if the ledger was initialized without a token
    /// * `InsufficientBalance` if the contract holds less than amount
    pub fn transfer_tokens(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), OptionGrantError> {
        caller.require_auth();
        let port = token_port(&env)?;
        GrantLedger::transfer_tokens(&env, port.as_ref(), &caller, &recipient, amount)
    }

    // ============================================================================
    // Queries
    // ============================================================================

    /// Vested options of a beneficiary at an explicit clock reading. Pure; no auth.
    pub fn calculate_vested_options(env: Env, beneficiary: Address, now: u64) -> i128 {
        GrantLedger::calculate_vested_options(&env, &beneficiary, now)
    }

    /// Vested options of a beneficiary at the current clock reading.
    pub fn get_vested_options(env: Env, beneficiary: Address) -> Result<i128, OptionGrantError> {
        let clock = ledger_clock(&env)?;
        Ok(GrantLedger::calculate_vested_options(
            &env,
            &beneficiary,
            clock.now(),
        ))
    }

    /// Options a beneficiary could exercise right now.
    pub fn get_exercisable_options(
        env: Env,
        beneficiary: Address,
    ) -> Result<i128, OptionGrantError> {
        let clock = ledger_clock(&env)?;
        Ok(GrantLedger::exercisable_options(
            &env,
            &beneficiary,
            clock.now(),
        ))
    }

    pub fn get_pool(env: Env) -> Result<OptionPool, OptionGrantError> {
        GrantLedger::pool(&env)
    }

    pub fn get_grant(env: Env, beneficiary: Address) -> Option<GrantRecord> {
        GrantLedger::grant(&env, &beneficiary)
    }

    /// Beneficiaries in grant order.
    pub fn get_beneficiaries(env: Env) -> Vec<Address> {
        storage::GrantStorage::beneficiaries(&env)
    }
}

#[cfg(test)]
mod test_reentrancy;
#[cfg(test)]
mod test_events;
