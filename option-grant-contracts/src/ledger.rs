//! Grant ledger: option pool, grant records and the exercise state machine.
//!
//! The principal grants options out of a fixed pool, assigns each grant a
//! cliff-plus-linear vesting schedule, and periodically sweeps vesting
//! progress into the records. Beneficiaries exercise their own grants once.
//!
//! Every operation validates everything first, performs the external token
//! transfer (if any) next, and only then persists state and emits events, so
//! a failure at any step leaves the ledger untouched.

use soroban_sdk::{log, Address, Env};

use crate::admin::AccessGuard;
use crate::clock::Clock;
use crate::errors::OptionGrantError;
use crate::events::{
    emit_options_exercised, emit_options_granted, emit_options_vested, emit_tokens_transferred,
};
use crate::pause::PauseControl;
use crate::payments::TokenTransferPort;
use crate::reentrancy::with_exercise_guard;
use crate::storage::{GrantStorage, PoolStorage};
use crate::types::{GrantRecord, OptionPool, VestingSchedule};
use crate::vesting::{exercisable_amount, vested_amount};

pub struct GrantLedger;

impl GrantLedger {
    pub fn pool(env: &Env) -> Result<OptionPool, OptionGrantError> {
        PoolStorage::get(env).ok_or(OptionGrantError::NotInitialized)
    }

    pub fn grant(env: &Env, beneficiary: &Address) -> Option<GrantRecord> {
        GrantStorage::get(env, beneficiary)
    }

    /// The contract cannot hold a grant or receive its own payouts.
    fn require_valid_recipient(env: &Env, recipient: &Address) -> Result<(), OptionGrantError> {
        if *recipient == env.current_contract_address() {
            return Err(OptionGrantError::InvalidBeneficiary);
        }
        Ok(())
    }

    /// Grant `amount` options from the pool to `beneficiary`.
    ///
    /// # Errors
    /// * `Unauthorized` if `caller` is not the principal
    /// * `ProtocolPaused` while paused
    /// * `InvalidBeneficiary` if `beneficiary` is the contract itself
    /// * `InvalidAmount` if `amount <= 0`
    /// * `GrantAlreadyExists` if `beneficiary` already holds a grant
    /// * `InsufficientPool` if `amount` exceeds the remaining pool
    pub fn grant_options(
        env: &Env,
        caller: &Address,
        beneficiary: &Address,
        amount: i128,
    ) -> Result<(), OptionGrantError> {
        AccessGuard::require_principal(env, caller)?;
        PauseControl::require_not_paused(env)?;
        Self::require_valid_recipient(env, beneficiary)?;

        if amount <= 0 {
            return Err(OptionGrantError::InvalidAmount);
        }
        if GrantStorage::has(env, beneficiary) {
            return Err(OptionGrantError::GrantAlreadyExists);
        }

        let mut pool = Self::pool(env)?;
        if amount > pool.total_options {
            return Err(OptionGrantError::InsufficientPool);
        }
        pool.total_options -= amount;

        PoolStorage::set(env, &pool);
        GrantStorage::set(env, &GrantRecord::new(beneficiary.clone(), amount));
        GrantStorage::register_beneficiary(env, beneficiary);

        log!(env, "options granted", beneficiary.clone(), amount);
        emit_options_granted(env, beneficiary, amount);
        Ok(())
    }

    /// Start vesting for `beneficiary`'s grant at the clock's current reading.
    ///
    /// A schedule can be assigned exactly once.
    pub fn set_vesting_schedule<C: Clock>(
        env: &Env,
        clock: &C,
        caller: &Address,
        beneficiary: &Address,
        vesting_period: u64,
        cliff_period: u64,
    ) -> Result<(), OptionGrantError> {
        AccessGuard::require_principal(env, caller)?;
        PauseControl::require_not_paused(env)?;
        Self::require_valid_recipient(env, beneficiary)?;

        let mut grant =
            GrantStorage::get(env, beneficiary).ok_or(OptionGrantError::GrantNotFound)?;
        if grant.options_granted <= 0 {
            return Err(OptionGrantError::GrantNotFound);
        }
        if grant.schedule.is_some() {
            return Err(OptionGrantError::ScheduleAlreadySet);
        }

        let start_time = clock.now();
        start_time
            .checked_add(cliff_period)
            .and_then(|cliff_end| cliff_end.checked_add(vesting_period))
            .ok_or(OptionGrantError::InvalidSchedule)?;

        grant.schedule = Some(VestingSchedule {
            start_time,
            cliff_period,
            vesting_period,
        });
        GrantStorage::set(env, &grant);

        log!(env, "vesting schedule set", beneficiary.clone(), start_time);
        emit_options_vested(env, beneficiary, 0, 0);
        Ok(())
    }

    /// Options vested for `beneficiary` at `now`; zero without a grant.
    pub fn calculate_vested_options(env: &Env, beneficiary: &Address, now: u64) -> i128 {
        GrantStorage::get(env, beneficiary)
            .map(|grant| vested_amount(&grant, now))
            .unwrap_or(0)
    }

    /// Options `beneficiary` could exercise at `now`.
    pub fn exercisable_options(env: &Env, beneficiary: &Address, now: u64) -> i128 {
        GrantStorage::get(env, beneficiary)
            .map(|grant| exercisable_amount(&grant, now))
            .unwrap_or(0)
    }

    /// Exercise `amount` vested options of the caller's own grant.
    ///
    /// One-shot: the first successful call latches the grant, and every later
    /// call fails with `AlreadyExercised`. When a token port is configured,
    /// `amount` token units are paid from the contract to the caller.
    pub fn exercise_options<C: Clock, P: TokenTransferPort>(
        env: &Env,
        clock: &C,
        port: Option<&P>,
        caller: &Address,
        amount: i128,
    ) -> Result<(), OptionGrantError> {
        PauseControl::require_not_paused(env)?;

        with_exercise_guard(env, || {
            if amount <= 0 {
                return Err(OptionGrantError::InvalidAmount);
            }

            let mut grant =
                GrantStorage::get(env, caller).ok_or(OptionGrantError::GrantNotFound)?;
            if grant.exercised {
                return Err(OptionGrantError::AlreadyExercised);
            }

            let available = vested_amount(&grant, clock.now()) - grant.exercised_options;
            if amount > available {
                return Err(OptionGrantError::InsufficientVested);
            }

            grant.exercised = true;
            grant.exercised_options += amount;

            if let Some(port) = port {
                port.transfer(caller, amount)?;
            }

            GrantStorage::set(env, &grant);

            log!(env, "options exercised", caller.clone(), amount);
            emit_options_exercised(env, caller, amount);
            Ok(())
        })
    }

    /// Sweep vesting progress into every unexercised grant.
    ///
    /// Visits beneficiaries once, in the order they were granted. Grants
    /// with no new vesting are skipped without an event. Returns the total
    /// added to `OptionPool::total_vested`.
    pub fn vest_options<C: Clock>(
        env: &Env,
        clock: &C,
        caller: &Address,
    ) -> Result<i128, OptionGrantError> {
        AccessGuard::require_principal(env, caller)?;
        PauseControl::require_not_paused(env)?;

        let mut pool = Self::pool(env)?;
        let now = clock.now();
        let mut swept: i128 = 0;

        for index in 0..GrantStorage::beneficiary_count(env) {
            let Some(beneficiary) = GrantStorage::beneficiary_at(env, index) else {
                continue;
            };
            let Some(mut grant) = GrantStorage::get(env, &beneficiary) else {
                continue;
            };
            if grant.options_granted <= 0 || grant.exercised {
                continue;
            }

            let delta = vested_amount(&grant, now) - grant.vested_options;
            if delta <= 0 {
                continue;
            }

            grant.vested_options += delta;
            swept += delta;
            GrantStorage::set(env, &grant);
            emit_options_vested(env, &beneficiary, delta, grant.vested_options);
        }

        pool.total_vested += swept;
        PoolStorage::set(env, &pool);

        log!(env, "vesting sweep", swept);
        Ok(swept)
    }

    /// Move `amount` of the contract's own tokens to `recipient`.
    pub fn transfer_tokens<P: TokenTransferPort>(
        env: &Env,
        port: Option<&P>,
        caller: &Address,
        recipient: &Address,
        amount: i128,
    ) -> Result<(), OptionGrantError> {
        AccessGuard::require_principal(env, caller)?;
        PauseControl::require_not_paused(env)?;
        let port = port.ok_or(OptionGrantError::TokenNotConfigured)?;
        Self::require_valid_recipient(env, recipient)?;

        if amount <= 0 {
            return Err(OptionGrantError::InvalidAmount);
        }

        with_exercise_guard(env, || {
            let contract = env.current_contract_address();
            if amount > port.balance_of(&contract) {
                return Err(OptionGrantError::InsufficientBalance);
            }

            port.transfer(recipient, amount)?;

            log!(env, "tokens transferred", recipient.clone(), amount);
            emit_tokens_transferred(env, &contract, recipient, amount);
            Ok(())
        })
    }
}
