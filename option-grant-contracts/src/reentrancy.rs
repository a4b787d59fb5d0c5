//! Reentrancy guard for exercise-class operations.
//!
//! Blocks a nested call into `exercise_options` or `transfer_tokens` while
//! the token transfer of an in-flight call is executing. Uses a single
//! process-wide latch in instance storage.

use crate::errors::OptionGrantError;
use soroban_sdk::{symbol_short, Env, Symbol};

pub(crate) const EXERCISE_LOCK_KEY: Symbol = symbol_short!("ex_lock");

/// Returns true while a guarded operation is in flight.
pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&EXERCISE_LOCK_KEY)
        .unwrap_or(false)
}

/// Runs a closure with the exercise guard held.
///
/// At entry, if the latch is already set, returns `Err(ReentrancyDetected)`.
/// Otherwise sets the latch, runs `f`, then clears the latch on success or
/// failure.
///
/// # Errors
/// * `OptionGrantError::ReentrancyDetected` if called while another guarded
///   operation is in progress.
pub fn with_exercise_guard<F, R>(env: &Env, f: F) -> Result<R, OptionGrantError>
where
    F: FnOnce() -> Result<R, OptionGrantError>,
{
    if is_locked(env) {
        return Err(OptionGrantError::ReentrancyDetected);
    }
    env.storage().instance().set(&EXERCISE_LOCK_KEY, &true);
    let result = f();
    env.storage().instance().set(&EXERCISE_LOCK_KEY, &false);
    result
}
