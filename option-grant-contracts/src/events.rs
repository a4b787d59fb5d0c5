//! Contract events emitted by the option grant ledger.
//!
//! Every event uses a single short-symbol topic; payloads are plain tuples so
//! off-chain indexers can decode them without the contract spec.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const EVT_INITIALIZED: Symbol = symbol_short!("init");
pub const EVT_OPTIONS_GRANTED: Symbol = symbol_short!("opt_grant");
pub const EVT_OPTIONS_VESTED: Symbol = symbol_short!("opt_vest");
pub const EVT_OPTIONS_EXERCISED: Symbol = symbol_short!("opt_exer");
pub const EVT_TOKENS_TRANSFERRED: Symbol = symbol_short!("tok_xfer");
pub const EVT_PAUSED: Symbol = symbol_short!("paused");
pub const EVT_UNPAUSED: Symbol = symbol_short!("unpaused");

/// Emit event when the ledger is initialized
pub fn emit_initialized(env: &Env, principal: &Address, total_options: i128) {
    env.events()
        .publish((EVT_INITIALIZED,), (principal.clone(), total_options));
}

/// Emit event when options are granted to a beneficiary
pub fn emit_options_granted(env: &Env, beneficiary: &Address, amount: i128) {
    env.events()
        .publish((EVT_OPTIONS_GRANTED,), (beneficiary.clone(), amount));
}

/// Emit event when vesting progresses for a beneficiary.
///
/// Schedule activation is reported as a zero-delta event with a zero total.
pub fn emit_options_vested(env: &Env, beneficiary: &Address, delta: i128, new_total: i128) {
    env.events().publish(
        (EVT_OPTIONS_VESTED,),
        (beneficiary.clone(), delta, new_total),
    );
}

/// Emit event when a beneficiary exercises options
pub fn emit_options_exercised(env: &Env, beneficiary: &Address, amount: i128) {
    env.events()
        .publish((EVT_OPTIONS_EXERCISED,), (beneficiary.clone(), amount));
}

/// Emit event when the principal moves tokens out of the contract
pub fn emit_tokens_transferred(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (EVT_TOKENS_TRANSFERRED,),
        (from.clone(), to.clone(), amount),
    );
}

pub fn emit_paused(env: &Env, principal: &Address) {
    env.events().publish((EVT_PAUSED,), (principal.clone(),));
}

pub fn emit_unpaused(env: &Env, principal: &Address) {
    env.events().publish((EVT_UNPAUSED,), (principal.clone(),));
}
