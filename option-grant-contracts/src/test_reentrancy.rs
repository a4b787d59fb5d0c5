//! Reentrancy guard tests.
//!
//! Integration tests (via contract client):
//!   1. Guard blocks exercise while the latch is held
//!   2. Latch is released after a successful exercise
//!   3. Latch is released after a failed exercise
//!   4. Guard blocks `transfer_tokens` while the latch is held
//!
//! Unit tests (directly exercising `with_exercise_guard` and the ledger):
//!   5. Guard returns the closure's value and passes errors through
//!   6. A nested guarded call fails with `ReentrancyDetected`
//!   7. A token port that calls back into exercise is rejected and the
//!      outer exercise commits nothing

use super::*;
use crate::clock::FixedClock;
use crate::payments::TokenTransferPort;
use crate::reentrancy::{is_locked, with_exercise_guard, EXERCISE_LOCK_KEY};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env};

const T0: u64 = 2_000;

fn setup() -> (Env, OptionGrantContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(T0);

    let contract_id = env.register(OptionGrantContract, ());
    let client = OptionGrantContractClient::new(&env, &contract_id);
    let company = Address::generate(&env);
    client.initialize(&InitializationParams {
        principal: company.clone(),
        total_options: 1_000,
        token: None,
        clock: ClockSource::Timestamp,
    });

    let employee = Address::generate(&env);
    client.grant_options(&company, &employee, &100);
    client.set_vesting_schedule(&company, &employee, &100, &0);
    env.ledger().set_timestamp(T0 + 100);

    (env, client, company, employee)
}

fn lock_held(env: &Env, client: &OptionGrantContractClient) -> bool {
    env.as_contract(&client.address, || is_locked(env))
}

fn set_lock(env: &Env, client: &OptionGrantContractClient, held: bool) {
    env.as_contract(&client.address, || {
        env.storage().instance().set(&EXERCISE_LOCK_KEY, &held);
    });
}

#[test]
fn test_guard_blocks_when_lock_is_held() {
    let (env, client, _company, employee) = setup();

    set_lock(&env, &client, true);

    let result = client.try_exercise_options(&employee, &10);
    assert_eq!(result, Err(Ok(OptionGrantError::ReentrancyDetected)));

    set_lock(&env, &client, false);
    client.exercise_options(&employee, &10);
}

#[test]
fn test_guard_releases_lock_after_success() {
    let (env, client, _company, employee) = setup();

    assert!(!lock_held(&env, &client));
    client.exercise_options(&employee, &100);
    assert!(!lock_held(&env, &client));
}

#[test]
fn test_guard_releases_lock_after_failure() {
    let (env, client, _company, employee) = setup();

    let result = client.try_exercise_options(&employee, &101);
    assert_eq!(result, Err(Ok(OptionGrantError::InsufficientVested)));
    assert!(!lock_held(&env, &client));

    // A follow-up call is not blocked
    client.exercise_options(&employee, &100);
}

#[test]
fn test_guard_blocks_transfer_tokens_when_lock_is_held() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(OptionGrantContract, ());
    let client = OptionGrantContractClient::new(&env, &contract_id);
    let company = Address::generate(&env);
    let recipient = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_id = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    token::StellarAssetClient::new(&env, &token_id).mint(&contract_id, &100);
    let token = token::Client::new(&env, &token_id);

    client.initialize(&InitializationParams {
        principal: company.clone(),
        total_options: 1_000,
        token: Some(token_id),
        clock: ClockSource::Timestamp,
    });

    set_lock(&env, &client, true);

    let result = client.try_transfer_tokens(&company, &recipient, &10);
    assert_eq!(result, Err(Ok(OptionGrantError::ReentrancyDetected)));
    assert_eq!(token.balance(&recipient), 0);
    assert_eq!(token.balance(&contract_id), 100);

    set_lock(&env, &client, false);
    client.transfer_tokens(&company, &recipient, &10);
    assert_eq!(token.balance(&recipient), 10);
    assert!(!lock_held(&env, &client));
}

#[test]
fn test_guard_passes_value_and_errors_through() {
    let (env, client, _company, _employee) = setup();

    env.as_contract(&client.address, || {
        assert_eq!(with_exercise_guard(&env, || Ok(42u32)), Ok(42));
        assert!(!is_locked(&env));

        let failed: Result<(), OptionGrantError> =
            with_exercise_guard(&env, || Err(OptionGrantError::InsufficientVested));
        assert_eq!(failed, Err(OptionGrantError::InsufficientVested));
        assert!(!is_locked(&env));
    });
}

#[test]
fn test_nested_guard_is_rejected() {
    let (env, client, _company, _employee) = setup();

    env.as_contract(&client.address, || {
        let result = with_exercise_guard(&env, || {
            assert!(is_locked(&env));
            with_exercise_guard(&env, || Ok(()))
        });
        assert_eq!(result, Err(OptionGrantError::ReentrancyDetected));
        assert!(!is_locked(&env));
    });
}

/// Token port that tries to exercise again while paying out.
struct CallbackPort<'a> {
    env: &'a Env,
}

struct SilentPort;

impl TokenTransferPort for SilentPort {
    fn balance_of(&self, _holder: &Address) -> i128 {
        i128::MAX
    }

    fn transfer(&self, _to: &Address, _amount: i128) -> Result<(), OptionGrantError> {
        Ok(())
    }
}

impl TokenTransferPort for CallbackPort<'_> {
    fn balance_of(&self, _holder: &Address) -> i128 {
        i128::MAX
    }

    fn transfer(&self, to: &Address, amount: i128) -> Result<(), OptionGrantError> {
        GrantLedger::exercise_options(
            self.env,
            &FixedClock(T0 + 100),
            Some(&SilentPort),
            to,
            amount,
        )
    }
}

#[test]
fn test_callback_during_payout_is_rejected() {
    let (env, client, _company, employee) = setup();

    let result = env.as_contract(&client.address, || {
        GrantLedger::exercise_options(
            &env,
            &FixedClock(T0 + 100),
            Some(&CallbackPort { env: &env }),
            &employee,
            40,
        )
    });
    assert_eq!(result, Err(OptionGrantError::ReentrancyDetected));

    let grant = client.get_grant(&employee).unwrap();
    assert!(!grant.exercised);
    assert_eq!(grant.exercised_options, 0);
    assert!(!lock_held(&env, &client));
}
