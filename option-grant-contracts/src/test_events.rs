//! Event payload tests: topics and data tuples for every ledger notification.

use super::*;
use crate::events::{
    EVT_INITIALIZED, EVT_OPTIONS_EXERCISED, EVT_OPTIONS_GRANTED, EVT_OPTIONS_VESTED,
    EVT_PAUSED, EVT_TOKENS_TRANSFERRED, EVT_UNPAUSED,
};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{token, Address, Env, Symbol, TryFromVal, Val};

const T0: u64 = 7_000;

fn setup(env: &Env) -> (OptionGrantContractClient<'_>, Address, token::Client<'_>) {
    env.mock_all_auths();
    env.ledger().set_timestamp(T0);

    let contract_id = env.register(OptionGrantContract, ());
    let client = OptionGrantContractClient::new(env, &contract_id);
    let company = Address::generate(env);

    let token_admin = Address::generate(env);
    let token_id = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    token::StellarAssetClient::new(env, &token_id).mint(&contract_id, &10_000);

    client.initialize(&InitializationParams {
        principal: company.clone(),
        total_options: 1_000,
        token: Some(token_id.clone()),
        clock: ClockSource::Timestamp,
    });

    (client, company, token::Client::new(env, &token_id))
}

fn latest_event_payload<T>(env: &Env, topic: Symbol) -> T
where
    T: TryFromVal<Env, Val> + core::fmt::Debug + PartialEq,
{
    let events = env.events().all();

    let mut index = events.len();
    while index > 0 {
        index -= 1;
        let (_, topics, data): (_, soroban_sdk::Vec<Val>, Val) = events.get(index).unwrap();
        let matches = topics
            .iter()
            .any(|part| Symbol::try_from_val(env, &part).map_or(false, |s| s == topic));
        if matches {
            return T::try_from_val(env, &data)
                .expect("event payload should decode to expected type");
        }
    }

    panic!("expected event topic not found: {:?}", topic);
}

fn assert_latest_event_payload<T>(env: &Env, topic: Symbol, expected_payload: T)
where
    T: TryFromVal<Env, Val> + core::fmt::Debug + PartialEq,
{
    let actual_payload: T = latest_event_payload(env, topic);
    assert_eq!(actual_payload, expected_payload);
}

#[test]
fn test_initialize_emits_event() {
    let env = Env::default();
    let (_client, company, _token) = setup(&env);

    assert_latest_event_payload(&env, EVT_INITIALIZED, (company, 1_000i128));
}

#[test]
fn test_grant_and_schedule_events() {
    let env = Env::default();
    let (client, company, _token) = setup(&env);
    let employee = Address::generate(&env);

    client.grant_options(&company, &employee, &100);
    assert_latest_event_payload(&env, EVT_OPTIONS_GRANTED, (employee.clone(), 100i128));

    // Schedule activation is a zero-delta vesting marker
    client.set_vesting_schedule(&company, &employee, &1_000, &100);
    assert_latest_event_payload(&env, EVT_OPTIONS_VESTED, (employee, 0i128, 0i128));
}

#[test]
fn test_sweep_emits_delta_and_running_total() {
    let env = Env::default();
    let (client, company, _token) = setup(&env);
    let employee = Address::generate(&env);
    client.grant_options(&company, &employee, &100);
    client.set_vesting_schedule(&company, &employee, &1_000, &100);

    env.ledger().set_timestamp(T0 + 600);
    client.vest_options(&company);
    assert_latest_event_payload(&env, EVT_OPTIONS_VESTED, (employee.clone(), 50i128, 50i128));

    env.ledger().set_timestamp(T0 + 850);
    client.vest_options(&company);
    assert_latest_event_payload(&env, EVT_OPTIONS_VESTED, (employee, 25i128, 75i128));
}

#[test]
fn test_exercise_emits_event() {
    let env = Env::default();
    let (client, company, token) = setup(&env);
    let employee = Address::generate(&env);
    client.grant_options(&company, &employee, &100);
    client.set_vesting_schedule(&company, &employee, &0, &0);

    client.exercise_options(&employee, &70);
    assert_latest_event_payload(&env, EVT_OPTIONS_EXERCISED, (employee.clone(), 70i128));
    assert_eq!(token.balance(&employee), 70);
}

#[test]
fn test_transfer_tokens_emits_event() {
    let env = Env::default();
    let (client, company, _token) = setup(&env);
    let recipient = Address::generate(&env);

    client.transfer_tokens(&company, &recipient, &250);
    assert_latest_event_payload(
        &env,
        EVT_TOKENS_TRANSFERRED,
        (client.address.clone(), recipient, 250i128),
    );
}

#[test]
fn test_pause_events() {
    let env = Env::default();
    let (client, company, _token) = setup(&env);

    client.pause(&company);
    assert_latest_event_payload(&env, EVT_PAUSED, (company.clone(),));

    client.unpause(&company);
    assert_latest_event_payload(&env, EVT_UNPAUSED, (company,));
}
