#![cfg(test)]

use carbonex_common::{decimal::from_units, ExchangeError};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    Address, Env, String,
};

use crate::{CreditToken, CreditTokenClient};

fn units(n: i128) -> i128 {
    from_units(n).unwrap()
}

fn setup<'a>() -> (Env, CreditTokenClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let token_id = env.register_contract(None, CreditToken);
    let client = CreditTokenClient::new(&env, &token_id);
    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &String::from_str(&env, "Carbon Credit Token"),
        &String::from_str(&env, "CCT"),
    );
    (env, client, admin)
}

// ---------------------------------------------------------------------------
// Initialization & metadata
// ---------------------------------------------------------------------------

#[test]
fn test_initialize_stores_metadata() {
    let (env, client, admin) = setup();
    assert_eq!(client.admin(), admin);
    assert_eq!(client.decimals(), 18);
    assert_eq!(client.name(), String::from_str(&env, "Carbon Credit Token"));
    assert_eq!(client.symbol(), String::from_str(&env, "CCT"));
    assert!(client.minting_enabled());
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let (env, client, _) = setup();
    let other = Address::generate(&env);
    let result = client.try_initialize(
        &other,
        &String::from_str(&env, "Other"),
        &String::from_str(&env, "OTH"),
    );
    assert_eq!(result, Err(Ok(ExchangeError::AlreadyInitialized)));
}

#[test]
fn test_transfer_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let client = CreditTokenClient::new(&env, &env.register_contract(None, CreditToken));
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    assert_eq!(client.try_transfer(&a, &b, &1), Err(Ok(ExchangeError::NotInitialized)));
}

// ---------------------------------------------------------------------------
// Mint
// ---------------------------------------------------------------------------

#[test]
fn test_mint_increases_balance_and_supply() {
    let (env, client, admin) = setup();
    let holder = Address::generate(&env);

    client.mint(&admin, &holder, &units(500));
    client.mint(&admin, &holder, &units(250));

    assert_eq!(client.balance(&holder), units(750));
    assert_eq!(client.total_supply(), units(750));
}

#[test]
fn test_mint_by_non_admin_is_unauthorized() {
    let (env, client, _) = setup();
    let intruder = Address::generate(&env);

    let result = client.try_mint(&intruder, &intruder, &units(1));
    assert_eq!(result, Err(Ok(ExchangeError::Unauthorized)));
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_mint_rejects_non_positive_amount() {
    let (env, client, admin) = setup();
    let holder = Address::generate(&env);

    assert_eq!(client.try_mint(&admin, &holder, &0), Err(Ok(ExchangeError::InvalidAmount)));
    assert_eq!(client.try_mint(&admin, &holder, &-5), Err(Ok(ExchangeError::InvalidAmount)));
}

#[test]
fn test_disable_minting_is_permanent() {
    let (env, client, admin) = setup();
    let holder = Address::generate(&env);
    client.mint(&admin, &holder, &units(10));

    client.disable_minting(&admin);

    assert!(!client.minting_enabled());
    assert_eq!(
        client.try_mint(&admin, &holder, &units(1)),
        Err(Ok(ExchangeError::MintingDisabled))
    );
    assert_eq!(client.try_disable_minting(&admin), Err(Ok(ExchangeError::AlreadyDisabled)));
    assert_eq!(client.total_supply(), units(10));
}

#[test]
fn test_disable_minting_by_non_admin_is_unauthorized() {
    let (env, client, _) = setup();
    let intruder = Address::generate(&env);
    assert_eq!(client.try_disable_minting(&intruder), Err(Ok(ExchangeError::Unauthorized)));
    assert!(client.minting_enabled());
}

// ---------------------------------------------------------------------------
// Transfer
// ---------------------------------------------------------------------------

#[test]
fn test_transfer_moves_balance() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.mint(&admin, &alice, &units(100));

    client.transfer(&alice, &bob, &units(40));

    assert_eq!(client.balance(&alice), units(60));
    assert_eq!(client.balance(&bob), units(40));
    assert_eq!(client.total_supply(), units(100));
}

#[test]
fn test_transfer_to_self_keeps_balance() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);
    client.mint(&admin, &alice, &units(100));

    client.transfer(&alice, &alice, &units(30));

    assert_eq!(client.balance(&alice), units(100));
}

#[test]
fn test_transfer_insufficient_balance_leaves_state() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.mint(&admin, &alice, &units(10));

    let result = client.try_transfer(&alice, &bob, &(units(10) + 1));
    assert_eq!(result, Err(Ok(ExchangeError::InsufficientBalance)));
    assert_eq!(client.balance(&alice), units(10));
    assert_eq!(client.balance(&bob), 0);
}

#[test]
fn test_transfer_rejects_zero_amount() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    assert_eq!(client.try_transfer(&alice, &bob, &0), Err(Ok(ExchangeError::InvalidAmount)));
}

#[test]
fn test_unknown_address_reads_zero() {
    let (env, client, _) = setup();
    let stranger = Address::generate(&env);
    let other = Address::generate(&env);
    assert_eq!(client.balance(&stranger), 0);
    assert_eq!(client.allowance(&stranger, &other), 0);
}

// ---------------------------------------------------------------------------
// Approve / transfer_from
// ---------------------------------------------------------------------------

#[test]
fn test_approve_overwrites_previous_allowance() {
    let (env, client, _) = setup();
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);

    client.approve(&owner, &spender, &units(50));
    client.approve(&owner, &spender, &units(20));

    assert_eq!(client.allowance(&owner, &spender), units(20));
}

#[test]
fn test_approve_rejects_negative_but_allows_zero() {
    let (env, client, _) = setup();
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);

    assert_eq!(
        client.try_approve(&owner, &spender, &-1),
        Err(Ok(ExchangeError::InvalidAmount))
    );
    client.approve(&owner, &spender, &units(5));
    client.approve(&owner, &spender, &0);
    assert_eq!(client.allowance(&owner, &spender), 0);
}

#[test]
fn test_allowances_are_scoped_to_owner_spender_pair() {
    let (env, client, _) = setup();
    let owner = Address::generate(&env);
    let other_owner = Address::generate(&env);
    let spender = Address::generate(&env);

    client.approve(&owner, &spender, &units(5));

    assert_eq!(client.allowance(&owner, &spender), units(5));
    assert_eq!(client.allowance(&other_owner, &spender), 0);
    assert_eq!(client.allowance(&spender, &owner), 0);
}

#[test]
fn test_transfer_from_consumes_allowance_exactly() {
    let (env, client, admin) = setup();
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let recipient = Address::generate(&env);
    client.mint(&admin, &owner, &units(100));
    client.approve(&owner, &spender, &units(30));

    client.transfer_from(&owner, &spender, &recipient, &units(12));

    assert_eq!(client.allowance(&owner, &spender), units(18));
    assert_eq!(client.balance(&owner), units(88));
    assert_eq!(client.balance(&recipient), units(12));
}

#[test]
fn test_transfer_from_insufficient_allowance() {
    let (env, client, admin) = setup();
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    client.mint(&admin, &owner, &units(100));
    client.approve(&owner, &spender, &units(5));

    let result = client.try_transfer_from(&owner, &spender, &spender, &units(6));
    assert_eq!(result, Err(Ok(ExchangeError::InsufficientAllowance)));
    assert_eq!(client.allowance(&owner, &spender), units(5));
    assert_eq!(client.balance(&owner), units(100));
}

#[test]
fn test_transfer_from_insufficient_balance_keeps_allowance() {
    let (env, client, admin) = setup();
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    client.mint(&admin, &owner, &units(3));
    client.approve(&owner, &spender, &units(10));

    let result = client.try_transfer_from(&owner, &spender, &spender, &units(4));
    assert_eq!(result, Err(Ok(ExchangeError::InsufficientBalance)));
    assert_eq!(client.allowance(&owner, &spender), units(10));
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[test]
fn test_disable_minting_emits_event() {
    let (env, client, admin) = setup();
    client.disable_minting(&admin);
    assert_eq!(env.events().all().len(), 1, "expected exactly one mint_off event");
}

#[test]
fn test_mint_emits_event() {
    let (env, client, admin) = setup();
    let holder = Address::generate(&env);
    client.mint(&admin, &holder, &units(1));
    assert_eq!(env.events().all().len(), 1, "expected exactly one mint event");
}
