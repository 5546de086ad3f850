extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::test::{assert_contract_err, setup_default};
use crate::{ContractError, UnbondClock, DAY};

// ── Worker role ──────────────────────────────────────────────────────────────

#[test]
fn test_admin_sets_worker() {
    let (env, client, admin, _asset) = setup_default();
    let worker = Address::generate(&env);

    assert_eq!(client.get_worker(), None);
    client.set_worker(&admin, &worker);
    assert_eq!(client.get_worker(), Some(worker.clone()));

    let replacement = Address::generate(&env);
    client.set_worker(&admin, &replacement);
    assert_eq!(client.get_worker(), Some(replacement));
}

#[test]
fn test_non_admin_cannot_set_worker() {
    let (env, client, _admin, _asset) = setup_default();
    let intruder = Address::generate(&env);

    assert_contract_err(
        client.try_set_worker(&intruder, &intruder),
        ContractError::Unauthorized,
    );
    assert_eq!(client.get_worker(), None);
}

// ── Clock setters ────────────────────────────────────────────────────────────

#[test]
fn test_admin_updates_clock_fields_independently() {
    let (_env, client, admin, _asset) = setup_default();

    client.set_unbond_period(&admin, &(14 * DAY));
    assert_eq!(client.get_config(), UnbondClock::new(14 * DAY, DAY));

    client.set_expiry_window(&admin, &(2 * DAY));
    assert_eq!(client.get_config(), UnbondClock::new(14 * DAY, 2 * DAY));
}

#[test]
fn test_non_admin_cannot_touch_clock() {
    let (env, client, _admin, _asset) = setup_default();
    let intruder = Address::generate(&env);

    assert_contract_err(
        client.try_set_unbond_period(&intruder, &DAY),
        ContractError::Unauthorized,
    );
    assert_contract_err(
        client.try_set_expiry_window(&intruder, &DAY),
        ContractError::Unauthorized,
    );
    assert_contract_err(
        client.try_upgrade_config(&intruder, &UnbondClock::new(DAY, DAY)),
        ContractError::Unauthorized,
    );
    assert_eq!(client.get_config(), UnbondClock::new(7 * DAY, DAY));
}

// ── Admin transfer (two-step) ────────────────────────────────────────────────

#[test]
fn test_admin_transfer_flow() {
    let (env, client, admin, _asset) = setup_default();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    assert_eq!(client.get_pending_admin(), Some(successor.clone()));
    assert_eq!(client.get_admin(), admin);

    client.accept_admin(&successor);
    assert_eq!(client.get_admin(), successor);
    assert_eq!(client.get_pending_admin(), None);

    // The old admin lost its privileges.
    let worker = Address::generate(&env);
    assert_contract_err(
        client.try_set_worker(&admin, &worker),
        ContractError::Unauthorized,
    );
    client.set_worker(&successor, &worker);
}

#[test]
fn test_only_proposed_address_can_accept() {
    let (env, client, admin, _asset) = setup_default();
    let successor = Address::generate(&env);
    let intruder = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    assert_contract_err(client.try_accept_admin(&intruder), ContractError::Unauthorized);
    assert_eq!(client.get_admin(), admin);
}

#[test]
fn test_accept_without_proposal_fails() {
    let (env, client, _admin, _asset) = setup_default();
    let someone = Address::generate(&env);

    assert_contract_err(client.try_accept_admin(&someone), ContractError::NoPendingAdmin);
}

#[test]
fn test_cancel_admin_transfer() {
    let (env, client, admin, _asset) = setup_default();
    let successor = Address::generate(&env);

    assert_contract_err(
        client.try_cancel_admin_transfer(&admin),
        ContractError::NoPendingAdmin,
    );

    client.propose_admin(&admin, &successor);
    client.cancel_admin_transfer(&admin);

    assert_eq!(client.get_pending_admin(), None);
    assert_contract_err(
        client.try_accept_admin(&successor),
        ContractError::NoPendingAdmin,
    );
}

#[test]
fn test_non_admin_cannot_propose() {
    let (env, client, _admin, _asset) = setup_default();
    let intruder = Address::generate(&env);

    assert_contract_err(
        client.try_propose_admin(&intruder, &intruder),
        ContractError::Unauthorized,
    );
}
