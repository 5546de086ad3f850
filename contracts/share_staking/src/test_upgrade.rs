//! Clock replacement while unbond requests are in flight.
//!
//! The 30-day configuration stands in for a second release of the pool that
//! ships a longer unbonding period; pending requests keep their original
//! `unbond_time` and are judged against whichever clock is installed when
//! they withdraw.

extern crate std;

use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

use crate::test::{
    advance, assert_contract_err, balance, funded_user, setup_default, ONE, START,
};
use crate::{ContractError, ShareStakingClient, UnbondClock, UserStatus, DAY};

fn clock_v2() -> UnbondClock {
    UnbondClock::new(30 * DAY, DAY)
}

/// Alice stakes 1, Bob stakes 3, as in every scenario below.
fn seeded() -> (Env, ShareStakingClient<'static>, Address, Address, Address) {
    let (env, client, admin, asset) = setup_default();
    let alice = funded_user(&env, &asset, 10 * ONE);
    let bob = funded_user(&env, &asset, 10 * ONE);

    client.stake(&alice, &ONE);
    client.stake(&bob, &(3 * ONE));

    (env, client, admin, asset, alice)
}

#[test]
fn test_unbond_withdraw_after_upgrade() {
    let (env, client, admin, asset, alice) = seeded();
    client.upgrade_config(&admin, &clock_v2());

    let share = client.get_user(&alice).share;
    client.unbond(&alice, &(share / 3));

    let pending = client.get_user(&alice);
    assert_eq!(pending.status, UserStatus::Unbonding);
    assert_eq!(pending.unbond_time, START);
    assert_eq!(pending.unbond_share, share / 3);

    advance(&env, 30 * DAY);

    let prev = balance(&env, &asset, &alice);
    client.withdraw(&alice);
    assert_eq!(balance(&env, &asset, &alice) - prev, ONE / 3);

    let after = client.get_user(&alice);
    assert_eq!(after.status, UserStatus::Idle);
    assert_eq!(after.unbond_time, 0);
    assert_eq!(after.unbond_share, 0);
}

#[test]
fn test_unbond_more_than_share_after_upgrade() {
    let (_env, client, admin, _asset, alice) = seeded();
    client.upgrade_config(&admin, &clock_v2());

    let share = client.get_user(&alice).share;
    assert_contract_err(
        client.try_unbond(&alice, &(share * 3 / 2)),
        ContractError::InsufficientShare,
    );
}

#[test]
fn test_withdraw_with_old_unbond_time() {
    let (env, client, admin, asset, alice) = seeded();

    assert_contract_err(client.try_withdraw(&alice), ContractError::NotUnbonding);

    client.unbond(&alice, &ONE);
    client.upgrade_config(&admin, &clock_v2());

    assert_contract_err(client.try_withdraw(&alice), ContractError::NotValid);

    // Would have been withdrawable under the old 7-day period.
    advance(&env, 8 * DAY);
    assert_contract_err(client.try_withdraw(&alice), ContractError::NotValid);

    advance(&env, 22 * DAY);
    let prev = balance(&env, &asset, &alice);
    assert_eq!(client.withdraw(&alice), ONE);
    assert_eq!(balance(&env, &asset, &alice) - prev, ONE);
}

#[test]
fn test_withdraw_after_new_unbond_period_expire() {
    let (env, client, admin, _asset, alice) = seeded();
    client.upgrade_config(&admin, &clock_v2());

    client.unbond(&alice, &ONE);
    advance(&env, 31 * DAY + 1);

    assert_contract_err(client.try_withdraw(&alice), ContractError::AlreadyExpired);
}

#[test]
fn test_withdraw_both_before_and_after_upgrade() {
    let (env, client, admin, _asset, alice) = seeded();

    client.unbond(&alice, &ONE);

    advance(&env, 7 * DAY - 10);
    assert_contract_err(client.try_withdraw(&alice), ContractError::NotValid);

    client.upgrade_config(&admin, &clock_v2());

    advance(&env, 23 * DAY);
    assert_contract_err(client.try_withdraw(&alice), ContractError::NotValid);

    advance(&env, 7 * DAY);
    assert_contract_err(client.try_withdraw(&alice), ContractError::AlreadyExpired);
}

#[test]
fn test_shorter_period_applies_to_pending_request() {
    let (env, client, admin, _asset, alice) = seeded();

    client.unbond(&alice, &ONE);
    advance(&env, 2 * DAY);
    assert_contract_err(client.try_withdraw(&alice), ContractError::NotValid);

    client.set_unbond_period(&admin, &DAY);
    assert_eq!(client.withdraw(&alice), ONE);
}

#[test]
fn test_shrinking_clock_can_expire_pending_request() {
    let (env, client, admin, _asset, alice) = seeded();

    client.unbond(&alice, &ONE);
    advance(&env, 3 * DAY);

    client.upgrade_config(&admin, &UnbondClock::new(DAY, DAY));
    assert_contract_err(client.try_withdraw(&alice), ContractError::AlreadyExpired);
}

#[test]
fn test_wider_expiry_window_reopens_lapsed_request() {
    let (env, client, admin, _asset, alice) = seeded();

    client.unbond(&alice, &ONE);
    advance(&env, 9 * DAY);
    assert_contract_err(client.try_withdraw(&alice), ContractError::AlreadyExpired);

    client.set_expiry_window(&admin, &(3 * DAY));
    assert_eq!(client.withdraw(&alice), ONE);
}

#[test]
fn test_config_upgrade_leaves_storage_untouched() {
    let (env, client, admin, asset, alice) = seeded();
    client.unbond(&alice, &(ONE / 2));
    let user_before = client.get_user(&alice);
    let pool_before = client.get_pool();
    let custody_before = balance(&env, &asset, &client.address);

    client.upgrade_config(&admin, &clock_v2());

    assert_eq!(client.get_config(), clock_v2());
    assert_eq!(client.get_user(&alice), user_before);
    assert_eq!(client.get_pool(), pool_before);
    assert_eq!(balance(&env, &asset, &client.address), custody_before);
}

#[test]
fn test_code_upgrade_requires_admin() {
    let (env, client, _admin, _asset, _alice) = seeded();
    let intruder = Address::generate(&env);
    let wasm_hash = BytesN::from_array(&env, &[7u8; 32]);

    assert_contract_err(
        client.try_upgrade(&intruder, &wasm_hash),
        ContractError::Unauthorized,
    );
}
