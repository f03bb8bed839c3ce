//! Role membership for a guard instance.
//!
//! Every role is an ordered member list keyed by its 32-byte id. Removal
//! swaps the last member into the freed slot, so indices `0..count` always
//! enumerate each member exactly once.

use soroban_sdk::{Address, Bytes, BytesN, Env, Vec};

use crate::errors::SafeGuardError;
use crate::events::{RoleGrantedEvent, RoleRevokedEvent};
use crate::types::{DataKey, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};

pub const SAFEGUARD_ADMIN_ROLE: &str = "SAFEGUARD_ADMIN_ROLE";
pub const PROPOSER_ROLE: &str = "PROPOSER_ROLE";
pub const EXECUTOR_ROLE: &str = "EXECUTOR_ROLE";
pub const CANCELER_ROLE: &str = "CANCELER_ROLE";

/// keccak256 of the role name.
pub fn role_id(env: &Env, name: &str) -> BytesN<32> {
    env.crypto()
        .keccak256(&Bytes::from_slice(env, name.as_bytes()))
        .to_bytes()
}

pub fn admin_role(env: &Env) -> BytesN<32> {
    role_id(env, SAFEGUARD_ADMIN_ROLE)
}

pub fn proposer_role(env: &Env) -> BytesN<32> {
    role_id(env, PROPOSER_ROLE)
}

pub fn executor_role(env: &Env) -> BytesN<32> {
    role_id(env, EXECUTOR_ROLE)
}

pub fn canceler_role(env: &Env) -> BytesN<32> {
    role_id(env, CANCELER_ROLE)
}

pub fn members(env: &Env, role: &BytesN<32>) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::RoleMembers(role.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn has_role(env: &Env, role: &BytesN<32>, account: &Address) -> bool {
    members(env, role).contains(account)
}

pub fn require_role(
    env: &Env,
    role: &BytesN<32>,
    account: &Address,
) -> Result<(), SafeGuardError> {
    if !has_role(env, role, account) {
        return Err(SafeGuardError::RequiresPermission);
    }
    Ok(())
}

pub fn member_at(env: &Env, role: &BytesN<32>, index: u32) -> Result<Address, SafeGuardError> {
    members(env, role)
        .get(index)
        .ok_or(SafeGuardError::RoleMemberOutOfBounds)
}

/// Adds `account` to `role`. Returns false when it already was a member.
pub fn grant(env: &Env, role: &BytesN<32>, account: &Address, sender: &Address) -> bool {
    let mut list = members(env, role);
    if list.contains(account) {
        return false;
    }

    list.push_back(account.clone());
    write_members(env, role, &list);

    RoleGrantedEvent {
        role: role.clone(),
        account: account.clone(),
        sender: sender.clone(),
        member_count: list.len(),
    }
    .publish(env);

    true
}

/// Removes `account` from `role`. Returns false when it was not a member.
pub fn revoke(env: &Env, role: &BytesN<32>, account: &Address, sender: &Address) -> bool {
    let mut list = members(env, role);
    let Some(index) = list.first_index_of(account) else {
        return false;
    };

    let last = list.len() - 1;
    if index != last {
        let moved = list.get_unchecked(last);
        list.set(index, moved);
    }
    list.pop_back();
    write_members(env, role, &list);

    RoleRevokedEvent {
        role: role.clone(),
        account: account.clone(),
        sender: sender.clone(),
        member_count: list.len(),
    }
    .publish(env);

    true
}

fn write_members(env: &Env, role: &BytesN<32>, list: &Vec<Address>) {
    let key = DataKey::RoleMembers(role.clone());
    env.storage().persistent().set(&key, list);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}
