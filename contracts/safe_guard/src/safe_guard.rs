use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Symbol, Val, Vec};
use timelock_api::{
    ttl_until, ExecutionOutcome, TimelockError, TimelockExecutorClient, Transaction,
};

use crate::errors::SafeGuardError;
use crate::events::{
    TimelockDefinedEvent, TransactionCanceledEvent, TransactionExecutedEvent,
    TransactionQueuedEvent,
};
use crate::roles;
use crate::types::{
    DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    SAFEGUARD_VERSION,
};

#[contract]
pub struct SafeGuard;

#[contractimpl]
impl SafeGuard {
    /// Sets up roles. `admin` receives the admin role and `role_ids[i]` is
    /// granted to `accounts[i]`. Only `creator` may later bind the timelock.
    pub fn initialize(
        env: Env,
        creator: Address,
        admin: Address,
        role_ids: Vec<BytesN<32>>,
        accounts: Vec<Address>,
    ) -> Result<(), SafeGuardError> {
        if env.storage().instance().has(&DataKey::Creator) {
            return Err(SafeGuardError::AlreadyInitialized);
        }

        if role_ids.len() != accounts.len() {
            return Err(SafeGuardError::ArityMismatch);
        }

        creator.require_auth();

        env.storage().instance().set(&DataKey::Creator, &creator);
        Self::bump_instance(&env);

        roles::grant(&env, &roles::admin_role(&env), &admin, &creator);
        for (role, account) in role_ids.iter().zip(accounts.iter()) {
            roles::grant(&env, &role, &account, &creator);
        }

        log!(&env, "safeguard initialized admin={}", admin);
        Ok(())
    }

    /// Binds the timelock that executes this guard's transactions. The
    /// binding can be made once, and the timelock must already name this
    /// guard as its admin.
    pub fn set_timelock(env: Env, caller: Address, timelock: Address) -> Result<(), SafeGuardError> {
        let creator = Self::read_creator(&env)?;
        caller.require_auth();

        if caller != creator {
            return Err(SafeGuardError::NotCreator);
        }

        if env.storage().instance().has(&DataKey::Timelock) {
            return Err(SafeGuardError::TimelockAlreadyDefined);
        }

        let admin = forward(TimelockExecutorClient::new(&env, &timelock).try_admin())?;
        if admin != env.current_contract_address() {
            return Err(SafeGuardError::TimelockAdminMismatch);
        }

        env.storage().instance().set(&DataKey::Timelock, &timelock);
        Self::bump_instance(&env);

        TimelockDefinedEvent { timelock }.publish(&env);
        Ok(())
    }

    pub fn queue_transaction(
        env: Env,
        caller: Address,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<BytesN<32>, SafeGuardError> {
        let tx = Transaction::new(target, value, signature, data, eta);
        Self::queue(&env, caller, tx, None)
    }

    /// Same as `queue_transaction`. The description only travels in the
    /// queued event and never affects the fingerprint.
    pub fn queue_with_description(
        env: Env,
        caller: Address,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
        description: String,
    ) -> Result<BytesN<32>, SafeGuardError> {
        let tx = Transaction::new(target, value, signature, data, eta);
        Self::queue(&env, caller, tx, Some(description))
    }

    /// Runs a matured transaction through the timelock and returns the
    /// target's outcome unchanged. The fingerprint stops being tracked
    /// whatever the outcome, since the timelock consumed the entry.
    pub fn execute_transaction(
        env: Env,
        caller: Address,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<ExecutionOutcome, SafeGuardError> {
        caller.require_auth();
        roles::require_role(&env, &roles::executor_role(&env), &caller)?;

        let timelock = Self::read_timelock(&env)?;
        let tx = Transaction::new(target, value, signature, data, eta);
        let fingerprint = tx.fingerprint(&env);
        let key = DataKey::Queued(fingerprint.clone());

        if !env.storage().persistent().has(&key) {
            return Err(SafeGuardError::NotQueued);
        }

        let outcome = forward(TimelockExecutorClient::new(&env, &timelock).try_execute_transaction(
            &tx.target,
            &tx.value,
            &tx.signature,
            &tx.data,
            &tx.eta,
        ))?;

        env.storage().persistent().remove(&key);

        TransactionExecutedEvent {
            fingerprint,
            executor: caller,
            succeeded: outcome.succeeded(),
        }
        .publish(&env);

        Ok(outcome)
    }

    /// Withdraws a queued transaction. Requires the canceler role; holding
    /// the admin role is not enough.
    pub fn cancel_transaction(
        env: Env,
        caller: Address,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<BytesN<32>, SafeGuardError> {
        caller.require_auth();
        roles::require_role(&env, &roles::canceler_role(&env), &caller)?;

        let timelock = Self::read_timelock(&env)?;
        let tx = Transaction::new(target, value, signature, data, eta);
        let fingerprint = tx.fingerprint(&env);
        let key = DataKey::Queued(fingerprint.clone());

        if !env.storage().persistent().has(&key) {
            return Err(SafeGuardError::NotQueued);
        }

        forward(TimelockExecutorClient::new(&env, &timelock).try_cancel_transaction(
            &tx.target,
            &tx.value,
            &tx.signature,
            &tx.data,
            &tx.eta,
        ))?;

        env.storage().persistent().remove(&key);

        TransactionCanceledEvent {
            fingerprint: fingerprint.clone(),
            canceler: caller,
        }
        .publish(&env);

        Ok(fingerprint)
    }

    pub fn is_queued(env: Env, fingerprint: BytesN<32>) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Queued(fingerprint))
    }

    pub fn creator(env: Env) -> Result<Address, SafeGuardError> {
        Self::read_creator(&env)
    }

    pub fn timelock(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Timelock)
    }

    pub fn version(_env: Env) -> u32 {
        SAFEGUARD_VERSION
    }

    // Role management

    pub fn grant_role(
        env: Env,
        caller: Address,
        role: BytesN<32>,
        account: Address,
    ) -> Result<(), SafeGuardError> {
        caller.require_auth();
        roles::require_role(&env, &roles::admin_role(&env), &caller)?;

        if roles::grant(&env, &role, &account, &caller) {
            log!(&env, "role granted to {}", account);
        }
        Ok(())
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: BytesN<32>,
        account: Address,
    ) -> Result<(), SafeGuardError> {
        caller.require_auth();
        roles::require_role(&env, &roles::admin_role(&env), &caller)?;
        Self::remove_member(&env, &role, &account, &caller)
    }

    /// Drops the caller's own membership of `role`.
    pub fn renounce_role(env: Env, caller: Address, role: BytesN<32>) -> Result<(), SafeGuardError> {
        caller.require_auth();
        Self::remove_member(&env, &role, &caller, &caller)
    }

    pub fn has_role(env: Env, role: BytesN<32>, account: Address) -> bool {
        roles::has_role(&env, &role, &account)
    }

    pub fn get_role_member_count(env: Env, role: BytesN<32>) -> u32 {
        roles::members(&env, &role).len()
    }

    pub fn get_role_member(
        env: Env,
        role: BytesN<32>,
        index: u32,
    ) -> Result<Address, SafeGuardError> {
        roles::member_at(&env, &role, index)
    }

    pub fn admin_role(env: Env) -> BytesN<32> {
        roles::admin_role(&env)
    }

    pub fn proposer_role(env: Env) -> BytesN<32> {
        roles::proposer_role(&env)
    }

    pub fn executor_role(env: Env) -> BytesN<32> {
        roles::executor_role(&env)
    }

    pub fn canceler_role(env: Env) -> BytesN<32> {
        roles::canceler_role(&env)
    }

    fn queue(
        env: &Env,
        caller: Address,
        tx: Transaction,
        description: Option<String>,
    ) -> Result<BytesN<32>, SafeGuardError> {
        caller.require_auth();
        roles::require_role(env, &roles::proposer_role(env), &caller)?;

        let timelock = Self::read_timelock(env)?;
        let fingerprint = tx.fingerprint(env);
        let key = DataKey::Queued(fingerprint.clone());

        if env.storage().persistent().has(&key) {
            return Err(SafeGuardError::AlreadyQueued);
        }

        let client = TimelockExecutorClient::new(env, &timelock);
        forward(client.try_queue_transaction(
            &tx.target,
            &tx.value,
            &tx.signature,
            &tx.data,
            &tx.eta,
        ))?;

        // tracked for as long as the timelock keeps the entry
        let grace_period = forward(client.try_config())?.grace_period.unwrap_or(0);
        let ttl = ttl_until(env, tx.eta.saturating_add(grace_period), PERSISTENT_BUMP_AMOUNT);
        env.storage().persistent().set(&key, &true);
        env.storage().persistent().extend_ttl(&key, ttl, ttl);
        Self::bump_instance(env);

        TransactionQueuedEvent {
            fingerprint: fingerprint.clone(),
            proposer: caller,
            target: tx.target,
            value: tx.value,
            signature: tx.signature,
            data: tx.data,
            eta: tx.eta,
            description,
        }
        .publish(env);

        Ok(fingerprint)
    }

    fn remove_member(
        env: &Env,
        role: &BytesN<32>,
        account: &Address,
        sender: &Address,
    ) -> Result<(), SafeGuardError> {
        let admin_role = roles::admin_role(env);
        if *role == admin_role
            && roles::has_role(env, role, account)
            && roles::members(env, role).len() == 1
        {
            return Err(SafeGuardError::LastAdminMember);
        }

        if roles::revoke(env, role, account, sender) {
            log!(env, "role revoked from {}", account);
        }
        Ok(())
    }

    fn read_creator(env: &Env) -> Result<Address, SafeGuardError> {
        env.storage()
            .instance()
            .get(&DataKey::Creator)
            .ok_or(SafeGuardError::NotInitialized)
    }

    fn read_timelock(env: &Env) -> Result<Address, SafeGuardError> {
        env.storage()
            .instance()
            .get(&DataKey::Timelock)
            .ok_or(SafeGuardError::TimelockNotDefined)
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}

// Unwraps a `try_*` call on the timelock. Contract errors are translated;
// anything else (conversion failure, host abort) is a generic rejection.
fn forward<T, C, I>(
    result: Result<Result<T, C>, Result<TimelockError, I>>,
) -> Result<T, SafeGuardError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(error)) => Err(error.into()),
        _ => Err(SafeGuardError::TimelockRejected),
    }
}
