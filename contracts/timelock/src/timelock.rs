use soroban_sdk::{
    contract, contractimpl, log, token, vec, xdr::ScErrorType, Address, BytesN, Env, IntoVal,
    Symbol, TryFromVal, Val, Vec,
};
use timelock_api::{ttl_until, ExecutionOutcome, TimelockConfig, TimelockError, Transaction};

use crate::events::{
    CancelTransactionEvent, ExecuteTransactionEvent, NewAdminEvent, NewDelayEvent,
    NewPendingAdminEvent, QueueTransactionEvent,
};
use crate::types::{DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT};

#[contract]
pub struct Timelock;

#[contractimpl]
impl Timelock {
    /// Sets up the timelock. `admin` is the only address allowed to queue,
    /// cancel and execute; in a guarded deployment it is the guard contract.
    /// `token` settles the value attached to transactions.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        config: TimelockConfig,
    ) -> Result<(), TimelockError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(TimelockError::AlreadyInitialized);
        }

        if !config.is_valid() {
            return Err(TimelockError::InvalidConfig);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::Config, &config);
        Self::bump_instance(&env);

        log!(&env, "timelock initialized admin={} delay={}", admin, config.delay);
        Ok(())
    }

    pub fn queue_transaction(
        env: Env,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<BytesN<32>, TimelockError> {
        Self::require_admin(&env)?;

        // value on a self call would have nowhere to go
        if value < 0 || (value > 0 && target == env.current_contract_address()) {
            return Err(TimelockError::InvalidValue);
        }

        if signature.is_none() && !data.is_empty() {
            return Err(TimelockError::InvalidCallData);
        }

        let config = Self::read_config(&env)?;
        let now = env.ledger().timestamp();

        if eta < now.saturating_add(config.delay) {
            return Err(TimelockError::EtaBeforeDelay);
        }

        if let Some(max_delay) = config.max_delay {
            if eta > now.saturating_add(max_delay) {
                return Err(TimelockError::EtaExceedsMaximumDelay);
            }
        }

        let tx = Transaction::new(target, value, signature, data, eta);
        let fingerprint = tx.fingerprint(&env);
        let key = DataKey::Queued(fingerprint.clone());

        if env.storage().persistent().has(&key) {
            return Err(TimelockError::AlreadyQueued);
        }

        // keep the entry live until the grace period runs out
        let deadline = eta.saturating_add(config.grace_period.unwrap_or(0));
        let ttl = ttl_until(&env, deadline, PERSISTENT_BUMP_AMOUNT);
        env.storage().persistent().set(&key, &eta);
        env.storage().persistent().extend_ttl(&key, ttl, ttl);
        Self::bump_instance(&env);

        QueueTransactionEvent {
            fingerprint: fingerprint.clone(),
            target: tx.target,
            value: tx.value,
            signature: tx.signature,
            data: tx.data,
            eta,
        }
        .publish(&env);

        Ok(fingerprint)
    }

    /// Removes a queued transaction. Canceling a fingerprint that is not
    /// queued leaves state untouched and succeeds.
    pub fn cancel_transaction(
        env: Env,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<BytesN<32>, TimelockError> {
        Self::require_admin(&env)?;

        let tx = Transaction::new(target, value, signature, data, eta);
        let fingerprint = tx.fingerprint(&env);
        let key = DataKey::Queued(fingerprint.clone());

        if !env.storage().persistent().has(&key) {
            log!(&env, "cancel of unknown transaction ignored");
            return Ok(fingerprint);
        }

        env.storage().persistent().remove(&key);

        CancelTransactionEvent {
            fingerprint: fingerprint.clone(),
            target: tx.target,
            value: tx.value,
            signature: tx.signature,
            data: tx.data,
            eta,
        }
        .publish(&env);

        Ok(fingerprint)
    }

    /// Runs a matured transaction. The queue entry is consumed before the
    /// call, so a failing target is reported through the outcome and the
    /// transaction has to be queued again to be retried. Value only leaves
    /// the timelock when the call succeeds.
    pub fn execute_transaction(
        env: Env,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<ExecutionOutcome, TimelockError> {
        Self::require_admin(&env)?;

        let tx = Transaction::new(target, value, signature, data, eta);
        let fingerprint = tx.fingerprint(&env);
        let key = DataKey::Queued(fingerprint.clone());

        if !env.storage().persistent().has(&key) {
            return Err(TimelockError::NotQueued);
        }

        let config = Self::read_config(&env)?;
        let now = env.ledger().timestamp();

        if now < eta {
            return Err(TimelockError::NotMature);
        }

        if let Some(grace_period) = config.grace_period {
            if now > eta.saturating_add(grace_period) {
                return Err(TimelockError::Stale);
            }
        }

        let token = token::Client::new(&env, &Self::read_token(&env)?);
        if tx.value > 0 && token.balance(&env.current_contract_address()) < tx.value {
            return Err(TimelockError::InsufficientBalance);
        }

        env.storage().persistent().remove(&key);

        let outcome = Self::dispatch(&env, &token, &tx);

        ExecuteTransactionEvent {
            fingerprint,
            target: tx.target,
            value: tx.value,
            signature: tx.signature,
            data: tx.data,
            eta,
            succeeded: outcome.succeeded(),
        }
        .publish(&env);

        Ok(outcome)
    }

    /// Completes an admin handover started by a queued `set_pending_admin`.
    pub fn accept_admin(env: Env) -> Result<(), TimelockError> {
        let pending: Address = env
            .storage()
            .instance()
            .get(&DataKey::PendingAdmin)
            .ok_or(TimelockError::NoPendingAdmin)?;
        pending.require_auth();

        env.storage().instance().set(&DataKey::Admin, &pending);
        env.storage().instance().remove(&DataKey::PendingAdmin);

        NewAdminEvent { admin: pending }.publish(&env);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, TimelockError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(TimelockError::NotInitialized)
    }

    pub fn pending_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::PendingAdmin)
    }

    pub fn token(env: Env) -> Result<Address, TimelockError> {
        Self::read_token(&env)
    }

    pub fn config(env: Env) -> Result<TimelockConfig, TimelockError> {
        Self::read_config(&env)
    }

    pub fn is_queued(env: Env, fingerprint: BytesN<32>) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Queued(fingerprint))
    }

    pub fn queued_eta(env: Env, fingerprint: BytesN<32>) -> Option<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::Queued(fingerprint))
    }

    fn require_admin(env: &Env) -> Result<(), TimelockError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(TimelockError::NotInitialized)?;
        admin.require_auth();
        Ok(())
    }

    fn read_config(env: &Env) -> Result<TimelockConfig, TimelockError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(TimelockError::NotInitialized)
    }

    fn read_token(env: &Env) -> Result<Address, TimelockError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(TimelockError::NotInitialized)
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    fn dispatch(env: &Env, token: &token::Client, tx: &Transaction) -> ExecutionOutcome {
        let timelock = env.current_contract_address();

        let Some(function) = tx.signature.clone() else {
            // plain value transfer
            if tx.value > 0 {
                token.transfer(&timelock, &tx.target, &tx.value);
            }
            return ExecutionOutcome::Executed(Vec::new(env));
        };

        if tx.target == timelock {
            return Self::administer(env, &function, &tx.data);
        }

        // The target may spend the value from the timelock while it runs.
        // Whatever it leaves unspent is paid out once the call succeeded.
        // A failed call rolls back its spending, and the allowance is
        // cleared either way.
        if tx.value > 0 {
            token.approve(&timelock, &tx.target, &tx.value, &env.ledger().sequence());
        }

        let outcome = match env.try_invoke_contract::<Val, soroban_sdk::Error>(
            &tx.target,
            &function,
            tx.data.clone(),
        ) {
            Ok(Ok(returned)) => ExecutionOutcome::Executed(vec![env, returned]),
            Err(Ok(error)) if error.is_type(ScErrorType::Contract) => {
                ExecutionOutcome::Failed(error.get_code())
            }
            _ => ExecutionOutcome::Aborted,
        };

        if tx.value > 0 {
            let unspent = token.allowance(&timelock, &tx.target);
            token.approve(&timelock, &tx.target, &0, &env.ledger().sequence());
            if outcome.succeeded() && unspent > 0 {
                token.transfer(&timelock, &tx.target, &unspent);
            }
        }

        outcome
    }

    // Calls whose target is the timelock itself. A contract cannot invoke
    // itself, so these are applied in place.
    fn administer(env: &Env, function: &Symbol, data: &Vec<Val>) -> ExecutionOutcome {
        if *function == Symbol::new(env, "set_pending_admin") {
            let Some(pending) = single_arg::<Address>(env, data) else {
                return ExecutionOutcome::Failed(TimelockError::InvalidCallData as u32);
            };
            env.storage()
                .instance()
                .set(&DataKey::PendingAdmin, &pending);
            NewPendingAdminEvent {
                pending_admin: pending,
            }
            .publish(env);
            return ExecutionOutcome::Executed(vec![env, ().into_val(env)]);
        }

        if *function == Symbol::new(env, "set_delay") {
            let Some(delay) = single_arg::<u64>(env, data) else {
                return ExecutionOutcome::Failed(TimelockError::InvalidCallData as u32);
            };
            let Ok(mut config) = Self::read_config(env) else {
                return ExecutionOutcome::Failed(TimelockError::NotInitialized as u32);
            };
            config.delay = delay;
            if !config.is_valid() {
                return ExecutionOutcome::Failed(TimelockError::InvalidConfig as u32);
            }
            env.storage().instance().set(&DataKey::Config, &config);
            NewDelayEvent { delay }.publish(env);
            return ExecutionOutcome::Executed(vec![env, ().into_val(env)]);
        }

        ExecutionOutcome::Failed(TimelockError::UnknownFunction as u32)
    }
}

fn single_arg<T: TryFromVal<Env, Val>>(env: &Env, data: &Vec<Val>) -> Option<T> {
    if data.len() != 1 {
        return None;
    }
    T::try_from_val(env, &data.get_unchecked(0)).ok()
}
