use soroban_sdk::{contract, contractimpl, log, Address, Env};

use crate::errors::RegistryError;
use crate::events::InstanceRegisteredEvent;
use crate::types::{
    DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

/// Append-only catalog of deployed guard instances and the version each
/// was deployed with.
#[contract]
pub struct Registry;

#[contractimpl]
impl Registry {
    /// `factory` becomes the only address allowed to register instances.
    pub fn initialize(env: Env, factory: Address) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Factory) {
            return Err(RegistryError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Factory, &factory);
        env.storage().instance().set(&DataKey::Count, &0u32);
        Self::bump_instance(&env);

        log!(&env, "registry initialized factory={}", factory);
        Ok(())
    }

    /// Records `instance` under the next index and returns that index.
    pub fn register(
        env: Env,
        caller: Address,
        instance: Address,
        version: u32,
    ) -> Result<u32, RegistryError> {
        let factory = Self::factory(env.clone())?;
        caller.require_auth();

        if caller != factory {
            return Err(RegistryError::RequiresPermission);
        }

        if version == 0 {
            return Err(RegistryError::ZeroVersion);
        }

        let version_key = DataKey::Version(instance.clone());
        if env.storage().persistent().has(&version_key) {
            return Err(RegistryError::AlreadyRegistered);
        }

        let index = Self::get_count(env.clone());
        let instance_key = DataKey::Instance(index);

        env.storage().persistent().set(&instance_key, &instance);
        env.storage().persistent().set(&version_key, &version);
        Self::bump_persistent(&env, &instance_key);
        Self::bump_persistent(&env, &version_key);

        env.storage().instance().set(&DataKey::Count, &(index + 1));
        Self::bump_instance(&env);

        InstanceRegisteredEvent {
            instance,
            index,
            version,
        }
        .publish(&env);

        Ok(index)
    }

    pub fn get_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Count)
            .unwrap_or(0)
    }

    pub fn get_at(env: Env, index: u32) -> Result<Address, RegistryError> {
        env.storage()
            .persistent()
            .get(&DataKey::Instance(index))
            .ok_or(RegistryError::InvalidIndex)
    }

    pub fn version_of(env: Env, instance: Address) -> Result<u32, RegistryError> {
        env.storage()
            .persistent()
            .get(&DataKey::Version(instance))
            .ok_or(RegistryError::NotRegistered)
    }

    pub fn factory(env: Env) -> Result<Address, RegistryError> {
        env.storage()
            .instance()
            .get(&DataKey::Factory)
            .ok_or(RegistryError::NotInitialized)
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    fn bump_persistent(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
}
