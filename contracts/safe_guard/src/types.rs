use soroban_sdk::{contracttype, BytesN};

/// Version stamp a factory records when it registers a guard instance.
pub const SAFEGUARD_VERSION: u32 = 1;

pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Creator,
    Timelock,
    RoleMembers(BytesN<32>),
    // fingerprints this guard forwarded and has not yet executed or canceled
    Queued(BytesN<32>),
}
