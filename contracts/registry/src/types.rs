use soroban_sdk::{contracttype, Address};

pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Factory,
    Count,
    Instance(u32),
    Version(Address),
}
