use soroban_sdk::{contracttype, BytesN};

pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
// margin kept after a queued entry's deadline
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    PendingAdmin,
    Token,
    Config,
    // eta of a queued fingerprint; absent once executed or canceled
    Queued(BytesN<32>),
}
