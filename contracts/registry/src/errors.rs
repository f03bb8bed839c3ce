use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    RequiresPermission = 3,
    ZeroVersion = 4,
    AlreadyRegistered = 5,
    InvalidIndex = 6,
    NotRegistered = 7,
}
