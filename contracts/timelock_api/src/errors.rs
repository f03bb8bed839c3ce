use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TimelockError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfig = 3,
    InvalidValue = 4,
    InvalidCallData = 5,
    EtaBeforeDelay = 6,
    EtaExceedsMaximumDelay = 7,
    AlreadyQueued = 8,
    NotQueued = 9,
    NotMature = 10,
    Stale = 11,
    InsufficientBalance = 12,
    NoPendingAdmin = 13,
    UnknownFunction = 14,
}
