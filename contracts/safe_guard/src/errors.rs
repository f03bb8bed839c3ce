use soroban_sdk::contracterror;
use timelock_api::TimelockError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SafeGuardError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    RequiresPermission = 3,
    ArityMismatch = 4,
    NotCreator = 5,
    TimelockAlreadyDefined = 6,
    TimelockNotDefined = 7,
    TimelockAdminMismatch = 8,
    AlreadyQueued = 9,
    NotQueued = 10,
    RoleMemberOutOfBounds = 11,
    LastAdminMember = 12,

    // rejections reported by the bound timelock
    TimelockRejected = 20,
    InvalidValue = 21,
    InvalidCallData = 22,
    EtaBeforeDelay = 23,
    EtaExceedsMaximumDelay = 24,
    NotMature = 25,
    Stale = 26,
    InsufficientBalance = 27,
}

impl From<TimelockError> for SafeGuardError {
    fn from(error: TimelockError) -> Self {
        match error {
            TimelockError::InvalidValue => SafeGuardError::InvalidValue,
            TimelockError::InvalidCallData => SafeGuardError::InvalidCallData,
            TimelockError::EtaBeforeDelay => SafeGuardError::EtaBeforeDelay,
            TimelockError::EtaExceedsMaximumDelay => SafeGuardError::EtaExceedsMaximumDelay,
            TimelockError::AlreadyQueued => SafeGuardError::AlreadyQueued,
            TimelockError::NotQueued => SafeGuardError::NotQueued,
            TimelockError::NotMature => SafeGuardError::NotMature,
            TimelockError::Stale => SafeGuardError::Stale,
            TimelockError::InsufficientBalance => SafeGuardError::InsufficientBalance,
            _ => SafeGuardError::TimelockRejected,
        }
    }
}
