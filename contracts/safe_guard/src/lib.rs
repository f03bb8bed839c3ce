#![no_std]

mod errors;
mod events;
pub mod roles;
mod safe_guard;
mod types;

pub use errors::SafeGuardError;
pub use events::{
    RoleGrantedEvent, RoleRevokedEvent, TimelockDefinedEvent, TransactionCanceledEvent,
    TransactionExecutedEvent, TransactionQueuedEvent,
};
pub use safe_guard::{SafeGuard, SafeGuardClient};
pub use timelock_api::ExecutionOutcome;
pub use types::SAFEGUARD_VERSION;
