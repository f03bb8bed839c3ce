#![no_std]

mod events;
mod timelock;
mod types;

pub use events::{
    CancelTransactionEvent, ExecuteTransactionEvent, NewAdminEvent, NewDelayEvent,
    NewPendingAdminEvent, QueueTransactionEvent,
};
pub use timelock::{Timelock, TimelockClient};
pub use timelock_api::{ExecutionOutcome, TimelockConfig, TimelockError};
