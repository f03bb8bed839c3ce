#![no_std]

mod errors;
mod fingerprint;
mod interface;
mod ttl;
mod types;

pub use errors::TimelockError;
pub use fingerprint::{fingerprint, Transaction};
pub use interface::{TimelockExecutor, TimelockExecutorClient};
pub use ttl::{ttl_until, LEDGER_CLOSE_SECONDS};
pub use types::{ExecutionOutcome, TimelockConfig};
