use soroban_sdk::{contracttype, Val, Vec};

/// Delay window enforced by a timelock.
///
/// `delay` is the minimum distance between queue time and `eta`. When
/// `max_delay` is set, `eta` may not be further than that from queue time.
/// When `grace_period` is set, a matured transaction must be executed within
/// that many seconds after `eta` or it becomes stale.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimelockConfig {
    pub delay: u64,
    pub max_delay: Option<u64>,
    pub grace_period: Option<u64>,
}

impl TimelockConfig {
    pub fn is_valid(&self) -> bool {
        match self.max_delay {
            Some(max_delay) => self.delay <= max_delay,
            None => true,
        }
    }
}

/// Result of running a matured transaction.
///
/// The queued entry is consumed in every case. `Executed` holds the value the
/// target returned, or nothing for a plain value transfer. `Failed` carries
/// the contract error code raised by the target, `Aborted` covers panics and
/// host errors that carry no contract code.
#[contracttype]
#[derive(Clone, Debug)]
pub enum ExecutionOutcome {
    Executed(Vec<Val>),
    Failed(u32),
    Aborted,
}

impl ExecutionOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, ExecutionOutcome::Executed(_))
    }
}
