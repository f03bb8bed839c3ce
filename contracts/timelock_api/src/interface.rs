use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol, Val, Vec};

use crate::errors::TimelockError;
use crate::types::{ExecutionOutcome, TimelockConfig};

/// The calls a guard makes on its bound timelock. The transaction calls
/// must be authorized by the timelock admin.
#[contractclient(name = "TimelockExecutorClient")]
pub trait TimelockExecutor {
    fn queue_transaction(
        env: Env,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<BytesN<32>, TimelockError>;

    fn cancel_transaction(
        env: Env,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<BytesN<32>, TimelockError>;

    fn execute_transaction(
        env: Env,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<ExecutionOutcome, TimelockError>;

    fn admin(env: Env) -> Result<Address, TimelockError>;

    fn config(env: Env) -> Result<TimelockConfig, TimelockError>;
}
