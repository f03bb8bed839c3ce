use soroban_sdk::{contractevent, Address, BytesN, String, Symbol, Val, Vec};

#[contractevent]
#[derive(Clone, Debug)]
pub struct RoleGrantedEvent {
    #[topic]
    pub role: BytesN<32>,
    pub account: Address,
    pub sender: Address,
    pub member_count: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RoleRevokedEvent {
    #[topic]
    pub role: BytesN<32>,
    pub account: Address,
    pub sender: Address,
    pub member_count: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct TimelockDefinedEvent {
    pub timelock: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct TransactionQueuedEvent {
    #[topic]
    pub fingerprint: BytesN<32>,
    pub proposer: Address,
    pub target: Address,
    pub value: i128,
    pub signature: Option<Symbol>,
    pub data: Vec<Val>,
    pub eta: u64,
    pub description: Option<String>,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct TransactionExecutedEvent {
    #[topic]
    pub fingerprint: BytesN<32>,
    pub executor: Address,
    pub succeeded: bool,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct TransactionCanceledEvent {
    #[topic]
    pub fingerprint: BytesN<32>,
    pub canceler: Address,
}
