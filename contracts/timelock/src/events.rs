use soroban_sdk::{contractevent, Address, BytesN, Symbol, Val, Vec};

#[contractevent]
#[derive(Clone, Debug)]
pub struct QueueTransactionEvent {
    #[topic]
    pub fingerprint: BytesN<32>,
    pub target: Address,
    pub value: i128,
    pub signature: Option<Symbol>,
    pub data: Vec<Val>,
    pub eta: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct CancelTransactionEvent {
    #[topic]
    pub fingerprint: BytesN<32>,
    pub target: Address,
    pub value: i128,
    pub signature: Option<Symbol>,
    pub data: Vec<Val>,
    pub eta: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ExecuteTransactionEvent {
    #[topic]
    pub fingerprint: BytesN<32>,
    pub target: Address,
    pub value: i128,
    pub signature: Option<Symbol>,
    pub data: Vec<Val>,
    pub eta: u64,
    pub succeeded: bool,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct NewPendingAdminEvent {
    pub pending_admin: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct NewAdminEvent {
    pub admin: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct NewDelayEvent {
    pub delay: u64,
}
